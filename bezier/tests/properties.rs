use std::num::NonZeroUsize;

use approx::assert_relative_eq;
use bezier::{generate, Curve, CurveKind};
use nalgebra_glm::DVec3;

fn n(v: usize) -> NonZeroUsize {
    NonZeroUsize::new(v).unwrap()
}

fn assert_close(a: DVec3, b: DVec3) {
    assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
    assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
}

fn s_curve() -> Vec<DVec3> {
    vec![
        DVec3::new(-3.0, 0.0, 0.0),
        DVec3::new(-2.0, 2.0, 0.5),
        DVec3::new(-1.0, 2.0, -0.5),
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, -2.0, 0.5),
        DVec3::new(2.0, -2.0, -0.5),
        DVec3::new(3.0, 0.0, 0.0),
    ]
}

#[test]
fn fewer_than_four_points_is_empty() {
    let points = s_curve();
    for len in 0..4 {
        for density in [1, 2, 50] {
            assert!(generate(CurveKind::Bezier, &points[..len], n(density)).is_empty());
        }
    }
}

#[test]
fn one_sample_per_segment_gives_endpoints() {
    let points = &s_curve()[..4];
    let out = generate(CurveKind::Bezier, points, n(1));
    assert_eq!(out, vec![points[0], points[3]]);
}

#[test]
fn quarter_circle_like_example() {
    let points = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
    ];
    let out = generate(CurveKind::Bezier, &points, n(2));
    assert_eq!(out.len(), 3);
    assert_close(out[0], DVec3::new(0.0, 0.0, 0.0));
    // (P0 + 3 P1 + 3 P2 + P3) / 8
    assert_close(out[1], DVec3::new(0.5, 0.75, 0.0));
    assert_close(out[2], DVec3::new(1.0, 0.0, 0.0));
}

#[test]
fn midpoint_of_every_segment() {
    let points = s_curve();
    let out = generate(CurveKind::Bezier, &points, n(2));
    assert_eq!(out.len(), 6);
    for (seg, window) in points.windows(4).step_by(3).enumerate() {
        let expected = (window[0] + window[1] * 3.0 + window[2] * 3.0 + window[3]) / 8.0;
        assert_close(out[seg * 3 + 1], expected);
    }
}

#[test]
fn shared_point_is_emitted_twice() {
    let points = s_curve();
    let density = 16;
    let out = generate(CurveKind::Bezier, &points, n(density));
    assert_eq!(out.len(), 2 * (density + 1));
    let end_of_first = out[density];
    let start_of_second = out[density + 1];
    assert_eq!(end_of_first, points[3]);
    assert_eq!(start_of_second, points[3]);
}

#[test]
fn generation_is_deterministic() {
    let points = s_curve();
    let a = generate(CurveKind::Bezier, &points, n(33));
    let b = generate(CurveKind::Bezier, &points, n(33));
    assert_eq!(a, b);

    let mut curve = Curve::new(CurveKind::Bezier);
    curve.set_control_points(points);
    curve.generate(n(33));
    assert_eq!(curve.samples(), a.as_slice());
}

#[test]
fn colinear_points_stay_on_the_line() {
    let points: Vec<_> = (0..4).map(|i| DVec3::new(i as f64, 2.0 * i as f64, 0.0)).collect();
    for p in generate(CurveKind::Bezier, &points, n(12)) {
        assert_relative_eq!(p.y, 2.0 * p.x, epsilon = 1e-12);
        assert_eq!(p.z, 0.0);
    }
}
