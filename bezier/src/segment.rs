use nalgebra_glm::DVec3;

use crate::basis::blend_weights;

/// One cubic piece of a curve, built from four consecutive control points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicSegment {
    pub points: [DVec3; 4],
}

impl CubicSegment {
    pub fn new(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Evaluates `G · M · T` at `t`, where the columns of `G` are the
    /// segment's control points.
    pub fn point(&self, t: f64) -> DVec3 {
        let w = blend_weights(t);
        let [p0, p1, p2, p3] = &self.points;
        p0 * w.x + p1 * w.y + p2 * w.z + p3 * w.w
    }
}

/// Splits a control polygon into cubic segments.
///
/// Segments start at indices `0, 3, 6, ...`, so neighbours share one control
/// point. Points left over at the tail that can't fill a segment are ignored.
pub fn segments(control_points: &[DVec3]) -> impl Iterator<Item = CubicSegment> + '_ {
    control_points
        .windows(4)
        .step_by(3)
        .map(|w| CubicSegment::new(w[0], w[1], w[2], w[3]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(n: usize) -> Vec<DVec3> {
        (0..n).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn too_few_points() {
        for n in 0..4 {
            assert_eq!(segments(&pts(n)).count(), 0);
        }
    }

    #[test]
    fn stride_of_three() {
        let points = pts(10);
        let segs: Vec<_> = segments(&points).collect();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].points[0].x, 0.0);
        assert_eq!(segs[1].points[0].x, 3.0);
        assert_eq!(segs[2].points[0].x, 6.0);
        assert_eq!(segs[2].points[3].x, 9.0);
    }

    #[test]
    fn incomplete_tail_is_dropped() {
        // 8 points: one full segment at 0..=3, the one at 3..=6, then 6,7 left
        assert_eq!(segments(&pts(8)).count(), 2);
        assert_eq!(segments(&pts(6)).count(), 1);
    }

    #[test]
    fn midpoint_closed_form() {
        let seg = CubicSegment::new(
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(2.0, 4.0, -1.0),
            DVec3::new(5.0, 3.0, 0.5),
            DVec3::new(7.0, -2.0, 2.0),
        );
        let [p0, p1, p2, p3] = seg.points;
        let expected = (p0 + p1 * 3.0 + p2 * 3.0 + p3) / 8.0;
        let mid = seg.point(0.5);
        assert_relative_eq!(mid.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(mid.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(mid.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_segment() {
        let p = DVec3::new(1.5, -2.0, 3.0);
        let seg = CubicSegment::new(p, p, p, p);
        for t in [0.0, 0.25, 0.5, 1.0] {
            let q = seg.point(t);
            assert_relative_eq!(q.x, p.x, epsilon = 1e-12);
            assert_relative_eq!(q.y, p.y, epsilon = 1e-12);
            assert_relative_eq!(q.z, p.z, epsilon = 1e-12);
        }
    }
}
