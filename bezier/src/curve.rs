use std::num::NonZeroUsize;

use log::{debug, trace};
use nalgebra_glm::DVec3;

use crate::{error::CurveError, segment::segments, sink::CurveSink};

/// The family of curve used to interpret a control polygon.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CurveKind {
    /// Piecewise cubic Bézier, four points per segment with one shared
    /// between neighbouring segments.
    #[default]
    Bezier,
}

/// Samples the curve described by `control_points`.
///
/// Each segment is evaluated at `t = j / samples_per_segment` for
/// `j = 0..=samples_per_segment`, so it contributes exactly
/// `samples_per_segment + 1` points and always ends at `t = 1`. Adjacent
/// segments therefore emit their shared control point twice.
///
/// Fewer than four control points yield an empty result.
pub fn generate(
    kind: CurveKind,
    control_points: &[DVec3],
    samples_per_segment: NonZeroUsize,
) -> Vec<DVec3> {
    let n = samples_per_segment.get();
    match kind {
        CurveKind::Bezier => {
            if control_points.len() < 4 {
                trace!(
                    "{} control points, need at least 4 for a cubic segment",
                    control_points.len()
                );
                return vec![];
            }
            let per_segment = n.saturating_add(1);
            let mut out = Vec::with_capacity(
                ((control_points.len() - 1) / 3).saturating_mul(per_segment),
            );
            for seg in segments(control_points) {
                out.extend((0..=n).map(|j| seg.point(j as f64 / n as f64)));
            }
            debug!(
                "Sampled {} Bézier segments into {} points",
                out.len() / per_segment,
                out.len()
            );
            out
        }
    }
}

/// A curve together with its control polygon and most recent sampling.
#[derive(Clone, Debug, Default)]
pub struct Curve {
    kind: CurveKind,
    control_points: Vec<DVec3>,
    samples: Vec<DVec3>,
}

impl Curve {
    pub fn new(kind: CurveKind) -> Self {
        Self {
            kind,
            control_points: vec![],
            samples: vec![],
        }
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Replaces the control polygon. Existing samples are kept until the next
    /// call to [`Curve::generate`].
    pub fn set_control_points(&mut self, control_points: Vec<DVec3>) {
        self.control_points = control_points;
    }

    pub fn control_points(&self) -> &[DVec3] {
        &self.control_points
    }

    /// Re-samples the curve, discarding any previous samples.
    pub fn generate(&mut self, samples_per_segment: NonZeroUsize) {
        self.samples = generate(self.kind, &self.control_points, samples_per_segment);
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[DVec3] {
        &self.samples
    }

    pub fn sample(&self, index: usize) -> Result<DVec3, CurveError> {
        self.samples
            .get(index)
            .copied()
            .ok_or(CurveError::IndexOutOfRange {
                index,
                len: self.samples.len(),
            })
    }

    /// Sends the full sample list to `sink`. An empty curve empties the sink.
    pub fn upload<S: CurveSink + ?Sized>(&self, sink: &mut S) {
        sink.replace(&self.samples);
    }
}
