use std::num::NonZeroUsize;

use bezier::{Curve, CurveKind, CurveSink, DVec3};
use log::debug;

/// Upper bound on the sample density accepted from the command line or the
/// keyboard.
pub const MAX_SAMPLES_PER_SEGMENT: usize = 10_000;

/// Everything the viewer draws, plus the settings the keyboard can change.
pub struct Scene {
    curve: Curve,
    samples_per_segment: NonZeroUsize,
    color: [f32; 4],
    dirty: bool,
}

impl Scene {
    pub fn new(control_points: Vec<DVec3>, samples_per_segment: NonZeroUsize, color: [f32; 4]) -> Self {
        let mut curve = Curve::new(CurveKind::Bezier);
        curve.set_control_points(control_points);
        Self {
            curve,
            samples_per_segment,
            color,
            dirty: true,
        }
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    pub fn samples_per_segment(&self) -> NonZeroUsize {
        self.samples_per_segment
    }

    /// Replaces the control polygon; the next regeneration re-uploads the
    /// whole curve, even if it ends up empty.
    pub fn set_control_points(&mut self, control_points: Vec<DVec3>) {
        self.curve.set_control_points(control_points);
        self.dirty = true;
    }

    pub fn increase_density(&mut self) {
        if self.samples_per_segment.get() >= MAX_SAMPLES_PER_SEGMENT {
            return;
        }
        self.samples_per_segment = self.samples_per_segment.saturating_add(1);
        self.dirty = true;
        debug!("Sampling {} points per segment", self.samples_per_segment);
    }

    pub fn decrease_density(&mut self) {
        if let Some(n) = NonZeroUsize::new(self.samples_per_segment.get() - 1) {
            self.samples_per_segment = n;
            self.dirty = true;
            debug!("Sampling {} points per segment", self.samples_per_segment);
        }
    }

    /// Re-samples the curve and pushes it to `sink` if anything changed since
    /// the last call. Returns true if the sink was updated.
    pub fn regenerate_if_dirty<S: CurveSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        self.curve.generate(self.samples_per_segment);
        self.curve.upload(sink);
        true
    }
}
