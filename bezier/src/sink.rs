use nalgebra_glm::DVec3;

/// Destination for sampled curve geometry, typically a GPU vertex buffer.
///
/// A sink receives the whole sample list every time and discards whatever it
/// held before; there is no partial update.
pub trait CurveSink {
    fn replace(&mut self, samples: &[DVec3]);
}

impl CurveSink for Vec<DVec3> {
    fn replace(&mut self, samples: &[DVec3]) {
        self.clear();
        self.extend_from_slice(samples);
    }
}
