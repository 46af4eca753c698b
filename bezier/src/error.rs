use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("sample index {index} out of range (curve has {len} samples)")]
    IndexOutOfRange { index: usize, len: usize },
}
