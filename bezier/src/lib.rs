//! Piecewise cubic Bézier evaluation using the matrix form `p = G · M · T`.
mod basis;
mod curve;
mod error;
mod segment;
mod sink;

pub use crate::basis::{bezier_basis, blend_weights, power_basis};
pub use crate::curve::{generate, Curve, CurveKind};
pub use crate::error::CurveError;
pub use crate::segment::{segments, CubicSegment};
pub use crate::sink::CurveSink;

pub use nalgebra_glm::DVec3;
