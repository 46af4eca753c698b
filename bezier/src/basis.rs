use nalgebra_glm::{self as glm, DMat4, DVec4};

/// Returns the cubic Bézier basis matrix.
///
/// The matrix is symmetric, so it reads the same whether the entries are
/// taken row- or column-major.
pub fn bezier_basis() -> DMat4 {
    glm::mat4(
        -1.0, 3.0, -3.0, 1.0, //
        3.0, -6.0, 3.0, 0.0, //
        -3.0, 3.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, 0.0,
    )
}

/// Power vector `[t³, t², t, 1]`
pub fn power_basis(t: f64) -> DVec4 {
    DVec4::new(t * t * t, t * t, t, 1.0)
}

/// Blending weights `M · T` for the four control points of a segment.
///
/// These are the cubic Bernstein polynomials evaluated at `t`.
pub fn blend_weights(t: f64) -> DVec4 {
    bezier_basis() * power_basis(t)
}
