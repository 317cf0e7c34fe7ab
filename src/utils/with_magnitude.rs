use crate::math::{Real, Vector};
use num::Zero;

/// Returns a copy of `v` uniformly rescaled to the given magnitude.
///
/// If the current magnitude of `v` is exactly zero, the vector is returned
/// unchanged rather than raising an error.
#[inline]
pub fn with_magnitude(v: &Vector<Real>, magnitude: Real) -> Vector<Real> {
    let norm = v.norm();

    if norm.is_zero() {
        *v
    } else {
        *v * (magnitude / norm)
    }
}

/// Returns a unit-length copy of `v`, or the zero vector if `v` has zero
/// magnitude.
#[inline]
pub fn normalize_or_zero(v: &Vector<Real>) -> Vector<Real> {
    with_magnitude(v, 1.0)
}
