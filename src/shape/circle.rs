use crate::math::{Point, Real};

/// A circle shape.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Circle {
    /// The position of the circle's center.
    pub position: Point<Real>,
    /// The radius of the circle.
    pub radius: Real,
    /// The uniform scale factor applied to the radius.
    pub scale: Real,
    /// The rotation of the circle, in degrees.
    ///
    /// Kept for interface symmetry with [`Polygon`](super::Polygon); it has
    /// no effect on the circle's geometry.
    pub rotation: Real,
}

impl Circle {
    /// Creates a new circle with the given radius, centered at the origin.
    #[inline]
    pub fn new(radius: Real) -> Circle {
        Circle {
            position: Point::origin(),
            radius,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    /// The effective radius of this circle once its scale is applied.
    #[inline]
    pub fn transformed_radius(&self) -> Real {
        self.radius * self.scale
    }
}
