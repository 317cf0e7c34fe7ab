use crate::math::{Point, Real};
use crate::shape::{Circle, Polygon};

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeType {
    /// A convex polygon shape.
    Polygon,
    /// A circle shape.
    Circle,
}

/// A shape that can be tested for collision.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Clone)]
pub enum Shape {
    /// A convex polygon.
    Polygon(Polygon),
    /// A circle.
    Circle(Circle),
}

impl Shape {
    /// The type of this shape.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Circle(_) => ShapeType::Circle,
        }
    }

    /// The position of this shape.
    #[inline]
    pub fn position(&self) -> Point<Real> {
        match self {
            Shape::Polygon(polygon) => polygon.position,
            Shape::Circle(circle) => circle.position,
        }
    }

    /// Returns the underlying polygon, if this shape is one.
    #[inline]
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(polygon) => Some(polygon),
            Shape::Circle(_) => None,
        }
    }

    /// Returns the underlying circle, if this shape is one.
    #[inline]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(circle) => Some(circle),
            Shape::Polygon(_) => None,
        }
    }
}

impl From<Polygon> for Shape {
    #[inline]
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Circle> for Shape {
    #[inline]
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
