//! Shapes supported by sat2d.

pub use self::circle::Circle;
pub use self::polygon::{Polygon, RegularPolygonError};
pub use self::shape::{Shape, ShapeType};

mod circle;
mod polygon;
mod shape;
