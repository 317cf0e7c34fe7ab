//! Computation of the overlap geometry between two shapes.

pub use self::collision::Collision;
pub use self::collision_shape_shape::collision;

mod collision;
mod collision_shape_shape;
