//! Compilation flags dependent aliases for mathematical types.

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(all(feature = "f32", not(feature = "f64")))]
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 2;

/// The point type.
pub use na::Point2 as Point;

/// The vector type.
pub use na::Vector2 as Vector;
