//! Various unsorted geometrical and logical operators.

pub use self::with_magnitude::{normalize_or_zero, with_magnitude};

mod with_magnitude;
