//! Non-persistent geometric queries.
//!
//! The most general method provided by this module is [`collision()`], which
//! tests any two [`Shape`](crate::shape::Shape)s for overlap and reports the
//! full overlap geometry.
//!
//! The functions exported by the [`sat`] submodule are more specific versions
//! of the same tests, dedicated to pairs of shapes known at compile-time,
//! e.g. [`sat::circle_circle_find_overlap`]. They are less convenient to use
//! than the generic version but avoid the dispatch on the shape pair.

pub use self::collision::{collision, Collision};

pub mod collision;
pub mod sat;
