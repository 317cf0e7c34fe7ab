//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! The **Separating Axis Theorem** states that two convex shapes do not
//! intersect if and only if there exists an axis onto which their projections
//! do not overlap. The testers in this module each try a finite set of
//! candidate axes:
//!
//! - the outward perpendicular of every polygon edge;
//! - for circles against polygons, the axis from the circle's center to the
//!   polygon's nearest vertex.
//!
//! Each candidate axis is checked for a gap between the projected ranges
//! (early exit: no collision), and the axis producing the smallest absolute
//! overlap across all candidates becomes the separating axis of the reported
//! [`Overlap`].
//!
//! Degenerate geometry is handled by silent policy rather than errors:
//! zero-length axes are used as-is, and 2-vertex "line segment" polygons are
//! patched with a synthetic third vertex giving them a hairline thickness.

pub use self::overlap::Overlap;
pub use self::projection::Projection;
pub use self::sat_circle_circle::circle_circle_find_overlap;
pub use self::sat_circle_polygon::circle_polygon_find_overlap;
pub use self::sat_polygon_polygon::polygon_polygon_find_overlap;

pub(crate) use self::axis::{edge_perpendicular_axis, patch_segment_vertices};

mod axis;
mod overlap;
mod projection;
mod sat_circle_circle;
mod sat_circle_polygon;
mod sat_polygon_polygon;
