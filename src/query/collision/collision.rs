use crate::math::{Real, Vector};
use crate::query::sat::Overlap;
use crate::shape::Shape;

/// Geometric description of the overlap between two shapes.
///
/// The shapes are borrowed, not owned: a `Collision` is produced fresh by
/// every call to [`collision`](super::collision) and never mutates or caches
/// anything on the shapes themselves.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Collision<'a> {
    /// The first shape of the tested pair, in the order given by the caller.
    pub shape_a: &'a Shape,
    /// The second shape of the tested pair, in the order given by the caller.
    pub shape_b: &'a Shape,
    /// The overlap distance along [`Self::vector`].
    ///
    /// The sign encodes the side relationship of the two shapes along the
    /// axis, relative to the `shape_a` → `shape_b` ordering.
    pub distance: Real,
    /// The separating axis, as a unit vector.
    ///
    /// Degenerate input geometry (coincident centers, zero-length edges) can
    /// leave this as the zero vector.
    pub vector: Vector<Real>,
    /// Whether `shape_a`'s projection lies within `shape_b`'s on every tested
    /// axis.
    pub shape_a_contained: bool,
    /// Whether `shape_b`'s projection lies within `shape_a`'s on every tested
    /// axis.
    pub shape_b_contained: bool,
    /// The shortest translation that removes all overlap between the two
    /// shapes.
    pub separation: Vector<Real>,
}

impl<'a> Collision<'a> {
    /// Attaches the tested shape pair to the overlap geometry computed by one
    /// of the SAT testers.
    #[inline]
    pub(crate) fn from_overlap(shape_a: &'a Shape, shape_b: &'a Shape, overlap: Overlap) -> Self {
        Collision {
            shape_a,
            shape_b,
            distance: overlap.distance,
            vector: overlap.axis,
            shape_a_contained: overlap.a_contained,
            shape_b_contained: overlap.b_contained,
            separation: overlap.separation,
        }
    }
}
