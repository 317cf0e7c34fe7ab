use crate::math::{Real, Vector};
use crate::query::sat::Projection;

/// The raw result of a successful SAT test between two shapes.
///
/// Whatever internal order a tester ran with, the `a_*` fields always refer
/// to the first shape of the caller's original pair; the testers' `flipped`
/// flag takes care of the re-orientation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Overlap {
    /// The overlap distance along `axis`, signed relative to the caller's
    /// shape ordering.
    pub distance: Real,
    /// The candidate axis that produced the smallest absolute overlap.
    pub axis: Vector<Real>,
    /// Whether the first shape's projected range stayed within the second's
    /// on every tested axis.
    pub a_contained: bool,
    /// Whether the second shape's projected range stayed within the first's
    /// on every tested axis.
    pub b_contained: bool,
    /// The translation that removes all overlap.
    pub separation: Vector<Real>,
}

impl Default for Overlap {
    fn default() -> Self {
        Overlap {
            distance: 0.0,
            axis: Vector::zeros(),
            a_contained: false,
            b_contained: false,
            separation: Vector::zeros(),
        }
    }
}

impl Overlap {
    /// Clears the containment flags contradicted by the given pair of
    /// projected ranges.
    ///
    /// `flipped` indicates that the tester is running with its arguments in
    /// the opposite order from the caller's, which reverses the flag
    /// orientation.
    pub(crate) fn update_containment(
        &mut self,
        range_a: &Projection,
        range_b: &Projection,
        flipped: bool,
    ) {
        if flipped {
            if range_a.max < range_b.max || range_a.min > range_b.min {
                self.a_contained = false;
            }
            if range_b.max < range_a.max || range_b.min > range_a.min {
                self.b_contained = false;
            }
        } else {
            if range_a.max > range_b.max || range_a.min < range_b.min {
                self.a_contained = false;
            }
            if range_b.max > range_a.max || range_b.min < range_a.min {
                self.b_contained = false;
            }
        }
    }
}
