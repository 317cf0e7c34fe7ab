use crate::query::sat::Overlap;
use crate::shape::Circle;
use crate::utils;

/// Closed-form overlap test between two circles.
///
/// Returns `None` when the center distance exceeds the sum of the transformed
/// radii; exact tangency still counts as a collision, with a zero-magnitude
/// separation. Coincident centers leave the separating axis as the zero
/// vector.
pub fn circle_circle_find_overlap(circle1: &Circle, circle2: &Circle) -> Option<Overlap> {
    let radius1 = circle1.transformed_radius();
    let radius2 = circle2.transformed_radius();
    let radius_total = radius1 + radius2;

    let centers = circle2.position - circle1.position;
    let distance = centers.norm();

    if distance > radius_total {
        return None;
    }

    let axis = utils::normalize_or_zero(&centers);

    Some(Overlap {
        distance,
        axis,
        a_contained: radius1 <= radius2 && distance <= radius2 - radius1,
        b_contained: radius2 <= radius1 && distance <= radius1 - radius2,
        separation: axis * (radius_total - distance),
    })
}
