use crate::query::sat;
use crate::query::Collision;
use crate::shape::Shape;

/// Tests two shapes for overlap.
///
/// Returns `None` if the shapes do not overlap on every candidate separating
/// axis. Otherwise the returned [`Collision`] borrows `shape_a` and `shape_b`
/// in the same order as they were passed in, whatever internal orientation
/// the testers used.
pub fn collision<'a>(shape_a: &'a Shape, shape_b: &'a Shape) -> Option<Collision<'a>> {
    let overlap = match (shape_a, shape_b) {
        (Shape::Circle(circle1), Shape::Circle(circle2)) => {
            sat::circle_circle_find_overlap(circle1, circle2)?
        }
        (Shape::Polygon(polygon1), Shape::Polygon(polygon2)) => {
            // Each polygon takes a turn as the reference shape; a gap found
            // by either directional test means no collision.
            let test_ab = sat::polygon_polygon_find_overlap(polygon1, polygon2, false)?;
            let test_ba = sat::polygon_polygon_find_overlap(polygon2, polygon1, true)?;

            let mut best = if test_ab.distance.abs() < test_ba.distance.abs() {
                test_ab
            } else {
                test_ba
            };

            // A shape only counts as contained if both orientations agree.
            best.a_contained = test_ab.a_contained && test_ba.a_contained;
            best.b_contained = test_ab.b_contained && test_ba.b_contained;
            best
        }
        (Shape::Circle(circle), Shape::Polygon(polygon)) => {
            sat::circle_polygon_find_overlap(circle, polygon, false)?
        }
        (Shape::Polygon(polygon), Shape::Circle(circle)) => {
            sat::circle_polygon_find_overlap(circle, polygon, true)?
        }
    };

    Some(Collision::from_overlap(shape_a, shape_b, overlap))
}
