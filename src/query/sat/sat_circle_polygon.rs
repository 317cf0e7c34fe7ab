use crate::math::{Point, Real};
use crate::query::sat::{edge_perpendicular_axis, patch_segment_vertices, Overlap, Projection};
use crate::shape::{Circle, Polygon};
use crate::utils;
use na;

/// Tests a circle against a polygon.
///
/// Two families of candidate axes are tried: first the axis from the circle's
/// center to the polygon's nearest vertex, then the perpendicular of every
/// polygon edge. `flipped` records that the caller actually passed
/// `(polygon, circle)`; it negates the distance sign so that the result reads
/// in the caller's argument order.
pub fn circle_polygon_find_overlap(
    circle: &Circle,
    polygon: &Polygon,
    flipped: bool,
) -> Option<Overlap> {
    let mut result = Overlap {
        a_contained: true,
        b_contained: true,
        ..Overlap::default()
    };

    let mut vertices = polygon.transformed_vertices();
    patch_segment_vertices(&mut vertices);

    let offset = polygon.position - circle.position;
    let radius = circle.transformed_radius();

    // Nearest transformed vertex, in absolute coordinates.
    let mut closest_distance = Real::MAX;
    let mut closest_vertex = Point::origin();

    for vertex in &vertices {
        let translated = polygon.position + vertex.coords;
        let distance = na::distance_squared(&translated, &circle.position);

        if distance < closest_distance {
            closest_distance = distance;
            closest_vertex = translated;
        }
    }

    // First candidate: the axis from the circle's center to that vertex.
    let axis = utils::normalize_or_zero(&(closest_vertex - circle.position));

    let mut range_polygon = Projection::of_points(&axis, &vertices);
    range_polygon.shift(axis.dot(&offset));
    let range_circle = Projection::of_circle(radius);

    if range_polygon.gap(&range_circle) {
        return None;
    }

    let mut distance = range_circle.max - range_polygon.min;
    if flipped {
        distance = -distance;
    }

    let mut shortest_distance = distance.abs();
    result.distance = distance;
    result.axis = axis;
    result.update_containment(&range_polygon, &range_circle, flipped);

    // Then the perpendicular of every polygon edge, as in the
    // polygon-polygon test.
    for i in 0..vertices.len() {
        let axis = edge_perpendicular_axis(&vertices, i);

        let mut range_polygon = Projection::of_points(&axis, &vertices);
        range_polygon.shift(axis.dot(&offset));
        let range_circle = Projection::of_circle(radius);

        if range_polygon.gap(&range_circle) {
            return None;
        }

        result.update_containment(&range_polygon, &range_circle, flipped);

        let mut distance = range_circle.max - range_polygon.min;
        if flipped {
            distance = -distance;
        }

        let distance_abs = distance.abs();
        if distance_abs < shortest_distance {
            shortest_distance = distance_abs;
            result.distance = distance;
            result.axis = axis;
        }
    }

    result.separation = result.axis * result.distance;

    Some(result)
}
