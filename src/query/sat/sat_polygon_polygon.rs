use crate::math::Real;
use crate::query::sat::{edge_perpendicular_axis, patch_segment_vertices, Overlap, Projection};
use crate::shape::Polygon;

/// Tests two polygons by projecting both onto the perpendicular of every edge
/// of `polygon1`.
///
/// This is a one-way test: a full polygon-polygon query runs it twice, once
/// per polygon as the reference shape. The second run passes `flipped = true`
/// so that the distance sign and the containment flags keep the caller's
/// original orientation.
pub fn polygon_polygon_find_overlap(
    polygon1: &Polygon,
    polygon2: &Polygon,
    flipped: bool,
) -> Option<Overlap> {
    let mut shortest_distance = Real::MAX;
    let mut result = Overlap {
        a_contained: true,
        b_contained: true,
        ..Overlap::default()
    };

    let mut vertices1 = polygon1.transformed_vertices();
    let mut vertices2 = polygon2.transformed_vertices();
    patch_segment_vertices(&mut vertices1);
    patch_segment_vertices(&mut vertices2);

    let offset = polygon1.position - polygon2.position;

    for i in 0..vertices1.len() {
        let axis = edge_perpendicular_axis(&vertices1, i);

        let mut range1 = Projection::of_points(&axis, &vertices1);
        let range2 = Projection::of_points(&axis, &vertices2);

        // Absolute position only enters through this shift: the projected
        // vertex lists are local to each polygon's origin.
        range1.shift(axis.dot(&offset));

        if range1.gap(&range2) {
            return None;
        }

        result.update_containment(&range1, &range2, flipped);

        let mut distance = -(range2.max - range1.min);
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
