use crate::math::{Point, Real, Vector};
use crate::utils;

/// The synthetic thickness given to 2-vertex polygons so that the general
/// polygon algorithm does not degenerate.
pub(crate) const SEGMENT_THICKNESS: Real = 1.0e-6;

/// The perpendicular of the polygon edge starting at vertex `index`, obtained
/// by rotating the edge vector by 90° counterclockwise and normalizing it.
///
/// A degenerate edge (two coincident vertices) yields the zero vector, which
/// the callers use as-is.
pub(crate) fn edge_perpendicular_axis(vertices: &[Point<Real>], index: usize) -> Vector<Real> {
    let pt1 = vertices[index];
    let pt2 = vertices[(index + 1) % vertices.len()];

    let axis = Vector::new(-(pt2.y - pt1.y), pt2.x - pt1.x);
    utils::normalize_or_zero(&axis)
}

/// Gives a 2-vertex polygon a hairline thickness by appending a synthetic
/// third vertex, offset perpendicular to the segment by [`SEGMENT_THICKNESS`].
///
/// Vertex lists of any other length are left untouched.
pub(crate) fn patch_segment_vertices(vertices: &mut Vec<Point<Real>>) {
    if let &[pt1, pt2] = vertices.as_slice() {
        log::debug!("patching a 2-vertex polygon into a hairline triangle");

        let perpendicular = Vector::new(-(pt2.y - pt1.y), pt2.x - pt1.x);
        vertices.push(Point::from(utils::with_magnitude(
            &perpendicular,
            SEGMENT_THICKNESS,
        )));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn edge_axes_wrap_back_to_the_first_vertex() {
        let vertices = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
        ];

        assert_eq!(
            edge_perpendicular_axis(&vertices, 0),
            Vector::new(0.0, 1.0)
        );
        assert_eq!(
            edge_perpendicular_axis(&vertices, 1),
            Vector::new(-1.0, 0.0)
        );
        // The last edge connects vertex 2 back to vertex 0.
        let wrap = edge_perpendicular_axis(&vertices, 2);
        let expected = 1.0 / (2.0 as Real).sqrt();
        assert!((wrap.x - expected).abs() < 1.0e-6);
        assert!((wrap.y + expected).abs() < 1.0e-6);
    }

    #[test]
    fn segments_gain_a_third_vertex() {
        let mut vertices = vec![Point::new(-10.0, 0.0), Point::new(10.0, 0.0)];
        patch_segment_vertices(&mut vertices);

        assert_eq!(vertices.len(), 3);
        assert!((vertices[2].coords.norm() - SEGMENT_THICKNESS).abs() < 1.0e-9);
    }

    #[test]
    fn triangles_are_not_patched() {
        let mut vertices = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        patch_segment_vertices(&mut vertices);
        assert_eq!(vertices.len(), 3);
    }
}
