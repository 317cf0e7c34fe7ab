use crate::math::{Point, Real};

/// Error indicating that a regular polygon could not be constructed.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegularPolygonError {
    /// The requested number of sides is smaller than three.
    #[error("at least three sides are needed to build a polygon, got {0}")]
    NotEnoughSides(u32),
}

/// A convex polygon shape.
///
/// Vertices are stored in local space, in a consistent winding order: vertex
/// `i` is adjacent to vertex `i + 1`, wrapping back to vertex `0`. Convexity
/// and winding direction are not validated. A 2-vertex polygon is accepted
/// and treated as a line segment by the collision tests.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Clone)]
pub struct Polygon {
    /// The position of the polygon's local origin.
    pub position: Point<Real>,
    /// The vertices of the polygon, in local space.
    pub vertices: Vec<Point<Real>>,
    /// The uniform scale factor applied to the vertices.
    pub scale: Real,
    /// The rotation of the polygon around its local origin, in degrees.
    pub rotation: Real,
}

impl Polygon {
    /// Creates a new polygon from the given vertices, positioned at the
    /// origin, with no rotation and a scale of 1.
    pub fn new(vertices: Vec<Point<Real>>) -> Polygon {
        Polygon {
            position: Point::origin(),
            vertices,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    /// Creates a regular polygon with `sides` vertices placed evenly on a
    /// circle of the given radius.
    ///
    /// The angular offset is chosen so that the first edge is horizontal and
    /// symmetric about the vertical axis. Fails if `sides < 3`.
    pub fn regular(sides: u32, radius: Real) -> Result<Polygon, RegularPolygonError> {
        if sides < 3 {
            return Err(RegularPolygonError::NotEnoughSides(sides));
        }

        let step = core::f64::consts::TAU / f64::from(sides);
        let mut vertices = Vec::with_capacity(sides as usize);

        for i in 0..sides {
            let angle = f64::from(i) * step + (core::f64::consts::PI - step) * 0.5;
            vertices.push(Point::new(
                (angle.cos() as Real) * radius,
                (angle.sin() as Real) * radius,
            ));
        }

        Ok(Polygon::new(vertices))
    }

    /// Creates an axis-aligned rectangle with the given dimensions, centered
    /// at the local origin.
    pub fn rectangle(width: Real, height: Real) -> Polygon {
        let half_width = width / 2.0;
        let half_height = height / 2.0;

        Polygon::new(vec![
            Point::new(-half_width, -half_height),
            Point::new(half_width, -half_height),
            Point::new(half_width, half_height),
            Point::new(-half_width, half_height),
        ])
    }

    /// Computes the vertices of this polygon with its rotation and scale
    /// applied, as a fresh list.
    ///
    /// The polygon's position is not applied: the collision tests handle
    /// translation as a per-pair offset. A scale of exactly 0 is skipped
    /// instead of collapsing every vertex onto the origin.
    pub fn transformed_vertices(&self) -> Vec<Point<Real>> {
        self.vertices
            .iter()
            .map(|vertex| {
                let mut result = *vertex;

                if self.rotation != 0.0 {
                    let hypotenuse = vertex.coords.norm();
                    let angle = vertex.y.atan2(vertex.x) + self.rotation.to_radians();
                    result = Point::new(angle.cos() * hypotenuse, angle.sin() * hypotenuse);
                }

                if self.scale != 0.0 {
                    result.coords *= self.scale;
                }

                result
            })
            .collect()
    }
}
