use approx::assert_relative_eq;
use sat2d::math::{Point, Real};
use sat2d::query;
use sat2d::shape::{Polygon, Shape};

fn square_at(x: Real, y: Real, side: Real) -> Shape {
    let mut square = Polygon::rectangle(side, side);
    square.position = Point::new(x, y);
    Shape::Polygon(square)
}

#[test]
fn test_overlapping_squares() {
    let a = square_at(0.0, 0.0, 100.0);
    let b = square_at(60.0, 0.0, 100.0);

    let collision = query::collision(&a, &b).expect("the squares overlap by 40 units");

    assert_relative_eq!(collision.distance.abs(), 40.0);
    assert_relative_eq!(collision.separation.x, 40.0);
    assert_relative_eq!(collision.separation.y, 0.0);
    assert!(!collision.shape_a_contained);
    assert!(!collision.shape_b_contained);
}

#[test]
fn test_disjoint_squares() {
    let a = square_at(0.0, 0.0, 100.0);
    let b = square_at(120.0, 0.0, 100.0);

    assert!(query::collision(&a, &b).is_none());
    assert!(query::collision(&b, &a).is_none());
}

#[test]
fn test_edge_touching_squares_collide() {
    let a = square_at(0.0, 0.0, 100.0);
    let b = square_at(100.0, 0.0, 100.0);

    let collision = query::collision(&a, &b).expect("touching edges count as a collision");

    assert_relative_eq!(collision.distance.abs(), 0.0);
    assert_relative_eq!(collision.separation.norm(), 0.0);
}

#[test]
fn test_coincident_squares_contain_each_other() {
    let a = square_at(0.0, 0.0, 100.0);
    let b = square_at(0.0, 0.0, 100.0);

    let collision = query::collision(&a, &b).expect("coincident squares overlap");

    assert!(collision.shape_a_contained);
    assert!(collision.shape_b_contained);
    assert_relative_eq!(collision.distance.abs(), 100.0);
    assert_relative_eq!(collision.separation.norm(), 100.0);
}

#[test]
fn test_rotated_square_uses_its_own_axes() {
    let a = square_at(0.0, 0.0, 100.0);

    let mut rotated = Polygon::rectangle(100.0, 100.0);
    rotated.position = Point::new(100.0, 0.0);
    rotated.rotation = 45.0;
    let b = Shape::Polygon(rotated);

    // The rotated square reaches 50 * sqrt(2) along the X axis, so the
    // overlap against the axis-aligned square is 50 * sqrt(2) - 50.
    let expected = 50.0 * (2.0 as Real).sqrt() - 50.0;
    let collision = query::collision(&a, &b).expect("the corner reaches into the square");

    assert_relative_eq!(collision.distance.abs(), expected, epsilon = 1.0e-4);
    assert_relative_eq!(collision.separation.x, expected, epsilon = 1.0e-4);
    assert_relative_eq!(collision.separation.y, 0.0, epsilon = 1.0e-4);
}

#[test]
fn test_small_triangle_inside_square_is_contained() {
    let a = Shape::Polygon(Polygon::regular(3, 10.0).unwrap());
    let b = square_at(0.0, 0.0, 100.0);

    let collision = query::collision(&a, &b).expect("nested shapes overlap");

    assert!(collision.shape_a_contained);
    assert!(!collision.shape_b_contained);
}

#[test]
fn test_diagonal_overlap_picks_the_shortest_axis() {
    let a = square_at(0.0, 0.0, 100.0);
    let b = square_at(90.0, 60.0, 100.0);

    let collision = query::collision(&a, &b).expect("the corners overlap");

    // Overlap is 10 along X and 40 along Y; the X axis wins.
    assert_relative_eq!(collision.distance.abs(), 10.0);
    assert_relative_eq!(collision.separation.y, 0.0);
    assert_relative_eq!(collision.separation.x.abs(), 10.0);
}

#[test]
fn test_segment_polygon_still_separates() {
    // A 2-vertex polygon is a degenerate segment; it gets a hairline third
    // vertex so that its own edge axes still exist.
    let mut segment = Polygon::new(vec![Point::new(-10.0, 0.0), Point::new(10.0, 0.0)]);
    segment.position = Point::new(0.0, 30.0);
    let segment = Shape::Polygon(segment);

    let square = square_at(0.0, 0.0, 40.0);

    assert!(query::collision(&segment, &square).is_none());

    let mut crossing = Polygon::new(vec![Point::new(-10.0, 0.0), Point::new(10.0, 0.0)]);
    crossing.position = Point::new(0.0, 10.0);
    let crossing = Shape::Polygon(crossing);

    assert!(query::collision(&crossing, &square).is_some());
}
