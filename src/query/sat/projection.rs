use crate::math::{Point, Real, Vector};

/// The extent of a shape projected onto a candidate separating axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// The smallest projection value.
    pub min: Real,
    /// The largest projection value.
    pub max: Real,
}

impl Projection {
    /// Projects every point onto `axis` and keeps the extreme values.
    ///
    /// An empty point set projects to an inverted range that reports a gap
    /// against everything.
    pub fn of_points(axis: &Vector<Real>, points: &[Point<Real>]) -> Projection {
        let mut min = Real::MAX;
        let mut max = -Real::MAX;

        for point in points {
            let value = axis.dot(&point.coords);
            min = min.min(value);
            max = max.max(value);
        }

        Projection { min, max }
    }

    /// Projects a circle of the given transformed radius onto an axis.
    ///
    /// The circle is centered on its own origin for this projection, so the
    /// range is `[-radius, radius]` whatever the axis; the position offset is
    /// applied to the other shape's range instead.
    pub fn of_circle(radius: Real) -> Projection {
        Projection {
            min: -radius,
            max: radius,
        }
    }

    /// Shifts the whole range by the given scalar offset.
    #[inline]
    pub fn shift(&mut self, offset: Real) {
        self.min += offset;
        self.max += offset;
    }

    /// Whether there is a gap between `self` and `other`.
    #[inline]
    pub fn gap(&self, other: &Projection) -> bool {
        self.min - other.max > 0.0 || other.min - self.max > 0.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn points_project_to_their_extremes() {
        let points = [
            Point::new(-1.0, 3.0),
            Point::new(4.0, -2.0),
            Point::new(0.5, 0.5),
        ];
        let range = Projection::of_points(&Vector::new(1.0, 0.0), &points);

        assert_eq!(range.min, -1.0);
        assert_eq!(range.max, 4.0);
    }

    #[test]
    fn touching_ranges_have_no_gap() {
        let a = Projection { min: 0.0, max: 1.0 };
        let b = Projection { min: 1.0, max: 2.0 };
        assert!(!a.gap(&b));
        assert!(!b.gap(&a));

        let c = Projection { min: 2.5, max: 3.0 };
        assert!(a.gap(&c));
        assert!(c.gap(&a));
    }
}
