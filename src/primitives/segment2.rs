//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Polygon edges and cutting segments are both represented this way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns the unit normal obtained by rotating the direction 90 degrees
    /// counter-clockwise.
    ///
    /// For a counter-clockwise polygon this points into the interior. Returns
    /// `None` for a zero-length segment.
    #[inline]
    pub fn unit_normal(self) -> Option<Vec2<F>> {
        self.direction().perpendicular().normalize()
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// Returns `(closest_point, t)` with `t` clamped to [0, 1]. A zero-length
    /// segment yields its start point.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        if len_sq == F::zero() {
            return (self.start, F::zero());
        }

        let t = (p - self.start).dot(v) / len_sq;
        let t_clamped = t.max(F::zero()).min(F::one());

        (self.point_at(t_clamped), t_clamped)
    }

    /// Computes the distance from a point to this segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance(closest)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_and_length() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 4.0, 5.0);
        assert_eq!(s.direction(), Vec2::new(3.0, 4.0));
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn test_unit_normal() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 0.0);
        let n = s.unit_normal().unwrap();
        assert_relative_eq!(n.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(n.y, 1.0, epsilon = 1e-12);

        let degenerate: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 1.0, 1.0);
        assert!(degenerate.unit_normal().is_none());
    }

    #[test]
    fn test_closest_point_clamps_to_segment() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);

        let (closest, t) = s.closest_point(Point2::new(5.0, 5.0));
        assert_relative_eq!(closest.x, 5.0, epsilon = 1e-10);
        assert_relative_eq!(closest.y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(t, 0.5, epsilon = 1e-10);

        let (closest, t) = s.closest_point(Point2::new(-5.0, 1.0));
        assert_eq!(closest, s.start);
        assert_eq!(t, 0.0);

        let (closest, t) = s.closest_point(Point2::new(15.0, -1.0));
        assert_eq!(closest, s.end);
        assert_eq!(t, 1.0);
    }

    #[test]
    fn test_distance_to_point() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(s.distance_to_point(Point2::new(5.0, 3.0)), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_degenerate_closest_point() {
        let s: Segment2<f64> = Segment2::from_coords(5.0, 5.0, 5.0, 5.0);
        let (closest, t) = s.closest_point(Point2::origin());
        assert_eq!(closest, Point2::new(5.0, 5.0));
        assert_eq!(t, 0.0);
    }
}
