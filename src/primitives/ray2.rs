//! 2D bounded cast type.

use super::{Point2, Segment2, Vec2};
use crate::tolerance::{bounded_ray_intersect_with, Tolerance};
use num_traits::Float;

/// A cast from an origin along a direction vector.
///
/// Unlike a mathematical ray the cast has finite reach: it ends at
/// `origin + direction`, so the direction's length is the reach.
///
/// # Example
///
/// ```
/// use polyshard::primitives::{Point2, Ray2, Segment2, Vec2};
///
/// let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(10.0, 0.0));
/// let wall = Segment2::new(Point2::new(5.0, -1.0), Point2::new(5.0, 1.0));
///
/// let (point, distance) = ray.intersect_segment(&wall).unwrap();
/// assert_eq!(point.x, 5.0);
/// assert_eq!(distance, 5.0);
///
/// // Too short to reach the wall.
/// let short = Ray2::new(Point2::origin(), Vec2::new(4.0, 0.0));
/// assert!(short.intersect_segment(&wall).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<F> {
    /// Start of the cast.
    pub origin: Point2<F>,
    /// Direction and reach of the cast.
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a new cast from origin and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a cast from `origin` that ends exactly at `target`.
    #[inline]
    pub fn from_points(origin: Point2<F>, target: Point2<F>) -> Self {
        Self {
            origin,
            direction: target - origin,
        }
    }

    /// Returns the far end of the cast.
    #[inline]
    pub fn head(&self) -> Point2<F> {
        self.origin + self.direction
    }

    /// Returns how far the cast reaches.
    #[inline]
    pub fn reach(&self) -> F {
        self.direction.magnitude()
    }

    /// Returns the point at parameter `t` (0 = origin, 1 = head).
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Intersects the cast with a segment.
    ///
    /// Returns the hit point and its distance from the origin.
    #[inline]
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> Option<(Point2<F>, F)> {
        self.intersect_segment_with(segment, &Tolerance::default())
    }

    /// Intersects the cast with a segment using explicit tolerances.
    pub fn intersect_segment_with(
        &self,
        segment: &Segment2<F>,
        tol: &Tolerance<F>,
    ) -> Option<(Point2<F>, F)> {
        bounded_ray_intersect_with(self.origin, self.direction, segment.start, segment.end, tol)
            .map(|point| (point, self.origin.distance(point)))
    }
}

impl<F: Float> Default for Ray2<F> {
    fn default() -> Self {
        Self {
            origin: Point2::origin(),
            direction: Vec2::new(F::one(), F::zero()),
        }
    }
}
