//! Bounded segment and cast intersection.
//!
//! Both tests solve the 2x2 system built from the two supporting lines with
//! Cramer's rule and then clip the solution against the segments' bounding
//! boxes. A zero determinant means parallel or collinear lines and reports no
//! intersection, so collinear overlap is never returned.

use super::Tolerance;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Intersects segment `a1-a2` with segment `b1-b2`.
///
/// Uses the default [`Tolerance`].
///
/// # Example
///
/// ```
/// use polyshard::tolerance::segment_intersect;
/// use polyshard::Point2;
///
/// let hit = segment_intersect(
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
///     Point2::new(2.0, 0.0),
/// )
/// .unwrap();
/// assert_eq!(hit, Point2::new(1.0, 1.0));
/// ```
#[inline]
pub fn segment_intersect<F: Float>(
    a1: Point2<F>,
    a2: Point2<F>,
    b1: Point2<F>,
    b2: Point2<F>,
) -> Option<Point2<F>> {
    segment_intersect_with(a1, a2, b1, b2, &Tolerance::default())
}

/// Intersects segment `a1-a2` with segment `b1-b2` using explicit tolerances.
///
/// The solved point is accepted only if it lies inside both segments'
/// bounding boxes, each bound widened by `tol.bounds_eps`.
pub fn segment_intersect_with<F: Float>(
    a1: Point2<F>,
    a2: Point2<F>,
    b1: Point2<F>,
    b2: Point2<F>,
    tol: &Tolerance<F>,
) -> Option<Point2<F>> {
    let p = line_intersection(a1, a2, b1, b2)?;

    if in_box(p, a1, a2, tol.bounds_eps) && in_box(p, b1, b2, tol.bounds_eps) {
        Some(p)
    } else {
        None
    }
}

/// Intersects the bounded cast `origin -> origin + dir` with segment `b1-b2`.
///
/// Uses the default [`Tolerance`].
#[inline]
pub fn bounded_ray_intersect<F: Float>(
    origin: Point2<F>,
    dir: Vec2<F>,
    b1: Point2<F>,
    b2: Point2<F>,
) -> Option<Point2<F>> {
    bounded_ray_intersect_with(origin, dir, b1, b2, &Tolerance::default())
}

/// Intersects the bounded cast `origin -> origin + dir` with segment `b1-b2`
/// using explicit tolerances.
///
/// The cast has finite reach: the hit must lie inside the segment's box, must
/// not lie behind `origin`, and must not lie past `origin + dir`. The last two
/// conditions are checked per axis against the sign of the matching
/// direction component.
pub fn bounded_ray_intersect_with<F: Float>(
    origin: Point2<F>,
    dir: Vec2<F>,
    b1: Point2<F>,
    b2: Point2<F>,
    tol: &Tolerance<F>,
) -> Option<Point2<F>> {
    let head = origin + dir;
    let p = line_intersection(origin, head, b1, b2)?;

    if !in_box(p, b1, b2, tol.bounds_eps) {
        return None;
    }
    if !within_reach(origin.x, dir.x, p.x, tol.bounds_eps)
        || !within_reach(origin.y, dir.y, p.y, tol.bounds_eps)
    {
        return None;
    }

    Some(p)
}

/// Solves for the intersection of the infinite lines through `a1-a2` and
/// `b1-b2`. Returns `None` when the determinant is exactly zero.
fn line_intersection<F: Float>(
    a1: Point2<F>,
    a2: Point2<F>,
    b1: Point2<F>,
    b2: Point2<F>,
) -> Option<Point2<F>> {
    let dax = a1.x - a2.x;
    let day = a1.y - a2.y;
    let dbx = b1.x - b2.x;
    let dby = b1.y - b2.y;

    let det = dax * dby - day * dbx;
    if det == F::zero() {
        return None;
    }

    let det_a = a1.x * a2.y - a1.y * a2.x;
    let det_b = b1.x * b2.y - b1.y * b2.x;

    Some(Point2::new(
        (det_a * dbx - dax * det_b) / det,
        (det_a * dby - day * det_b) / det,
    ))
}

/// Tests `p` against the bounding box of `s1-s2`, widened by `eps`.
///
/// An axis on which the box is flat is skipped: `p` was solved on the
/// segment's supporting line, so its coordinate there only carries round-off.
#[inline]
fn in_box<F: Float>(p: Point2<F>, s1: Point2<F>, s2: Point2<F>, eps: F) -> bool {
    axis_within(p.x, s1.x, s2.x, eps) && axis_within(p.y, s1.y, s2.y, eps)
}

#[inline]
fn axis_within<F: Float>(v: F, a: F, b: F, eps: F) -> bool {
    let lo = a.min(b);
    let hi = a.max(b);
    if lo == hi {
        return true;
    }
    lo <= v + eps && v - eps <= hi
}

/// Tests that `v` lies between `o` and `o + d` on one axis.
#[inline]
fn within_reach<F: Float>(o: F, d: F, v: F, eps: F) -> bool {
    if d > F::zero() {
        v >= o - eps && v <= o + d + eps
    } else if d < F::zero() {
        v <= o + eps && v >= o + d - eps
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_crossing_segments() {
        let hit = segment_intersect(p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(10.0, 0.0)).unwrap();
        assert_relative_eq!(hit.x, 5.0, epsilon = 1e-10);
        assert_relative_eq!(hit.y, 5.0, epsilon = 1e-10);
    }

    #[test]
    fn test_axis_aligned_crossing_is_exact() {
        let hit = segment_intersect(p(-1.0, 0.5), p(2.0, 0.5), p(1.0, 0.0), p(1.0, 1.0)).unwrap();
        assert_eq!(hit, p(1.0, 0.5));
    }

    #[test]
    fn test_parallel_and_collinear_report_nothing() {
        assert!(segment_intersect(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)).is_none());
        // Overlapping collinear segments are a known blind spot.
        assert!(segment_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0)).is_none());
    }

    #[test]
    fn test_lines_cross_outside_segments() {
        assert!(segment_intersect(p(0.0, 0.0), p(1.0, 1.0), p(3.0, 0.0), p(4.0, -1.0)).is_none());
        // Crosses segment b's line but past the end of a.
        assert!(segment_intersect(p(0.0, 0.0), p(1.0, 0.0), p(2.0, -1.0), p(2.0, 1.0)).is_none());
    }

    #[test]
    fn test_endpoint_touch_is_reported() {
        let hit = segment_intersect(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 1.0), p(2.0, 0.0)).unwrap();
        assert_relative_eq!(hit.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(hit.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_length_segment() {
        assert!(segment_intersect(p(0.0, 0.0), p(2.0, 2.0), p(1.0, 1.0), p(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_explicit_tolerance_widens_boxes() {
        // The lines cross at x = 1 + 1e-7, just past the end of a.
        let a1 = p(0.0, 0.0);
        let a2 = p(1.0, 1.0);
        let b1 = p(1.0 + 1e-7, 0.0);
        let b2 = p(1.0 + 1e-7, 2.0);
        assert!(segment_intersect(a1, a2, b1, b2).is_none());
        let loose = Tolerance::default().bounds_eps(1e-6);
        assert!(segment_intersect_with(a1, a2, b1, b2, &loose).is_some());
    }

    #[test]
    fn test_bounded_ray_hit() {
        let hit =
            bounded_ray_intersect(p(0.0, 0.0), Vec2::new(10.0, 0.0), p(5.0, -1.0), p(5.0, 1.0))
                .unwrap();
        assert_eq!(hit, p(5.0, 0.0));
    }

    #[test]
    fn test_bounded_ray_behind_origin() {
        let hit =
            bounded_ray_intersect(p(0.0, 0.0), Vec2::new(10.0, 0.0), p(-5.0, -1.0), p(-5.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_bounded_ray_out_of_reach() {
        let dir = Vec2::new(4.0, 0.0);
        assert!(bounded_ray_intersect(p(0.0, 0.0), dir, p(5.0, -1.0), p(5.0, 1.0)).is_none());
        assert!(bounded_ray_intersect(p(0.0, 0.0), dir * 2.0, p(5.0, -1.0), p(5.0, 1.0)).is_some());
    }

    #[test]
    fn test_bounded_ray_negative_direction() {
        let origin = p(3.0, 3.0);
        let dir = Vec2::new(-4.0, -4.0);
        let hit = bounded_ray_intersect(origin, dir, p(0.0, 2.0), p(2.0, 0.0)).unwrap();
        assert_relative_eq!(hit.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(hit.y, 1.0, epsilon = 1e-12);
        // Same line, pointing away.
        assert!(bounded_ray_intersect(origin, -dir, p(0.0, 2.0), p(2.0, 0.0)).is_none());
    }

    #[test]
    fn test_bounded_ray_parallel() {
        let hit = bounded_ray_intersect(p(0.0, 0.0), Vec2::new(1.0, 0.0), p(0.0, 1.0), p(5.0, 1.0));
        assert!(hit.is_none());
    }
}
