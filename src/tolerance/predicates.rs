//! Vertex-triple predicates shared by convexity tests and ear clipping.

use crate::primitives::Point2;
use num_traits::Float;

/// Tests whether the turn `prev -> curr -> next` is convex.
///
/// Convex means a left turn, which is what a counter-clockwise polygon has at
/// every convex vertex. Collinear triples count as convex.
///
/// # Example
///
/// ```
/// use polyshard::tolerance::is_convex_angle;
/// use polyshard::Point2;
///
/// let a = Point2::new(0.0, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// assert!(is_convex_angle(a, b, Point2::new(1.0, 1.0)));
/// assert!(!is_convex_angle(a, b, Point2::new(1.0, -1.0)));
/// assert!(is_convex_angle(a, b, Point2::new(2.0, 0.0)));
/// ```
#[inline]
pub fn is_convex_angle<F: Float>(prev: Point2<F>, curr: Point2<F>, next: Point2<F>) -> bool {
    (prev.y - curr.y) * (next.x - curr.x) + (curr.x - prev.x) * (next.y - curr.y) >= F::zero()
}

/// Tests whether `p` lies inside triangle `abc` using barycentric coordinates.
///
/// Points on the edges `ab` and `ac` count as inside, points on `bc` do not.
/// A zero-area triangle contains nothing.
pub fn point_in_triangle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom == F::zero() {
        return false;
    }

    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;

    u >= F::zero() && v >= F::zero() && u + v < F::one()
}
