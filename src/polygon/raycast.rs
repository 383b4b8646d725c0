//! Bounded raycasts against a polygon boundary.

use crate::primitives::{Point2, Ray2, Segment2, Vec2};
use crate::tolerance::Tolerance;
use num_traits::Float;

/// The nearest boundary hit of a cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit<F> {
    /// Where the cast meets the boundary.
    pub point: Point2<F>,
    /// Distance from the cast origin to `point`.
    pub distance: F,
    /// Index of the edge that was hit (its start vertex).
    pub edge_index: usize,
    /// Unit normal of the hit edge, its direction rotated a quarter turn CCW.
    pub normal: Vec2<F>,
    /// The cast direction mirrored about `normal`.
    pub reflection: Vec2<F>,
}

/// Casts from `origin` along `direction` and returns the nearest edge hit.
///
/// The cast reaches exactly `|direction|`. When several edges are equally
/// near, the lowest edge index wins.
///
/// # Example
///
/// ```
/// use polyshard::polygon::raycast;
/// use polyshard::{Point2, Vec2};
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let hit = raycast(&square, Point2::new(-1.0, 0.5), Vec2::new(3.0, 0.0)).unwrap();
/// assert_eq!(hit.edge_index, 3);
/// assert_eq!(hit.point, Point2::new(0.0, 0.5));
/// assert_eq!(hit.distance, 1.0);
///
/// // Falls short of the polygon.
/// assert!(raycast(&square, Point2::new(-1.0, 0.5), Vec2::new(0.5, 0.0)).is_none());
/// ```
pub fn raycast<F: Float>(
    vertices: &[Point2<F>],
    origin: Point2<F>,
    direction: Vec2<F>,
) -> Option<RaycastHit<F>> {
    raycast_with(vertices, origin, direction, &Tolerance::default())
}

/// Casts using explicit tolerances.
pub fn raycast_with<F: Float>(
    vertices: &[Point2<F>],
    origin: Point2<F>,
    direction: Vec2<F>,
    tol: &Tolerance<F>,
) -> Option<RaycastHit<F>> {
    let n = vertices.len();
    let ray = Ray2::new(origin, direction);
    let mut best: Option<(usize, Point2<F>, F)> = None;

    for i in 0..n {
        let edge = Segment2::new(vertices[i], vertices[(i + 1) % n]);
        let Some((point, distance)) = ray.intersect_segment_with(&edge, tol) else {
            continue;
        };

        if best.map_or(true, |(_, _, d)| distance < d) {
            best = Some((i, point, distance));
        }
    }

    let (edge_index, point, distance) = best?;
    let edge = vertices[(edge_index + 1) % n] - vertices[edge_index];
    // A zero-length edge can only be hit at its single point; it has no facing.
    let normal = edge.perpendicular().normalize().unwrap_or_else(Vec2::zero);

    Some(RaycastHit {
        point,
        distance,
        edge_index,
        normal,
        reflection: direction.reflect(normal),
    })
}
