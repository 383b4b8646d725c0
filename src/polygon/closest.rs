//! Nearest-edge queries.

use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;

/// The polygon edge nearest to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestEdge<F> {
    /// Index of the edge (its start vertex).
    pub edge_index: usize,
    /// Edge start point.
    pub start: Point2<F>,
    /// Edge end point.
    pub end: Point2<F>,
    /// Distance from the query to `point`.
    pub distance: F,
    /// Closest point on the edge.
    pub point: Point2<F>,
    /// Unit vector from `point` towards the query.
    ///
    /// When the query lies on the edge this is the edge's CCW perpendicular
    /// instead, or zero for a zero-length edge.
    pub normal: Vec2<F>,
}

impl<F: Float> ClosestEdge<F> {
    /// Returns the edge as a segment.
    #[inline]
    pub fn segment(&self) -> Segment2<F> {
        Segment2::new(self.start, self.end)
    }

    /// Returns the squared distance.
    #[inline]
    pub fn distance_squared(&self) -> F {
        self.distance * self.distance
    }
}

/// Finds the edge nearest to `query`, including the closing edge.
///
/// Ties go to the lowest edge index. Returns `None` for an empty polygon.
///
/// # Example
///
/// ```
/// use polyshard::polygon::closest_edge;
/// use polyshard::Point2;
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let nearest = closest_edge(&square, Point2::new(0.5, -1.0)).unwrap();
/// assert_eq!(nearest.edge_index, 0);
/// assert_eq!(nearest.point, Point2::new(0.5, 0.0));
/// assert_eq!(nearest.distance, 1.0);
/// ```
pub fn closest_edge<F: Float>(vertices: &[Point2<F>], query: Point2<F>) -> Option<ClosestEdge<F>> {
    let n = vertices.len();
    let mut best: Option<(usize, Segment2<F>, Point2<F>, F)> = None;

    for i in 0..n {
        let edge = Segment2::new(vertices[i], vertices[(i + 1) % n]);
        let (point, _) = edge.closest_point(query);
        let distance = query.distance(point);

        if best.map_or(true, |(_, _, _, d)| distance < d) {
            best = Some((i, edge, point, distance));
        }
    }

    let (edge_index, edge, point, distance) = best?;
    let normal = if distance > F::zero() {
        (query - point) / distance
    } else {
        edge.unit_normal().unwrap_or_else(Vec2::zero)
    };

    Some(ClosestEdge {
        edge_index,
        start: edge.start,
        end: edge.end,
        distance,
        point,
        normal,
    })
}
