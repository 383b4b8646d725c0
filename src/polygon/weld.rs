//! Welding of near-coincident polygon vertices.
//!
//! Slicing splices cut points into the ring next to original vertices, so a
//! cut that passes through or near a corner leaves zero-length or sliver
//! edges behind. Welding removes them before the pieces are used again.

use crate::primitives::Point2;
use num_traits::Float;

/// Drops every vertex closer than `eps` to the previous kept vertex.
///
/// The closing edge is welded as well. A polygon never drops below three
/// vertices; once only three remain, the rest are kept as they are.
///
/// # Example
///
/// ```
/// use polyshard::polygon::merge_close_vertices;
/// use polyshard::Point2;
///
/// let ring = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 0.01),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let welded = merge_close_vertices(&ring, 0.08);
/// assert_eq!(welded.len(), 4);
/// assert_eq!(welded[2], Point2::new(1.0, 1.0));
/// ```
pub fn merge_close_vertices<F: Float>(vertices: &[Point2<F>], eps: F) -> Vec<Point2<F>> {
    let mut kept: Vec<Point2<F>> = Vec::with_capacity(vertices.len());
    // Vertices still in play: the kept ones plus those not yet visited.
    let mut remaining = vertices.len();

    for &v in vertices {
        if let Some(&last) = kept.last() {
            if remaining > 3 && last.distance(v) < eps {
                remaining -= 1;
                continue;
            }
        }
        kept.push(v);
    }

    while remaining > 3 {
        match (kept.first(), kept.last()) {
            (Some(&first), Some(&last)) if last.distance(first) < eps => {
                kept.pop();
                remaining -= 1;
            }
            _ => break,
        }
    }

    if kept.len() < vertices.len() {
        tracing::trace!(
            before = vertices.len(),
            after = kept.len(),
            "welded close vertices"
        );
    }
    kept
}
