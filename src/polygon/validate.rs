//! Simplicity check.
//!
//! # Example
//!
//! ```
//! use polyshard::{Point2, polygon::is_simple};
//!
//! // A figure-8 polygon that crosses itself
//! let figure8 = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! assert!(!is_simple(&figure8));
//! ```

use crate::primitives::Point2;
use crate::tolerance::{segment_intersect_with, Tolerance};
use num_traits::Float;

/// Checks if a polygon is simple (no two non-adjacent edges intersect).
///
/// Touching counts as intersecting, so a vertex resting on a non-adjacent
/// edge makes the polygon non-simple. Parallel edges never intersect.
/// Fewer than 4 vertices are always simple.
pub fn is_simple<F: Float>(vertices: &[Point2<F>]) -> bool {
    is_simple_with(vertices, &Tolerance::default())
}

/// Checks simplicity using explicit tolerances.
pub fn is_simple_with<F: Float>(vertices: &[Point2<F>], tol: &Tolerance<F>) -> bool {
    let n = vertices.len();
    if n < 4 {
        return true;
    }

    for i in 0..n {
        let a1 = vertices[i];
        let a2 = vertices[(i + 1) % n];

        for j in (i + 2)..n {
            // The closing edge is adjacent to edge 0.
            let j_next = (j + 1) % n;
            if j_next == i {
                continue;
            }

            if segment_intersect_with(a1, a2, vertices[j], vertices[j_next], tol).is_some() {
                return false;
            }
        }
    }

    true
}
