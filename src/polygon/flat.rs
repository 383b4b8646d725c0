//! Flat coordinate buffers.
//!
//! Engines and mesh formats commonly store 2D outlines as interleaved
//! `[x0, y0, x1, y1, ...]` arrays. These helpers are the only place where
//! such caller data is validated.

use crate::error::KernelError;
use crate::primitives::Point2;
use num_traits::Float;

/// Converts an interleaved coordinate buffer into points.
///
/// # Errors
///
/// - [`KernelError::OddCoordinateCount`] if the buffer length is odd.
/// - [`KernelError::NonFiniteCoordinate`] on the first NaN or infinite value.
///
/// # Example
///
/// ```
/// use polyshard::polygon::points_from_flat;
/// use polyshard::{KernelError, Point2};
///
/// let points = points_from_flat(&[0.0, 1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(points, vec![Point2::new(0.0, 1.0), Point2::new(2.0, 3.0)]);
///
/// assert_eq!(
///     points_from_flat(&[0.0, f64::NAN]),
///     Err(KernelError::NonFiniteCoordinate { index: 1 }),
/// );
/// ```
pub fn points_from_flat<F: Float>(coords: &[F]) -> Result<Vec<Point2<F>>, KernelError> {
    if coords.len() % 2 != 0 {
        return Err(KernelError::OddCoordinateCount { len: coords.len() });
    }
    if let Some(index) = coords.iter().position(|c| !c.is_finite()) {
        return Err(KernelError::NonFiniteCoordinate { index });
    }

    Ok(coords
        .chunks_exact(2)
        .map(|xy| Point2::new(xy[0], xy[1]))
        .collect())
}

/// Flattens points into an interleaved coordinate buffer.
pub fn points_to_flat<F: Float>(points: &[Point2<F>]) -> Vec<F> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}
