//! Error types for polyshard boundary conversions.
//!
//! Kernel operations never fail; they fall back to unchanged or empty
//! results. Errors only arise where caller-provided data enters the crate.

use thiserror::Error;

/// Errors raised while converting caller data into polygons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// A flat `[x0, y0, x1, y1, ...]` buffer had an odd number of values.
    #[error("odd number of coordinate values: {len}")]
    OddCoordinateCount {
        /// Length of the rejected buffer.
        len: usize,
    },

    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate at value index {index}")]
    NonFiniteCoordinate {
        /// Index of the offending value in the flat buffer.
        index: usize,
    },

    /// The polygon does not have enough vertices.
    #[error("polygon needs at least {min} vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
        /// Minimum required.
        min: usize,
    },
}
