//! Tolerance configuration, geometric predicates and segment intersection.
//!
//! Every epsilon the kernel uses lives in [`Tolerance`]. Functions with a
//! `_with` suffix take it explicitly; the plain variants use
//! [`Tolerance::default`]: a fixed 1e-10 slack for box tests and duplicate
//! merging, plus a relative 1e-9 slack on area bookkeeping.

mod intersect;
mod predicates;

pub use intersect::{
    bounded_ray_intersect, bounded_ray_intersect_with, segment_intersect, segment_intersect_with,
};
pub use predicates::{is_convex_angle, point_in_triangle};

use num_traits::Float;

/// Default slack used for bounding-box tests and duplicate suppression.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Default relative slack when comparing slice piece areas to the input area.
pub const DEFAULT_AREA_EPSILON: f64 = 1e-9;

/// Converts an `f64` constant into `F`, falling back to machine epsilon.
#[inline]
pub(crate) fn constant<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::epsilon)
}

/// Tolerances used by intersection and slicing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<F> {
    /// Slack applied to each bound when testing whether a solved intersection
    /// point lies inside a segment's bounding box.
    pub bounds_eps: F,
    /// Two slice intersections closer than this are treated as one.
    pub merge_eps: F,
    /// Relative slack allowed between the summed piece areas of a slice and
    /// the area of the polygon that was cut.
    pub area_eps: F,
}

impl<F: Float> Default for Tolerance<F> {
    fn default() -> Self {
        Self {
            bounds_eps: constant(DEFAULT_EPSILON),
            merge_eps: constant(DEFAULT_EPSILON),
            area_eps: constant(DEFAULT_AREA_EPSILON),
        }
    }
}

impl<F: Float> Tolerance<F> {
    /// Creates a tolerance using the same value for every slack.
    pub fn uniform(eps: F) -> Self {
        Self {
            bounds_eps: eps,
            merge_eps: eps,
            area_eps: eps,
        }
    }

    /// Sets the bounding-box slack.
    pub fn bounds_eps(mut self, eps: F) -> Self {
        self.bounds_eps = eps;
        self
    }

    /// Sets the duplicate-intersection distance.
    pub fn merge_eps(mut self, eps: F) -> Self {
        self.merge_eps = eps;
        self
    }

    /// Sets the relative area slack for slice verification.
    pub fn area_eps(mut self, eps: F) -> Self {
        self.area_eps = eps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerance() {
        let tol: Tolerance<f64> = Tolerance::default();
        assert_eq!(tol.bounds_eps, 1e-10);
        assert_eq!(tol.merge_eps, 1e-10);
        assert_eq!(tol.area_eps, 1e-9);
    }

    #[test]
    fn test_builder() {
        let tol: Tolerance<f64> = Tolerance::default().bounds_eps(1e-6).merge_eps(1e-3);
        assert_eq!(tol.bounds_eps, 1e-6);
        assert_eq!(tol.merge_eps, 1e-3);
        assert_eq!(
            Tolerance::uniform(0.5_f32),
            Tolerance::default().bounds_eps(0.5).merge_eps(0.5).area_eps(0.5)
        );
    }

    #[test]
    fn test_f32_constant() {
        let tol: Tolerance<f32> = Tolerance::default();
        assert!(tol.bounds_eps > 0.0);
        assert!(tol.bounds_eps < 1e-9);
    }
}
