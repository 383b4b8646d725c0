//! polyshard - 2D polygon kernel for breakable geometry
//!
//! Predicates, ear-clipping triangulation, bounded raycasts, nearest-edge
//! queries and polygon slicing, all generic over `f32` and `f64`.
//!
//! Operations never fail: degenerate input yields an empty or unchanged
//! result. Errors only come from validating caller data, such as flat
//! coordinate buffers.
//!
//! # Example
//!
//! ```
//! use polyshard::{Point2, Polygon, Vec2};
//!
//! let plank = Polygon::from_flat(&[0.0, 0.0, 4.0, 0.0, 4.0, 1.0, 0.0, 1.0]).unwrap();
//! assert_eq!(plank.signed_area(), 4.0);
//!
//! // Find where a projectile strikes, then break the plank there.
//! let hit = plank
//!     .raycast(Point2::new(2.0, 3.0), Vec2::new(0.0, -5.0))
//!     .unwrap();
//! assert_eq!(hit.point, Point2::new(2.0, 1.0));
//!
//! let pieces = plank.fracture(hit.point, Point2::new(0.0, 1.0));
//! assert_eq!(pieces.len(), 2);
//! ```

pub mod bounds;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use bounds::Aabb2;
pub use error::KernelError;
pub use polygon::{
    ClosestEdge, Polygon, RaycastHit, SliceResult, SliceStatus, TriangulationResult,
};
pub use primitives::{Point2, Ray2, Segment2, Vec2};
pub use tolerance::{segment_intersect, Tolerance};
