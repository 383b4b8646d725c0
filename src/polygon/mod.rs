//! Polygon kernel: predicates, triangulation, casts and cutting.
//!
//! Every operation takes a vertex slice so it works on borrowed data;
//! [`Polygon`] wraps an owned vertex list and forwards to the same functions.
//! Polygons are implicitly closed and may use either winding.
//!
//! # Example
//!
//! ```
//! use polyshard::polygon::Polygon;
//! use polyshard::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! assert_eq!(square.triangulate().len(), 2);
//!
//! let halves = square.slice(Point2::new(1.0, -1.0), Point2::new(1.0, 3.0));
//! assert_eq!(halves.len(), 2);
//! ```

mod closest;
mod core;
mod flat;
mod fracture;
mod raycast;
mod slice;
mod triangulate;
mod validate;
mod weld;

pub use closest::{closest_edge, ClosestEdge};
pub use self::core::{
    aabb, centroid, contains_point, is_convex, reverse_vertices, signed_area, Polygon,
};
pub use flat::{points_from_flat, points_to_flat};
pub use fracture::{fracture, fracture_cut, fracture_with, shatter, shatter_with, FractureSettings};
pub use raycast::{raycast, raycast_with, RaycastHit};
pub use slice::{slice, slice_detailed, slice_with, SliceResult, SliceStatus};
pub use triangulate::{
    triangulate, triangulate_polygon, triangulation_area, PolygonTriangle, TriangulationResult,
};
pub use validate::{is_simple, is_simple_with};
pub use weld::merge_close_vertices;
