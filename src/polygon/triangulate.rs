//! Polygon triangulation using ear clipping.
//!
//! Converts a simple polygon into a set of triangles that exactly cover it.
//!
//! # Algorithm
//!
//! The ear clipping algorithm works by repeatedly finding and removing "ears":
//! - An ear is a triangle formed by three consecutive vertices
//! - The middle vertex must be convex (reflex vertices cannot form ears)
//! - No other remaining vertex may be inside the ear triangle
//!
//! Remaining vertices live in a doubly linked index ring, so clipping an ear
//! is O(1). The search gives up after `3 × remaining` fruitless steps and
//! closes with whatever three vertices are left, so malformed input still
//! terminates.
//!
//! # Complexity
//!
//! - Time: O(n³) worst case, O(n²) typical
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use polyshard::polygon::{Polygon, triangulate_polygon};
//! use polyshard::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ]);
//!
//! let triangles = triangulate_polygon(&square);
//!
//! // A square is divided into 2 triangles
//! assert_eq!(triangles.len(), 2);
//! ```

use super::core::{signed_area, Polygon};
use crate::primitives::Point2;
use crate::tolerance::{constant, is_convex_angle, point_in_triangle};
use num_traits::Float;

/// A triangle from polygon triangulation, represented by three points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonTriangle<F> {
    /// First vertex of the triangle.
    pub a: Point2<F>,
    /// Second vertex of the triangle.
    pub b: Point2<F>,
    /// Third vertex of the triangle.
    pub c: Point2<F>,
}

impl<F: Float> PolygonTriangle<F> {
    /// Creates a new triangle from three points.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Computes the area of the triangle.
    pub fn area(&self) -> F {
        (self.b - self.a).cross(self.c - self.a).abs() * constant(0.5)
    }

    /// Returns the centroid of the triangle.
    pub fn centroid(&self) -> Point2<F> {
        let three = constant::<F>(3.0);
        Point2::new(
            (self.a.x + self.b.x + self.c.x) / three,
            (self.a.y + self.b.y + self.c.y) / three,
        )
    }
}

/// Result of polygon triangulation with vertex indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriangulationResult {
    /// Triangle vertex indices. Each triple (i, j, k) represents a triangle
    /// using vertices from the original polygon.
    pub indices: Vec<(usize, usize, usize)>,
}

impl TriangulationResult {
    /// Returns the number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if there are no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the indices as one flat list, three per triangle.
    ///
    /// This is the layout mesh index buffers expect.
    pub fn flat(&self) -> Vec<usize> {
        self.indices
            .iter()
            .flat_map(|&(i, j, k)| [i, j, k])
            .collect()
    }
}

/// Triangulates a polygon and returns point triangles.
///
/// # Example
///
/// ```
/// use polyshard::polygon::{Polygon, triangulate_polygon};
/// use polyshard::Point2;
///
/// // L-shaped polygon (concave)
/// let l_shape = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
///
/// let triangles = triangulate_polygon(&l_shape);
/// assert_eq!(triangles.len(), 4); // 6 vertices -> 4 triangles
/// ```
pub fn triangulate_polygon<F: Float>(polygon: &Polygon<F>) -> Vec<PolygonTriangle<F>> {
    let vertices = &polygon.vertices;

    triangulate(vertices)
        .indices
        .iter()
        .map(|&(i, j, k)| PolygonTriangle::new(vertices[i], vertices[j], vertices[k]))
        .collect()
}

/// Triangulates a vertex list and returns vertex indices.
///
/// Either winding is accepted; clockwise input is walked in reverse, and the
/// returned indices always refer to the caller's vertex order. A simple
/// polygon with `n` vertices yields `n - 2` triangles. Fewer than 3 vertices
/// yield none.
///
/// # Example
///
/// ```
/// use polyshard::polygon::triangulate;
/// use polyshard::Point2;
///
/// let pentagon = [
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.5, 1.5),
///     Point2::new(1.0, 2.5),
///     Point2::new(-0.5, 1.5),
/// ];
///
/// let result = triangulate(&pentagon);
/// assert_eq!(result.len(), 3); // 5 vertices -> 3 triangles
///
/// // Each triangle uses indices into the original polygon
/// for (i, j, k) in &result.indices {
///     assert!(*i < 5 && *j < 5 && *k < 5);
/// }
/// ```
pub fn triangulate<F: Float>(vertices: &[Point2<F>]) -> TriangulationResult {
    let n = vertices.len();
    if n < 3 {
        return TriangulationResult::default();
    }

    // Ring slot -> caller vertex index, reversed for CW input.
    let order: Vec<usize> = if signed_area(vertices) < F::zero() {
        (0..n).rev().collect()
    } else {
        (0..n).collect()
    };
    let point = |slot: usize| vertices[order[slot]];

    let mut ring = IndexRing::new(n);
    let mut indices = Vec::with_capacity(n - 2);
    let mut cursor = ring.head;
    let mut steps = 0;

    while ring.len > 3 {
        let i0 = cursor;
        let i1 = ring.next[i0];
        let i2 = ring.next[i1];

        if is_ear(&ring, &point, i0, i1, i2) {
            indices.push((order[i0], order[i1], order[i2]));
            ring.remove(i1);
            cursor = ring.head;
            steps = 0;
            continue;
        }

        if steps > 3 * ring.len {
            tracing::debug!(
                vertices = n,
                remaining = ring.len,
                "no ear found, closing triangulation early"
            );
            break;
        }
        steps += 1;
        cursor = ring.next[cursor];
    }

    let a = ring.head;
    let b = ring.next[a];
    let c = ring.next[b];
    indices.push((order[a], order[b], order[c]));

    TriangulationResult { indices }
}

/// Computes the total area of a triangulation.
///
/// Useful for verifying that the triangulation covers the original polygon.
pub fn triangulation_area<F: Float>(triangles: &[PolygonTriangle<F>]) -> F {
    triangles
        .iter()
        .map(|t| t.area())
        .fold(F::zero(), |a, b| a + b)
}

/// Checks if the triple `i0, i1, i2` is a clippable ear.
fn is_ear<F, P>(ring: &IndexRing, point: &P, i0: usize, i1: usize, i2: usize) -> bool
where
    F: Float,
    P: Fn(usize) -> Point2<F>,
{
    let (a, b, c) = (point(i0), point(i1), point(i2));
    if !is_convex_angle(a, b, c) {
        return false;
    }

    // Every other remaining vertex must stay outside.
    let mut slot = ring.next[i2];
    while slot != i0 {
        if point_in_triangle(point(slot), a, b, c) {
            return false;
        }
        slot = ring.next[slot];
    }

    true
}

/// Doubly linked ring over slots `0..n` with O(1) removal.
#[derive(Debug)]
struct IndexRing {
    prev: Vec<usize>,
    next: Vec<usize>,
    head: usize,
    len: usize,
}

impl IndexRing {
    fn new(n: usize) -> Self {
        Self {
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            next: (0..n).map(|i| (i + 1) % n).collect(),
            head: 0,
            len: n,
        }
    }

    fn remove(&mut self, slot: usize) {
        let p = self.prev[slot];
        let nx = self.next[slot];
        self.next[p] = nx;
        self.prev[nx] = p;
        if self.head == slot {
            self.head = nx;
        }
        self.len -= 1;
    }
}
