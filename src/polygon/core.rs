//! Core polygon type and predicates.

use super::{
    closest_edge, fracture, is_simple, points_from_flat, points_to_flat, raycast, shatter,
    slice_with, triangulate, ClosestEdge, RaycastHit, TriangulationResult,
};
use crate::bounds::Aabb2;
use crate::error::KernelError;
use crate::primitives::{Point2, Segment2, Vec2};
use crate::tolerance::{constant, is_convex_angle, Tolerance};
use num_traits::Float;

/// A polygon represented as a closed sequence of vertices.
///
/// The last vertex connects back to the first. Winding is not fixed; use
/// [`Polygon::signed_area`] to find it (counter-clockwise is positive).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon, rejecting fewer than 3 vertices.
    pub fn try_new(vertices: Vec<Point2<F>>) -> Result<Self, KernelError> {
        if vertices.len() < 3 {
            return Err(KernelError::TooFewVertices {
                count: vertices.len(),
                min: 3,
            });
        }
        Ok(Self { vertices })
    }

    /// Creates a polygon from a flat `[x0, y0, x1, y1, ...]` buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use polyshard::Polygon;
    ///
    /// let square = Polygon::from_flat(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(square.signed_area(), 1.0);
    ///
    /// assert!(Polygon::from_flat(&[0.0, 0.0, 1.0]).is_err());
    /// ```
    pub fn from_flat(coords: &[F]) -> Result<Self, KernelError> {
        Self::try_new(points_from_flat(coords)?)
    }

    /// Returns the vertices as a flat `[x0, y0, x1, y1, ...]` buffer.
    pub fn to_flat(&self) -> Vec<F> {
        points_to_flat(&self.vertices)
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns edge `i`, running from vertex `i` to vertex `(i + 1) % n`.
    pub fn edge(&self, i: usize) -> Option<Segment2<F>> {
        let n = self.vertices.len();
        if i >= n {
            return None;
        }
        Some(Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Iterates over all edges, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the signed area. Positive for CCW winding, negative for CW.
    pub fn signed_area(&self) -> F {
        signed_area(&self.vertices)
    }

    /// Returns the absolute area.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the centroid (center of mass) of the polygon.
    pub fn centroid(&self) -> Option<Point2<F>> {
        centroid(&self.vertices)
    }

    /// Returns the axis-aligned bounding box, or `None` when empty.
    pub fn aabb(&self) -> Option<Aabb2<F>> {
        aabb(&self.vertices)
    }

    /// Tests if a point is inside the polygon. Boundary points count as inside.
    pub fn contains_point(&self, point: Point2<F>) -> bool {
        contains_point(&self.vertices, point)
    }

    /// Tests if the polygon is convex under counter-clockwise winding.
    pub fn is_convex(&self) -> bool {
        is_convex(&self.vertices)
    }

    /// Tests if no two non-adjacent edges intersect.
    pub fn is_simple(&self) -> bool {
        is_simple(&self.vertices)
    }

    /// Returns the perimeter of the polygon.
    pub fn perimeter(&self) -> F {
        if self.vertices.len() < 2 {
            return F::zero();
        }
        self.edges().fold(F::zero(), |total, edge| total + edge.length())
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        Self {
            vertices: reverse_vertices(&self.vertices),
        }
    }

    /// Triangulates the polygon by ear clipping.
    pub fn triangulate(&self) -> TriangulationResult {
        triangulate(&self.vertices)
    }

    /// Cuts the polygon along the segment `p1 -> p2`.
    pub fn slice(&self, p1: Point2<F>, p2: Point2<F>) -> Vec<Polygon<F>> {
        self.slice_with(p1, p2, &Tolerance::default())
    }

    /// Cuts the polygon using explicit tolerances.
    pub fn slice_with(&self, p1: Point2<F>, p2: Point2<F>, tol: &Tolerance<F>) -> Vec<Polygon<F>> {
        slice_with(&self.vertices, p1, p2, tol)
    }

    /// Casts from `origin` along `direction` and returns the nearest boundary hit.
    pub fn raycast(&self, origin: Point2<F>, direction: Vec2<F>) -> Option<RaycastHit<F>> {
        raycast(&self.vertices, origin, direction)
    }

    /// Finds the edge nearest to `query`.
    pub fn closest_edge(&self, query: Point2<F>) -> Option<ClosestEdge<F>> {
        closest_edge(&self.vertices, query)
    }

    /// Breaks the polygon along the cut perpendicular to `hit - center`.
    pub fn fracture(&self, hit: Point2<F>, center: Point2<F>) -> Vec<Polygon<F>> {
        fracture(&self.vertices, hit, center)
    }

    /// Shatters the polygon into shards around `hit`, steered by `fractions`.
    pub fn shatter<I>(&self, hit: Point2<F>, center: Point2<F>, fractions: I) -> Vec<Polygon<F>>
    where
        I: IntoIterator<Item = F>,
    {
        shatter(&self.vertices, hit, center, fractions)
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding. Fewer than 3 vertices
/// have zero area.
///
/// # Example
///
/// ```
/// use polyshard::polygon::signed_area;
/// use polyshard::Point2;
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// assert_eq!(signed_area(&square), 1.0);
/// ```
pub fn signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    let n = vertices.len();
    if n < 3 {
        return F::zero();
    }

    let mut sum = F::zero();
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        sum = sum + (b.x - a.x) * (a.y + b.y);
    }

    -sum * constant(0.5)
}

/// Computes the bounding box of a vertex list.
pub fn aabb<F: Float>(vertices: &[Point2<F>]) -> Option<Aabb2<F>> {
    Aabb2::from_points(vertices.iter().copied())
}

/// Computes the centroid of a polygon.
///
/// Returns None for degenerate polygons (fewer than 3 vertices or zero area).
pub fn centroid<F: Float>(vertices: &[Point2<F>]) -> Option<Point2<F>> {
    if vertices.len() < 3 {
        return None;
    }

    let area = signed_area(vertices);
    if area.abs() < F::epsilon() {
        return None;
    }

    let mut cx = F::zero();
    let mut cy = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        cx = cx + (a.x + b.x) * cross;
        cy = cy + (a.y + b.y) * cross;
    }

    let six_area = constant::<F>(6.0) * area;
    Some(Point2::new(cx / six_area, cy / six_area))
}

/// Tests if a polygon is convex.
///
/// Every consecutive vertex triple must be a left turn (or collinear), so a
/// clockwise polygon is never convex. Fewer than 4 vertices are always convex.
pub fn is_convex<F: Float>(vertices: &[Point2<F>]) -> bool {
    let n = vertices.len();
    if n < 4 {
        return true;
    }

    (0..n).all(|i| is_convex_angle(vertices[i], vertices[(i + 1) % n], vertices[(i + 2) % n]))
}

/// Tests if a point is inside a polygon by counting crossings along `+x`.
///
/// Points on an edge or vertex count as inside. A ray that grazes a vertex
/// where the boundary turns back (a local extremum in y) is not counted as a
/// crossing.
///
/// # Example
///
/// ```
/// use polyshard::polygon::contains_point;
/// use polyshard::Point2;
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// assert!(contains_point(&square, Point2::new(0.5, 0.5)));
/// assert!(contains_point(&square, Point2::new(1.0, 0.5)));
/// assert!(!contains_point(&square, Point2::new(1.5, 0.5)));
/// ```
pub fn contains_point<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let zero = F::zero();
    let rel = |i: usize| vertices[i] - point;

    // Direction of the last non-horizontal edge, so the first vertex hit
    // below knows which way the boundary arrived.
    let mut going_up = false;
    let mut b = rel(n - 1);
    for i in 0..n {
        let a = b;
        b = rel(i);
        if a.y != b.y {
            going_up = b.y > a.y;
        }
    }

    let mut depth = 0usize;
    for i in 0..n {
        let a = b;
        b = rel(i);

        if (a.y < zero && b.y < zero) || (a.y > zero && b.y > zero) {
            continue;
        }
        if a.x < zero && b.x < zero {
            continue;
        }

        if a.y == b.y {
            if a.x.min(b.x) <= zero {
                return true;
            }
            continue;
        }

        let lx = a.x + (b.x - a.x) * (-a.y) / (b.y - a.y);
        if lx == zero {
            return true;
        }
        if lx > zero {
            depth += 1;
        }

        // Passing through a vertex right of the point: the edge before it
        // was already counted. Only keep one crossing when the boundary
        // continues in the same vertical direction.
        let rising = b.y > a.y;
        if a.y == zero && a.x > zero && going_up == rising {
            depth = depth.saturating_sub(1);
        }
        going_up = rising;
    }

    depth % 2 == 1
}

/// Returns the vertices in reverse order, flipping the winding.
pub fn reverse_vertices<F: Float>(vertices: &[Point2<F>]) -> Vec<Point2<F>> {
    vertices.iter().rev().copied().collect()
}
