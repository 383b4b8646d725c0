//! Cutting a polygon along a segment.
//!
//! The cut is intersected with every edge and the hits are spliced into a
//! working ring of vertices. Hits are then paired off in order of distance
//! from the cut's start: a pair whose ring positions are adjacent among the
//! remaining hits bounds one piece, which is split off the ring.
//!
//! A finished split must tile the input: the pieces' signed areas have to add
//! up to the polygon's. Pairings that produce overlapping or inside-out
//! pieces, typically from a cut grazing a vertex, are rejected and the
//! polygon is returned whole.
//!
//! # Example
//!
//! ```
//! use polyshard::polygon::{slice, Polygon};
//! use polyshard::Point2;
//!
//! let square = [
//!     Point2::<f64>::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let pieces = slice(&square, Point2::new(-1.0, 0.5), Point2::new(2.0, 0.5));
//! assert_eq!(pieces.len(), 2);
//! for piece in &pieces {
//!     assert!((piece.area() - 0.5).abs() < 1e-12);
//! }
//! ```

use super::core::{contains_point, signed_area, Polygon};
use crate::primitives::Point2;
use crate::tolerance::{segment_intersect_with, Tolerance};
use num_traits::Float;

/// How a slice ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceStatus {
    /// The polygon was cut into two or more pieces.
    Split,
    /// A cut endpoint lies inside the polygon; nothing was cut.
    EndpointInside,
    /// The cut crosses the boundary fewer than twice; nothing was cut.
    TooFewIntersections,
    /// The hits could not be paired into pieces, or the pieces did not tile
    /// the polygon; nothing was cut.
    Aborted,
}

/// Pieces produced by a slice along with how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceResult<F> {
    /// The resulting polygons. Holds just the input when nothing was cut.
    pub pieces: Vec<Polygon<F>>,
    /// How the slice ended.
    pub status: SliceStatus,
}

impl<F: Float> SliceResult<F> {
    fn unsplit(vertices: &[Point2<F>], status: SliceStatus) -> Self {
        Self {
            pieces: vec![Polygon::new(vertices.to_vec())],
            status,
        }
    }

    /// Returns true if the polygon was actually cut.
    #[inline]
    pub fn is_split(&self) -> bool {
        self.status == SliceStatus::Split
    }
}

/// A working-ring entry. Intersections carry the id of their hit.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RingVertex<F> {
    Original(Point2<F>),
    Intersection(Point2<F>, usize),
}

impl<F: Copy> RingVertex<F> {
    fn point(self) -> Point2<F> {
        match self {
            Self::Original(p) | Self::Intersection(p, _) => p,
        }
    }

    fn tag(self) -> Option<usize> {
        match self {
            Self::Original(_) => None,
            Self::Intersection(_, id) => Some(id),
        }
    }
}

/// Cuts a polygon along the segment `p1 -> p2`.
///
/// Returns the input unchanged (as the only piece) when either endpoint is
/// inside the polygon, when the cut crosses fewer than two edges, or when
/// the crossings cannot be paired into pieces that tile the polygon.
pub fn slice<F: Float>(vertices: &[Point2<F>], p1: Point2<F>, p2: Point2<F>) -> Vec<Polygon<F>> {
    slice_with(vertices, p1, p2, &Tolerance::default())
}

/// Cuts a polygon using explicit tolerances.
pub fn slice_with<F: Float>(
    vertices: &[Point2<F>],
    p1: Point2<F>,
    p2: Point2<F>,
    tol: &Tolerance<F>,
) -> Vec<Polygon<F>> {
    slice_detailed(vertices, p1, p2, tol).pieces
}

/// Cuts a polygon and reports how the cut ended.
///
/// # Example
///
/// ```
/// use polyshard::polygon::{slice_detailed, SliceStatus};
/// use polyshard::{Point2, Tolerance};
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// // Starts inside the square.
/// let result = slice_detailed(
///     &square,
///     Point2::new(0.5, 0.5),
///     Point2::new(2.0, 0.5),
///     &Tolerance::default(),
/// );
/// assert_eq!(result.status, SliceStatus::EndpointInside);
/// assert_eq!(result.pieces.len(), 1);
/// ```
pub fn slice_detailed<F: Float>(
    vertices: &[Point2<F>],
    p1: Point2<F>,
    p2: Point2<F>,
    tol: &Tolerance<F>,
) -> SliceResult<F> {
    if contains_point(vertices, p1) || contains_point(vertices, p2) {
        tracing::debug!("cut endpoint inside polygon, leaving it whole");
        return SliceResult::unsplit(vertices, SliceStatus::EndpointInside);
    }

    let (mut ring, mut pending) = splice_intersections(vertices, p1, p2, tol);
    if pending.len() < 2 {
        tracing::debug!(
            intersections = pending.len(),
            "cut crosses too few edges, leaving polygon whole"
        );
        return SliceResult::unsplit(vertices, SliceStatus::TooFewIntersections);
    }

    pending.sort_by(|a, b| {
        p1.distance_squared(a.1)
            .partial_cmp(&p1.distance_squared(b.1))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut pieces = Vec::new();
    let mut direction = 0i32;

    while !pending.is_empty() {
        if pending.len() < 2 {
            // An odd hit count leaves one unpaired point; the rest of the
            // ring closes the last piece, subject to the tiling check.
            tracing::debug!("unpaired intersection left, closing remaining ring");
            pieces.push(to_polygon(&ring));
            break;
        }

        let ends = resolve_pair(&ring, pending[0].0, pending[1].0)
            .or_else(|| resolve_pair(&ring, pending[1].0, pending[0].0));

        match ends {
            Some((ind0, ind1)) => {
                direction -= 1;
                let piece = wrapping_subrange(&ring, ind0, ind1);
                tracing::trace!(vertices = piece.len(), "split off piece");
                pieces.push(to_polygon(&piece));

                let (x0, x1) = (pending[0].0, pending[1].0);
                ring = wrapping_subrange(&ring, ind1, ind0)
                    .into_iter()
                    .map(|v| match v.tag() {
                        Some(id) if id == x0 || id == x1 => RingVertex::Original(v.point()),
                        _ => v,
                    })
                    .collect();
                pending.drain(..2);

                if pending.is_empty() {
                    pieces.push(to_polygon(&ring));
                }
            }
            None => {
                direction += 1;
                pending.reverse();
            }
        }

        if direction > 1 {
            tracing::debug!(
                remaining = pending.len(),
                "cannot pair intersections, leaving polygon whole"
            );
            return SliceResult::unsplit(vertices, SliceStatus::Aborted);
        }
    }

    if !tiles_polygon(vertices, &pieces, tol) {
        tracing::debug!(
            pieces = pieces.len(),
            "pieces do not tile the polygon, leaving it whole"
        );
        return SliceResult::unsplit(vertices, SliceStatus::Aborted);
    }

    SliceResult {
        pieces,
        status: SliceStatus::Split,
    }
}

/// Checks that `pieces` add up to the polygon, both in signed and in unsigned
/// area, within the relative `area_eps`.
fn tiles_polygon<F: Float>(
    vertices: &[Point2<F>],
    pieces: &[Polygon<F>],
    tol: &Tolerance<F>,
) -> bool {
    let whole = signed_area(vertices);
    let (signed, unsigned) = pieces.iter().fold((F::zero(), F::zero()), |(s, u), piece| {
        let area = piece.signed_area();
        (s + area, u + area.abs())
    });

    let slack = tol.area_eps * whole.abs();
    (signed - whole).abs() <= slack && (unsigned - whole.abs()).abs() <= slack
}

/// Builds the working ring with accepted hits spliced in after their edge's
/// start vertex, returning it with the `(id, point)` list of hits.
#[allow(clippy::type_complexity)]
fn splice_intersections<F: Float>(
    vertices: &[Point2<F>],
    p1: Point2<F>,
    p2: Point2<F>,
    tol: &Tolerance<F>,
) -> (Vec<RingVertex<F>>, Vec<(usize, Point2<F>)>) {
    let n = vertices.len();
    let mut ring = Vec::with_capacity(n + 4);
    let mut hits: Vec<(usize, Point2<F>)> = Vec::new();

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        ring.push(RingVertex::Original(a));

        let Some(hit) = segment_intersect_with(p1, p2, a, b, tol) else {
            continue;
        };

        // A cut through a vertex meets both of its edges at one point.
        let distinct = |other: Option<&(usize, Point2<F>)>| {
            other.map_or(true, |&(_, q)| hit.distance(q) > tol.merge_eps)
        };
        if distinct(hits.first()) && distinct(hits.last()) {
            let id = hits.len();
            tracing::trace!(edge = i, id, "accepted cut intersection");
            ring.push(RingVertex::Intersection(hit, id));
            hits.push((id, hit));
        }
    }

    (ring, hits)
}

/// Finds ring positions of hits `x0` and `x1` if `x1` is the first hit
/// reached walking forward from `x0`.
fn resolve_pair<F: Copy>(ring: &[RingVertex<F>], x0: usize, x1: usize) -> Option<(usize, usize)> {
    let ind0 = position_of(ring, x0)?;
    let ind1 = position_of(ring, x1)?;
    (first_tagged_after(ring, ind0)? == ind1).then_some((ind0, ind1))
}

fn position_of<F: Copy>(ring: &[RingVertex<F>], id: usize) -> Option<usize> {
    ring.iter().position(|v| v.tag() == Some(id))
}

/// Walks forward from `start` for at most one lap to the next tagged entry.
fn first_tagged_after<F: Copy>(ring: &[RingVertex<F>], start: usize) -> Option<usize> {
    let n = ring.len();
    (1..=n)
        .map(|step| (start + step) % n)
        .find(|&i| ring[i].tag().is_some())
}

/// Returns `ring[from..=to]`, wrapping past the end when `to < from`.
fn wrapping_subrange<F: Copy>(
    ring: &[RingVertex<F>],
    from: usize,
    to: usize,
) -> Vec<RingVertex<F>> {
    let n = ring.len();
    let count = if to >= from { to - from } else { to + n - from } + 1;
    (0..count).map(|k| ring[(from + k) % n]).collect()
}

fn to_polygon<F: Float>(ring: &[RingVertex<F>]) -> Polygon<F> {
    Polygon::new(ring.iter().map(|v| v.point()).collect())
}
