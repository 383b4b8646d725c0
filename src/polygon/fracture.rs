//! Breaking a polygon at an impact point.
//!
//! An impact at `hit` pushing away from `center` cracks the shape
//! perpendicular to the push. The crack is long enough to clear the
//! polygon's bounding box on both sides of `hit`.
//!
//! A harder impact shatters the shape instead: a first crack runs along the
//! push, then every shard still larger than the target area is cracked again
//! by a line through `hit` that fans between the ends of the shard's nearest
//! edge.

use super::closest::closest_edge;
use super::core::{aabb, signed_area, Polygon};
use super::slice::slice_detailed;
use super::weld::merge_close_vertices;
use crate::primitives::{Point2, Segment2, Vec2};
use crate::tolerance::{constant, Tolerance};
use num_traits::Float;

/// Distance under which the impact counts as sitting on a shard vertex.
const VERTEX_SNAP: f64 = 1e-4;

/// Hard cap on the number of cracks a single shatter may make.
const MAX_SHATTER_SPLITS: usize = 1024;

/// Options for fracturing and shattering.
///
/// The defaults suit shapes about one unit across.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractureSettings<F> {
    /// A crack is rejected, leaving the shape whole, if any piece would be
    /// smaller than this area.
    pub min_piece_area: F,
    /// Neighbouring vertices of a piece closer than this are welded.
    pub merge_distance: F,
    /// Shattering stops cracking a shard once it is smaller than twice this
    /// area.
    pub shatter_target_area: F,
}

impl<F: Float> Default for FractureSettings<F> {
    fn default() -> Self {
        Self {
            min_piece_area: constant(0.03),
            merge_distance: constant(0.08),
            shatter_target_area: constant(0.15),
        }
    }
}

impl<F: Float> FractureSettings<F> {
    /// Sets the smallest piece area a crack may produce.
    pub fn min_piece_area(mut self, area: F) -> Self {
        self.min_piece_area = area;
        self
    }

    /// Sets the vertex welding distance.
    pub fn merge_distance(mut self, distance: F) -> Self {
        self.merge_distance = distance;
        self
    }

    /// Sets the shard area shattering aims for.
    pub fn shatter_target_area(mut self, area: F) -> Self {
        self.shatter_target_area = area;
        self
    }
}

/// Builds the crack segment through `hit`, perpendicular to `hit - center`.
///
/// Each half of the segment is as long as the bounding-box diagonal.
/// Returns `None` for an empty polygon or when `hit == center`.
///
/// # Example
///
/// ```
/// use polyshard::polygon::fracture_cut;
/// use polyshard::Point2;
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 3.0),
///     Point2::new(0.0, 3.0),
/// ];
///
/// // Struck on the bottom edge, pushing up from below.
/// let cut = fracture_cut(&square, Point2::new(2.0, 0.0), Point2::new(2.0, -1.0)).unwrap();
/// assert_eq!(cut.length(), 10.0);
/// assert_eq!(cut.start.y, 0.0);
/// assert_eq!(cut.end.y, 0.0);
/// ```
pub fn fracture_cut<F: Float>(
    vertices: &[Point2<F>],
    hit: Point2<F>,
    center: Point2<F>,
) -> Option<Segment2<F>> {
    let bounds = aabb(vertices)?;
    let across = (hit - center).perpendicular().normalize()?;
    let reach = bounds.diagonal().magnitude();

    Some(Segment2::new(hit + across * reach, hit - across * reach))
}

/// Breaks a polygon along [`fracture_cut`] with default settings.
///
/// Returns the polygon unchanged when no crack can be built, the crack does
/// not split it, or a piece would fall below the minimum area.
pub fn fracture<F: Float>(
    vertices: &[Point2<F>],
    hit: Point2<F>,
    center: Point2<F>,
) -> Vec<Polygon<F>> {
    fracture_with(
        vertices,
        hit,
        center,
        &FractureSettings::default(),
        &Tolerance::default(),
    )
}

/// Breaks a polygon using explicit settings and tolerances.
pub fn fracture_with<F: Float>(
    vertices: &[Point2<F>],
    hit: Point2<F>,
    center: Point2<F>,
    settings: &FractureSettings<F>,
    tol: &Tolerance<F>,
) -> Vec<Polygon<F>> {
    let Some(cut) = fracture_cut(vertices, hit, center) else {
        tracing::debug!("degenerate impact, nothing to fracture");
        return vec![Polygon::new(vertices.to_vec())];
    };

    split_along(vertices, cut.start, cut.end, settings, tol)
        .unwrap_or_else(|| vec![Polygon::new(vertices.to_vec())])
}

/// Shatters a polygon with default settings.
///
/// `fractions` steer the cracks after the first one; see [`shatter_with`].
pub fn shatter<F, I>(
    vertices: &[Point2<F>],
    hit: Point2<F>,
    center: Point2<F>,
    fractions: I,
) -> Vec<Polygon<F>>
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    shatter_with(
        vertices,
        hit,
        center,
        fractions,
        &FractureSettings::default(),
        &Tolerance::default(),
    )
}

/// Shatters a polygon into shards near `settings.shatter_target_area`.
///
/// The first crack runs through `hit` along `hit - center`. Each shard with
/// at least twice the target area is then cracked through `hit` again. The
/// crack direction lies between the directions from `hit` to the ends of the
/// shard's nearest edge (or to the neighbours of the vertex `hit` sits on).
/// The next value drawn from `fractions`, clamped to `[0, 1]`, picks where
/// in that fan it lies, kept far enough from both ends that the smaller side
/// can still reach the target area. An exhausted iterator yields 0.5.
///
/// Shards whose crack fails are kept as they are. The polygon is returned
/// unchanged when it is smaller than twice the minimum piece area or the
/// first crack fails.
///
/// # Example
///
/// ```
/// use polyshard::polygon::{shatter_with, FractureSettings};
/// use polyshard::{Point2, Tolerance};
///
/// let slab = [
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ];
/// let settings = FractureSettings::default().shatter_target_area(3.5);
///
/// let shards = shatter_with(
///     &slab,
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     [0.0, 0.0],
///     &settings,
///     &Tolerance::default(),
/// );
/// assert_eq!(shards.len(), 4);
/// let total: f64 = shards.iter().map(|s| s.area()).sum();
/// assert!((total - 16.0).abs() < 1e-9);
/// ```
pub fn shatter_with<F, I>(
    vertices: &[Point2<F>],
    hit: Point2<F>,
    center: Point2<F>,
    fractions: I,
    settings: &FractureSettings<F>,
    tol: &Tolerance<F>,
) -> Vec<Polygon<F>>
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    let whole = || vec![Polygon::new(vertices.to_vec())];
    let two = constant::<F>(2.0);

    let area = signed_area(vertices).abs();
    if area < two * settings.min_piece_area {
        tracing::debug!("shape too small to shatter");
        return whole();
    }

    let (Some(bounds), Some(push)) = (aabb(vertices), (hit - center).normalize()) else {
        tracing::debug!("degenerate impact, nothing to shatter");
        return whole();
    };
    let reach = bounds.diagonal().magnitude();

    let Some(first) = split_along(vertices, hit + push * reach, hit - push * reach, settings, tol)
    else {
        return whole();
    };

    let mut fractions = fractions.into_iter();
    let mut budget = split_budget(area, settings.shatter_target_area);
    let mut pending = first;
    let mut shards = Vec::with_capacity(pending.len());

    while let Some(shard) = pending.pop() {
        let shard_area = shard.area();
        if budget == 0 || shard_area < two * settings.shatter_target_area {
            shards.push(shard);
            continue;
        }

        let fraction = fractions.next().unwrap_or_else(|| constant(0.5));
        let min_split = settings.shatter_target_area / shard_area;
        let pieces = fan_direction(&shard.vertices, hit, fraction, min_split).and_then(|dir| {
            split_along(&shard.vertices, hit - dir * reach, hit + dir * reach, settings, tol)
        });

        match pieces {
            Some(pieces) => {
                budget -= 1;
                tracing::trace!(pieces = pieces.len(), "cracked shard");
                pending.extend(pieces);
            }
            None => shards.push(shard),
        }
    }

    if budget == 0 {
        tracing::debug!(shards = shards.len(), "shatter split budget exhausted");
    }
    shards
}

/// Slices along `p1 -> p2` and welds the pieces, or returns `None` when the
/// slice does not split or leaves a piece below the minimum area.
fn split_along<F: Float>(
    vertices: &[Point2<F>],
    p1: Point2<F>,
    p2: Point2<F>,
    settings: &FractureSettings<F>,
    tol: &Tolerance<F>,
) -> Option<Vec<Polygon<F>>> {
    let result = slice_detailed(vertices, p1, p2, tol);
    if !result.is_split() {
        return None;
    }
    if result
        .pieces
        .iter()
        .any(|piece| piece.area() < settings.min_piece_area)
    {
        tracing::debug!(
            pieces = result.pieces.len(),
            "crack leaves a piece below the minimum area, keeping shape whole"
        );
        return None;
    }

    Some(
        result
            .pieces
            .into_iter()
            .map(|piece| {
                Polygon::new(merge_close_vertices(
                    &piece.vertices,
                    settings.merge_distance,
                ))
            })
            .collect(),
    )
}

/// Direction of the crack through `origin`, a `fraction` of the way across
/// the fan spanned by the nearest edge's ends.
fn fan_direction<F: Float>(
    vertices: &[Point2<F>],
    origin: Point2<F>,
    fraction: F,
    min_split: F,
) -> Option<Vec2<F>> {
    let n = vertices.len();
    let nearest = closest_edge(vertices, origin)?;
    let i = nearest.edge_index;
    let snap = constant::<F>(VERTEX_SNAP);

    let (a, b) = if origin.distance(nearest.start) < snap {
        (vertices[(i + n - 1) % n], nearest.end)
    } else if origin.distance(nearest.end) < snap {
        (nearest.start, vertices[(i + 2) % n])
    } else {
        (nearest.start, nearest.end)
    };

    let from = (a - origin).normalize()?;
    let to = (b - origin).normalize()?;
    let fraction = fraction.max(F::zero()).min(F::one());
    let split = min_split + fraction * (F::one() - min_split - min_split);

    Some(from.rotate(from.angle_to(to) * split))
}

/// Upper bound on cracks for a shatter of a shape with the given area.
fn split_budget<F: Float>(area: F, target: F) -> usize {
    let target = target.max(F::epsilon());
    (area / target)
        .ceil()
        .to_usize()
        .map_or(MAX_SHATTER_SPLITS, |n| n.saturating_mul(2))
        .min(MAX_SHATTER_SPLITS)
}
