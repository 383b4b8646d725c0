//! Property tests over random convex and concave polygons.

use approx::assert_relative_eq;
use polyshard::polygon::{slice_detailed, SliceStatus};
use polyshard::{Point2, Polygon, Tolerance, Vec2};
use proptest::prelude::*;
use std::f64::consts::TAU;

/// Random strictly convex CCW polygon inscribed in a circle.
///
/// Angular gaps are drawn first and rescaled to a full turn, so vertices are
/// distinct and ordered.
fn convex_polygon() -> impl Strategy<Value = Polygon<f64>> {
    (
        prop::collection::vec(0.2f64..1.0, 3..16),
        1.0f64..50.0,
        -100.0f64..100.0,
        -100.0f64..100.0,
    )
        .prop_map(|(gaps, radius, cx, cy)| {
            let total: f64 = gaps.iter().sum();
            let mut angle = 0.0f64;
            let vertices = gaps
                .iter()
                .map(|gap| {
                    let p = Point2::new(cx + radius * angle.cos(), cy + radius * angle.sin());
                    angle += gap / total * TAU;
                    p
                })
                .collect();
            Polygon::new(vertices)
        })
}

/// Random skyline: unit-wide columns of integer heights on a shared base.
///
/// The outline is simple and usually concave, and cuts through its corners
/// exercise vertex-grazing intersections.
fn skyline_polygon() -> impl Strategy<Value = Polygon<f64>> {
    prop::collection::vec(1u8..7, 2..10).prop_map(|heights| {
        let k = heights.len();
        let mut vertices = vec![Point2::new(0.0, 0.0), Point2::new(k as f64, 0.0)];
        for (i, &h) in heights.iter().enumerate().rev() {
            for x in [i + 1, i] {
                let corner = Point2::new(x as f64, f64::from(h));
                if vertices.last() != Some(&corner) {
                    vertices.push(corner);
                }
            }
        }
        Polygon::new(vertices)
    })
}

proptest! {
    #[test]
    fn triangulation_covers_polygon(poly in convex_polygon()) {
        let result = poly.triangulate();
        prop_assert_eq!(result.len(), poly.len() - 2);

        let covered: f64 = result
            .indices
            .iter()
            .map(|&(i, j, k)| {
                let (a, b, c) = (poly.vertices[i], poly.vertices[j], poly.vertices[k]);
                (b - a).cross(c - a).abs() * 0.5
            })
            .sum();
        assert_relative_eq!(covered, poly.area(), max_relative = 1e-9);
    }

    #[test]
    fn reversed_polygon_triangulates(poly in convex_polygon()) {
        let reversed = poly.reversed();
        prop_assert!(reversed.signed_area() < 0.0);
        prop_assert_eq!(reversed.triangulate().len(), poly.len() - 2);
    }

    #[test]
    fn convex_polygon_predicates(poly in convex_polygon()) {
        prop_assert!(poly.signed_area() > 0.0);
        prop_assert!(poly.is_convex());
        prop_assert!(poly.is_simple());
        assert_relative_eq!(poly.reversed().signed_area(), -poly.signed_area());
    }

    #[test]
    fn centroid_is_contained(poly in convex_polygon()) {
        let centroid = poly.centroid().unwrap();
        prop_assert!(poly.contains_point(centroid));
        prop_assert!(poly.reversed().contains_point(centroid));
    }

    #[test]
    fn slicing_through_centroid_conserves_area(poly in convex_polygon()) {
        let centroid = poly.centroid().unwrap();
        let bounds = poly.aabb().unwrap();
        let p1 = Point2::new(bounds.min.x - 1.0, centroid.y);
        let p2 = Point2::new(bounds.max.x + 1.0, centroid.y);

        let result = slice_detailed(&poly.vertices, p1, p2, &Tolerance::default());
        prop_assert_eq!(result.status, SliceStatus::Split);
        prop_assert_eq!(result.pieces.len(), 2);

        let total: f64 = result.pieces.iter().map(|piece| piece.area()).sum();
        assert_relative_eq!(total, poly.area(), max_relative = 1e-9);
    }

    #[test]
    fn slicing_through_a_vertex_tiles_or_leaves_whole(
        poly in skyline_polygon(),
        pick in any::<prop::sample::Index>(),
        angle in 0.0f64..TAU,
    ) {
        let through = poly.vertices[pick.index(poly.len())];
        let reach = Vec2::new(angle.cos(), angle.sin()) * 100.0;
        let result = slice_detailed(
            &poly.vertices,
            through - reach,
            through + reach,
            &Tolerance::default(),
        );

        if result.status == SliceStatus::Split {
            prop_assert!(result.pieces.len() >= 2);
            let total: f64 = result.pieces.iter().map(|piece| piece.area()).sum();
            assert_relative_eq!(total, poly.area(), max_relative = 1e-6);
        } else {
            prop_assert_eq!(result.pieces, vec![poly.clone()]);
        }
    }

    #[test]
    fn slicing_outside_is_noop(poly in convex_polygon()) {
        let bounds = poly.aabb().unwrap();
        let y = bounds.max.y + 1.0;
        let p1 = Point2::new(bounds.min.x - 1.0, y);
        let p2 = Point2::new(bounds.max.x + 1.0, y);
        prop_assert_eq!(poly.slice(p1, p2), vec![poly.clone()]);
    }

    #[test]
    fn raycast_from_centroid_hits_boundary(poly in convex_polygon(), angle in 0.0f64..TAU) {
        let centroid = poly.centroid().unwrap();
        let reach = poly.aabb().unwrap().diagonal().magnitude();
        let direction = Vec2::new(angle.cos(), angle.sin()) * reach;

        let hit = poly.raycast(centroid, direction).unwrap();
        prop_assert!(hit.distance <= reach);
        assert_relative_eq!(hit.normal.magnitude(), 1.0, max_relative = 1e-9);

        let nearest = poly.closest_edge(hit.point).unwrap();
        prop_assert!(nearest.distance < 1e-6);
    }

    #[test]
    fn closest_edge_is_no_farther_than_any_vertex(
        poly in convex_polygon(),
        qx in -200.0f64..200.0,
        qy in -200.0f64..200.0,
    ) {
        let query = Point2::new(qx, qy);
        let nearest = poly.closest_edge(query).unwrap();
        for v in &poly.vertices {
            prop_assert!(nearest.distance <= query.distance(*v) + 1e-9);
        }
        assert_relative_eq!(nearest.distance, query.distance(nearest.point), epsilon = 1e-9);
    }
}
