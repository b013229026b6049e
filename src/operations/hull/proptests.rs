//! Property tests for the hull pipeline.
//!
//! Points are drawn from a small integer lattice so that orientation tests
//! and pseudo-angle ties are exact.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use proptest::prelude::*;
use spade::{DelaunayTriangulation, Triangulation};

use super::*;
use crate::math::polygon_2d::{cross_2d, rotate_to_canonical_start};

fn lattice_coord() -> impl Strategy<Value = f64> {
    prop_oneof![-3_i32..=3, -20_i32..=20].prop_map(f64::from)
}

fn lattice_points(max_n: usize) -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec(
        (lattice_coord(), lattice_coord()).prop_map(|(x, y)| Point2::new(x, y)),
        1..=max_n,
    )
}

/// Vertices of a closed polygon where the boundary actually turns, sorted.
fn strict_corners(polygon: &[Point2]) -> Vec<(f64, f64)> {
    let n = polygon.len();
    let mut corners: Vec<(f64, f64)> = (0..n)
        .filter(|&i| {
            let prev = &polygon[(i + n - 1) % n];
            let next = &polygon[(i + 1) % n];
            cross_2d(prev, &polygon[i], next) != 0.0
        })
        .map(|i| (polygon[i].x, polygon[i].y))
        .collect();
    corners.sort_by(|a, b| a.partial_cmp(b).unwrap());
    corners.dedup();
    corners
}

fn delaunay_hull(points: &[Point2]) -> Vec<Point2> {
    let mut coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    coords.sort_by(|a, b| a.partial_cmp(b).unwrap());
    coords.dedup();
    let vertices: Vec<spade::Point2<f64>> = coords
        .into_iter()
        .map(|(x, y)| spade::Point2::new(x, y))
        .collect();
    let triangulation = DelaunayTriangulation::<spade::Point2<f64>>::bulk_load(vertices).unwrap();
    triangulation
        .convex_hull()
        .map(|edge| {
            let at = edge.from().position();
            Point2::new(at.x, at.y)
        })
        .collect()
}

proptest! {
    #[test]
    fn hull_vertices_come_from_input(points in lattice_points(40)) {
        let hull = convex_hull(&points).unwrap();
        prop_assert!(!hull.is_empty());
        prop_assert!(hull.len() <= points.len());
        for v in hull.vertices() {
            prop_assert!(points.contains(v), "{v} is not an input point");
        }
    }

    #[test]
    fn hull_contains_every_input_point(points in lattice_points(40)) {
        let hull = convex_hull(&points).unwrap();
        for p in &points {
            prop_assert!(hull.contains(p), "{p} escapes hull {:?}", hull.vertices());
        }
    }

    #[test]
    fn no_hull_vertex_is_interior(points in lattice_points(40)) {
        let hull = convex_hull(&points).unwrap();
        let vertices = hull.vertices();
        for (i, v) in vertices.iter().enumerate() {
            let others: Vec<Point2> = vertices
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, w)| *w)
                .collect();
            let strictly_inside =
                point_in_polygon(v, &others) && !point_on_polygon_boundary(v, &others);
            prop_assert!(!strictly_inside, "{v} is interior to the rest of the hull");
        }
    }

    #[test]
    fn hull_is_counter_clockwise(points in lattice_points(40)) {
        let hull = convex_hull(&points).unwrap();
        prop_assert!(hull.signed_area() >= 0.0);
    }

    #[test]
    fn hull_of_hull_is_unchanged(points in lattice_points(40)) {
        let hull = convex_hull(&points).unwrap();
        let again = convex_hull(hull.vertices()).unwrap();
        prop_assert_eq!(
            rotate_to_canonical_start(again.vertices()),
            rotate_to_canonical_start(hull.vertices())
        );
    }

    #[test]
    fn culling_does_not_change_the_hull(points in lattice_points(40)) {
        let culled = convex_hull(&points).unwrap();
        let unculled = ConvexHull::new(&points)
            .with_params(HullParams { cull_interior: false })
            .execute()
            .unwrap();
        prop_assert_eq!(culled, unculled);
    }

    #[test]
    fn culling_keeps_every_hull_vertex(points in lattice_points(40)) {
        let candidates = cull_interior(&points);
        let hull = ConvexHull::new(&points)
            .with_params(HullParams { cull_interior: false })
            .execute()
            .unwrap();
        for v in hull.vertices() {
            prop_assert!(candidates.contains(v));
        }
    }

    #[test]
    fn corners_match_delaunay_hull(points in lattice_points(40)) {
        let hull = convex_hull(&points).unwrap();
        prop_assume!(!hull.is_degenerate());
        let reference = delaunay_hull(&points);
        prop_assert_eq!(strict_corners(hull.vertices()), strict_corners(&reference));
    }
}
