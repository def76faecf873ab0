// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use orbit_route::{
    build_visibility_graph, extract_bounding_boxes, find_route, AStar, Anchor, BoundingBox,
    GridPoint, Obstacle, Point, RouteError, Size,
};
use proptest::prelude::*;

const CLEARANCE: f64 = 10.0;
const CELL: u32 = 200;

fn crosses_interior(a: Point, b: Point, bb: &BoundingBox) -> bool {
    let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
    let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
    x0 < bb.right && bb.left < x1 && y0 < bb.bottom && bb.top < y1
}

fn gp(p: Point) -> GridPoint {
    GridPoint::from_point(p).expect("finite point")
}

/// Arbitrary nodes; they may overlap or touch.
fn loose_nodes() -> impl Strategy<Value = Vec<Obstacle>> {
    proptest::collection::vec((0u32..400, 0u32..400, 1u32..120, 1u32..120), 0..6).prop_map(
        |raw| {
            raw.into_iter()
                .map(|(x, y, w, h)| {
                    Obstacle::new(
                        Point::new(f64::from(x), f64::from(y)),
                        Size::new(f64::from(w), f64::from(h)),
                    )
                })
                .collect()
        },
    )
}

/// One node per grid cell, small enough that inflated boxes never meet.
fn separated_nodes() -> impl Strategy<Value = Vec<Obstacle>> {
    proptest::collection::vec((0u32..40, 0u32..40, 20u32..100, 20u32..100), 1..6).prop_map(
        |raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (dx, dy, w, h))| {
                    let i = i as u32;
                    let x = (i % 3) * CELL + 20 + dx;
                    let y = (i / 3) * CELL + 20 + dy;
                    Obstacle::new(
                        Point::new(f64::from(x), f64::from(y)),
                        Size::new(f64::from(w), f64::from(h)),
                    )
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn prop_segments_never_cross_an_obstacle(nodes in loose_nodes()) {
        let boxes = extract_bounding_boxes(&nodes, CLEARANCE);
        let graph = build_visibility_graph(&nodes, CLEARANCE);

        for (a, b) in graph.segments() {
            prop_assert!(a.is_axis_aligned_with(b), "diagonal segment {a} -> {b}");
            let (pa, pb) = (a.to_point(), b.to_point());
            for bb in &boxes {
                prop_assert!(!crosses_interior(pa, pb, bb), "segment {a} -> {b} crosses {bb:?}");
            }
        }
    }

    #[test]
    fn prop_edges_are_symmetric_and_live(nodes in loose_nodes()) {
        let graph = build_visibility_graph(&nodes, CLEARANCE);
        for (from, targets) in graph.edges() {
            prop_assert!(graph.contains_vertex(from));
            for to in targets {
                prop_assert!(graph.contains_vertex(to), "edge {from} -> {to} leads nowhere");
                prop_assert!(graph.contains_edge(to, from), "edge {from} -> {to} is one-way");
            }
        }
    }

    #[test]
    fn prop_build_ignores_input_order(nodes in loose_nodes()) {
        let forward = build_visibility_graph(&nodes, CLEARANCE);
        let mut reversed = nodes.clone();
        reversed.reverse();

        prop_assert_eq!(&forward, &build_visibility_graph(&nodes, CLEARANCE));
        prop_assert_eq!(&forward, &build_visibility_graph(&reversed, CLEARANCE));
    }

    #[test]
    fn prop_anchors_and_corners_are_vertices(nodes in separated_nodes()) {
        let graph = build_visibility_graph(&nodes, CLEARANCE);
        for bb in extract_bounding_boxes(&nodes, CLEARANCE) {
            for p in bb.anchors().into_iter().chain(bb.corners()) {
                prop_assert!(graph.contains_vertex(&gp(p)), "{p:?} is not a vertex");
            }
        }
    }

    #[test]
    fn prop_routes_are_orthogonal_and_clear(nodes in separated_nodes()) {
        let boxes = extract_bounding_boxes(&nodes, CLEARANCE);
        let graph = build_visibility_graph(&nodes, CLEARANCE);
        let (Some(first), Some(last)) = (boxes.first(), boxes.last()) else {
            return Ok(());
        };
        let start = first.anchor(Anchor::Bottom);
        let goal = last.anchor(Anchor::Top);

        match find_route(&graph, &AStar::default(), start, goal) {
            Ok(route) => {
                prop_assert!(route.is_orthogonal(), "{:?}", route.points);
                prop_assert_eq!(route.start(), Some(start));
                prop_assert_eq!(route.end(), Some(goal));
                for w in route.points.windows(2) {
                    for bb in &boxes {
                        prop_assert!(!crosses_interior(w[0], w[1], bb));
                    }
                }
            }
            Err(err) => {
                prop_assert!(matches!(err, RouteError::NoPathFound { .. }), "{err}");
            }
        }
    }
}
