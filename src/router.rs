// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared routing state for a live diagram.
//!
//! A [`Router`] owns the current [`Scene`] behind a single `Arc`. Rebuilding
//! constructs a fresh scene and swaps the pointer, so concurrent readers see
//! either the old or the new graph, never a partial one.

use std::sync::Arc;

use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::RouterConfig;
use crate::geometry::Point;
use crate::obstacle::{extract_bounding_boxes, Anchor, BoundingBox, Obstacle};
use crate::route::{find_route, AStar, Pathfinder, Route, RouteError};
use crate::visibility::{build_from_boxes, BuildStats, VisibilityGraph};

/// One node side a connector attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAnchor {
    /// Index into the obstacle list the scene was built from.
    pub node: usize,
    pub anchor: Anchor,
}

impl NodeAnchor {
    pub fn new(node: usize, anchor: Anchor) -> Self {
        Self { node, anchor }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    pub from: NodeAnchor,
    pub to: NodeAnchor,
}

impl Connector {
    pub fn new(from: NodeAnchor, to: NodeAnchor) -> Self {
        Self { from, to }
    }
}

/// Immutable routing snapshot: the inflated boxes and the graph built from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    boxes: Vec<BoundingBox>,
    graph: VisibilityGraph,
    stats: BuildStats,
}

impl Scene {
    pub fn build(obstacles: &[Obstacle], clearance: f64) -> Self {
        let boxes = extract_bounding_boxes(obstacles, clearance);
        let (graph, stats) = build_from_boxes(&boxes, clearance);
        Self { boxes, graph, stats }
    }

    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    pub fn graph(&self) -> &VisibilityGraph {
        &self.graph
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    fn node_box(&self, node: usize) -> Result<&BoundingBox, RouteError> {
        let b = self.boxes.get(node).ok_or(RouteError::UnknownNode { node })?;
        if b.is_degenerate() {
            return Err(RouteError::DegenerateNode { node });
        }
        Ok(b)
    }
}

pub struct Router {
    config: RouterConfig,
    pathfinder: Box<dyn Pathfinder>,
    scene: RwLock<Arc<Scene>>,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .field("scene", &self.scene.read().stats())
            .finish_non_exhaustive()
    }
}

impl Router {
    pub fn new(config: RouterConfig) -> Self {
        let pathfinder = Box::new(AStar::from_config(&config));
        Self::with_pathfinder(config, pathfinder)
    }

    pub fn with_pathfinder(config: RouterConfig, pathfinder: Box<dyn Pathfinder>) -> Self {
        Self { config, pathfinder, scene: RwLock::new(Arc::new(Scene::default())) }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Rebuilds the scene from a fresh geometry snapshot and publishes it.
    pub fn rebuild(&self, obstacles: &[Obstacle]) -> Arc<Scene> {
        let scene = Arc::new(Scene::build(obstacles, self.config.clearance));
        *self.scene.write() = Arc::clone(&scene);
        tracing::debug!(stats = ?scene.stats(), "published routing scene");
        scene
    }

    /// The current scene. Holding it keeps that snapshot alive across rebuilds.
    pub fn snapshot(&self) -> Arc<Scene> {
        Arc::clone(&self.scene.read())
    }

    pub fn route(&self, start: Point, goal: Point) -> Result<Route, RouteError> {
        let scene = self.snapshot();
        find_route(scene.graph(), self.pathfinder.as_ref(), start, goal)
    }

    /// Like [`Self::route`], substituting the degraded direct line on failure.
    pub fn route_or_fallback(&self, start: Point, goal: Point) -> Route {
        self.route(start, goal).unwrap_or_else(|err| {
            tracing::warn!(error = %err, ?start, ?goal, "routing failed; using fallback line");
            Route::fallback(start, goal)
        })
    }

    pub fn route_connector(&self, connector: &Connector) -> Result<Route, RouteError> {
        let scene = self.snapshot();
        self.route_connector_in(&scene, connector)
    }

    /// Routes every connector against one snapshot, in parallel. Results keep
    /// the input order.
    pub fn route_connectors(&self, connectors: &[Connector]) -> Vec<Result<Route, RouteError>> {
        let scene = self.snapshot();
        connectors.par_iter().map(|connector| self.route_connector_in(&scene, connector)).collect()
    }

    /// The route leaves the node at its true anchor, crosses the clearance ring
    /// to the orbit anchor, follows the graph and enters the target the same way.
    fn route_connector_in(&self, scene: &Scene, connector: &Connector) -> Result<Route, RouteError> {
        let clearance = self.config.clearance;
        let from_box = scene.node_box(connector.from.node)?;
        let to_box = scene.node_box(connector.to.node)?;

        let exit = from_box.anchor(connector.from.anchor);
        let entry = to_box.anchor(connector.to.anchor);
        let mut route = find_route(scene.graph(), self.pathfinder.as_ref(), exit, entry)?;

        let source = from_box.node_anchor(connector.from.anchor, clearance);
        let target = to_box.node_anchor(connector.to.anchor, clearance);
        if route.points.first() != Some(&source) {
            route.points.insert(0, source);
        }
        if route.points.last() != Some(&target) {
            route.points.push(target);
        }
        route.points = merge_collinear(route.points);
        Ok(route)
    }
}

/// Drops interior points that sit on a straight run between their neighbors.
fn merge_collinear(points: Vec<Point>) -> Vec<Point> {
    let mut out = Vec::<Point>::with_capacity(points.len());
    for point in points {
        if out.last() == Some(&point) {
            continue;
        }
        if let [.., a, b] = out.as_slice() {
            let vertical_run = a.x == b.x
                && b.x == point.x
                && (b.y - a.y).signum() == (point.y - b.y).signum();
            let horizontal_run = a.y == b.y
                && b.y == point.y
                && (b.x - a.x).signum() == (point.x - b.x).signum();
            if vertical_run || horizontal_run {
                out.pop();
            }
        }
        out.push(point);
    }
    out
}
