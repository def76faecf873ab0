// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connector routing over a [`VisibilityGraph`].
//!
//! The search strategy is pluggable through [`Pathfinder`]; [`AStar`] is the
//! default and [`Dijkstra`] is a drop-in alternative. [`find_route`] snaps the
//! requested endpoints onto the graph, runs the search and returns the route as
//! a polyline with only the corner points kept.

mod astar;
mod polyline;

use serde::{Deserialize, Serialize};

use crate::geometry::{GridPoint, Point};
use crate::visibility::VisibilityGraph;

pub use astar::{AStar, Dijkstra};
pub use polyline::fallback_polyline;

/// Search strategy contract: a read-only graph plus two of its vertices in, an
/// ordered orthogonal vertex path out. Implementations must be deterministic.
pub trait Pathfinder: Send + Sync {
    fn find_path(
        &self,
        graph: &VisibilityGraph,
        start: GridPoint,
        goal: GridPoint,
    ) -> Result<Vec<GridPoint>, RouteError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no path from {start} to {goal}")]
    NoPathFound { start: GridPoint, goal: GridPoint },
    #[error("search gave up after {steps} steps")]
    SearchBudgetExhausted { steps: usize },
    #[error("route endpoint is not a finite point")]
    NonFiniteEndpoint,
    #[error("connector references unknown node {node}")]
    UnknownNode { node: usize },
    #[error("node {node} has no resolvable geometry")]
    DegenerateNode { node: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// Found by searching the visibility graph.
    Routed,
    /// Straight or single-elbow connection; the graph was empty.
    Direct,
    /// Degraded line substituted after a routing failure.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub points: Vec<Point>,
    pub kind: RouteKind,
}

impl Route {
    pub fn fallback(start: Point, goal: Point) -> Self {
        Self { points: fallback_polyline(start, goal), kind: RouteKind::Fallback }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// True when every consecutive pair of points shares an `x` or a `y`.
    pub fn is_orthogonal(&self) -> bool {
        self.points.windows(2).all(|w| w[0].x == w[1].x || w[0].y == w[1].y)
    }

    pub fn corner_count(&self) -> usize {
        self.points.len().saturating_sub(2)
    }

    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1].x - w[0].x).abs() + (w[1].y - w[0].y).abs()).sum()
    }
}

/// Routes from `start` to `goal` on `graph`.
///
/// Endpoints that are not vertices are joined to their nearest vertex with a
/// straight or single-elbow stub. An empty graph yields a direct connection.
/// Routed points are reported at quantized resolution.
pub fn find_route(
    graph: &VisibilityGraph,
    pathfinder: &dyn Pathfinder,
    start: Point,
    goal: Point,
) -> Result<Route, RouteError> {
    let start_key = GridPoint::from_point(start).ok_or(RouteError::NonFiniteEndpoint)?;
    let goal_key = GridPoint::from_point(goal).ok_or(RouteError::NonFiniteEndpoint)?;

    let (Some(entry), Some(exit)) =
        (graph.nearest_vertex(start_key), graph.nearest_vertex(goal_key))
    else {
        return Ok(Route { points: fallback_polyline(start, goal), kind: RouteKind::Direct });
    };

    let path = pathfinder.find_path(graph, entry, exit)?;

    let mut full = Vec::with_capacity(path.len() + 4);
    full.push(start_key);
    full.extend(polyline::elbow(start_key, entry));
    full.extend(path);
    full.extend(polyline::elbow(exit, goal_key));
    full.push(goal_key);

    let points =
        polyline::compress_to_polyline(&full).into_iter().map(GridPoint::to_point).collect();

    Ok(Route { points, kind: RouteKind::Routed })
}
