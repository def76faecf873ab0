// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{Pathfinder, RouteError};
use crate::config::RouterConfig;
use crate::geometry::{Coord, GridPoint};
use crate::visibility::VisibilityGraph;

// Search states are (vertex, heading of the edge used to reach it). The extra
// slot is the heading-less start state.
const HEADING_SLOTS: usize = 5;
const NO_HEADING: usize = 4;
const NO_STATE: u32 = u32::MAX;

/// A* over the visibility graph with a Manhattan-distance heuristic.
///
/// Cost is route length plus `bend_penalty` per change of direction, all in
/// quantized ticks, so a route with fewer corners wins over an equally long one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AStar {
    bend_penalty: u64,
    max_steps: usize,
}

impl AStar {
    /// `bend_penalty` is in diagram units.
    pub fn new(bend_penalty: f64, max_steps: usize) -> Self {
        Self { bend_penalty: penalty_ticks(bend_penalty), max_steps }
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(config.bend_penalty, config.max_search_steps)
    }
}

impl Default for AStar {
    fn default() -> Self {
        Self::from_config(&RouterConfig::default())
    }
}

impl Pathfinder for AStar {
    fn find_path(
        &self,
        graph: &VisibilityGraph,
        start: GridPoint,
        goal: GridPoint,
    ) -> Result<Vec<GridPoint>, RouteError> {
        search(graph, start, goal, self.bend_penalty, self.max_steps, |p| p.manhattan(goal))
    }
}

/// Uniform-cost search with the same cost model as [`AStar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dijkstra {
    bend_penalty: u64,
    max_steps: usize,
}

impl Dijkstra {
    pub fn new(bend_penalty: f64, max_steps: usize) -> Self {
        Self { bend_penalty: penalty_ticks(bend_penalty), max_steps }
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(config.bend_penalty, config.max_search_steps)
    }
}

impl Pathfinder for Dijkstra {
    fn find_path(
        &self,
        graph: &VisibilityGraph,
        start: GridPoint,
        goal: GridPoint,
    ) -> Result<Vec<GridPoint>, RouteError> {
        search(graph, start, goal, self.bend_penalty, self.max_steps, |_| 0)
    }
}

fn penalty_ticks(units: f64) -> u64 {
    Coord::from_f64(units).map_or(0, |c| c.ticks().max(0) as u64)
}

fn search(
    graph: &VisibilityGraph,
    start: GridPoint,
    goal: GridPoint,
    bend_penalty: u64,
    max_steps: usize,
    heuristic: impl Fn(GridPoint) -> u64,
) -> Result<Vec<GridPoint>, RouteError> {
    let not_found = RouteError::NoPathFound { start, goal };
    let start_idx = graph.index_of(&start).ok_or_else(|| not_found.clone())?;
    let goal_idx = graph.index_of(&goal).ok_or_else(|| not_found.clone())?;
    if start_idx == goal_idx {
        return Ok(vec![start]);
    }

    let state_count = graph.vertex_count() * HEADING_SLOTS;
    let mut dist = vec![u64::MAX; state_count];
    let mut came_from = vec![NO_STATE; state_count];
    let mut heap = BinaryHeap::<Reverse<(u64, u64, u64, u32)>>::new();

    let start_state = start_idx * HEADING_SLOTS + NO_HEADING;
    dist[start_state] = 0;
    heap.push(Reverse((heuristic(start), 0, 0, start_state as u32)));

    let mut tie_seq = 1u64;
    let mut steps = 0usize;

    while let Some(Reverse((_f_cost, g_cost, _tie, state))) = heap.pop() {
        let state = state as usize;
        if g_cost != dist[state] {
            continue;
        }

        steps += 1;
        if steps > max_steps {
            tracing::debug!(%start, %goal, steps, "search budget exhausted");
            return Err(RouteError::SearchBudgetExhausted { steps: max_steps });
        }

        let idx = state / HEADING_SLOTS;
        let slot = state % HEADING_SLOTS;
        if idx == goal_idx {
            tracing::trace!(%start, %goal, steps, cost = g_cost, "path found");
            return Ok(reconstruct(graph, &came_from, state));
        }

        let current = graph.point_at(idx);
        for &next_idx in graph.neighbor_indices(idx) {
            let next = graph.point_at(next_idx as usize);
            let Some(heading) = current.heading_to(next) else {
                continue;
            };
            let bend = if slot != NO_HEADING && slot != heading.index() { bend_penalty } else { 0 };
            let next_cost = g_cost + current.manhattan(next) + bend;
            let next_state = next_idx as usize * HEADING_SLOTS + heading.index();
            if next_cost < dist[next_state] {
                dist[next_state] = next_cost;
                came_from[next_state] = state as u32;
                heap.push(Reverse((
                    next_cost + heuristic(next),
                    next_cost,
                    tie_seq,
                    next_state as u32,
                )));
                tie_seq += 1;
            }
        }
    }

    Err(not_found)
}

fn reconstruct(graph: &VisibilityGraph, came_from: &[u32], goal_state: usize) -> Vec<GridPoint> {
    let mut path = vec![graph.point_at(goal_state / HEADING_SLOTS)];
    let mut cursor = goal_state;
    while came_from[cursor] != NO_STATE {
        cursor = came_from[cursor] as usize;
        path.push(graph.point_at(cursor / HEADING_SLOTS));
    }
    path.reverse();
    path
}
