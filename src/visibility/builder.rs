// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound::{Excluded, Unbounded};

use serde::Serialize;
use smallvec::SmallVec;

use super::graph::VisibilityGraph;
use super::occlusion::{GridBox, Occluders};
use crate::geometry::{Coord, GridPoint, Heading};
use crate::obstacle::{extract_bounding_boxes, BoundingBox, Obstacle};

/// Counters describing one graph build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub obstacles: usize,
    pub degenerate: usize,
    pub seams: usize,
    pub interest_points: usize,
    pub candidates: usize,
    pub vertices: usize,
    pub edges: usize,
    pub pruned_edges: usize,
}

/// Builds the orthogonal visibility graph for a snapshot of node geometry.
pub fn build_visibility_graph(obstacles: &[Obstacle], clearance: f64) -> VisibilityGraph {
    let boxes = extract_bounding_boxes(obstacles, clearance);
    build_from_boxes(&boxes, clearance).0
}

/// Builds the graph from already inflated boxes. Degenerate boxes, and boxes
/// too far out to quantize, are skipped and counted as degenerate.
pub fn build_from_boxes(boxes: &[BoundingBox], clearance: f64) -> (VisibilityGraph, BuildStats) {
    let mut grid_boxes = Vec::with_capacity(boxes.len());
    for (idx, b) in boxes.iter().enumerate() {
        match GridBox::from_bounding_box(b) {
            Some(grid) => grid_boxes.push(grid),
            None if b.is_degenerate() => {}
            None => {
                tracing::debug!(obstacle = idx, ?b, "obstacle lies outside the quantizable range")
            }
        }
    }
    let mut stats = BuildStats {
        obstacles: boxes.len(),
        degenerate: boxes.len() - grid_boxes.len(),
        ..BuildStats::default()
    };

    if grid_boxes.is_empty() {
        tracing::debug!(?stats, "no usable obstacles; visibility graph is empty");
        return (VisibilityGraph::empty(), stats);
    }

    let margin = Coord::from_f64(clearance).map_or(0, Coord::ticks).max(0);
    let interest = collect_interest_points(&grid_boxes, margin);
    let index = InterestIndex::new(&interest);
    let occluders = Occluders::new(grid_boxes);
    stats.interest_points = interest.len();
    stats.seams = occluders.seam_count();
    stats.candidates = index.by_x.len() * index.by_y.len();

    let mut open = BTreeMap::<GridPoint, SmallVec<[Heading; 4]>>::new();
    for &x in index.by_x.keys() {
        for &y in index.by_y.keys() {
            let point = GridPoint::new(x, y);
            let headings = open_headings(point, &index, &occluders);
            if interest.contains(&point) || headings.len() > 1 {
                open.insert(point, headings);
            }
        }
    }
    let vertices = open.keys().copied().collect::<BTreeSet<_>>();

    let mut raw = BTreeMap::<GridPoint, BTreeSet<GridPoint>>::new();
    for (point, headings) in &open {
        let targets = raw.entry(*point).or_default();
        for heading in headings {
            walk_corridor(*point, *heading, &index, &occluders, targets);
        }
    }

    let (edges, pruned) = prune_and_mirror(raw, &vertices);
    let graph = VisibilityGraph::from_parts(vertices, edges);

    stats.vertices = graph.vertex_count();
    stats.edges = graph.edge_count();
    stats.pruned_edges = pruned;
    tracing::debug!(?stats, "built visibility graph");

    (graph, stats)
}

/// Box corners, edge midpoints and the clearance-offset corners of the envelope.
fn collect_interest_points(boxes: &[GridBox], margin: i64) -> BTreeSet<GridPoint> {
    let mut points = BTreeSet::new();
    let mut left = i64::MAX;
    let mut right = i64::MIN;
    let mut top = i64::MAX;
    let mut bottom = i64::MIN;

    for b in boxes {
        left = left.min(b.left.ticks());
        right = right.max(b.right.ticks());
        top = top.min(b.top.ticks());
        bottom = bottom.max(b.bottom.ticks());

        points.extend([
            GridPoint::new(b.left, b.top),
            GridPoint::new(b.left, b.bottom),
            GridPoint::new(b.right, b.top),
            GridPoint::new(b.right, b.bottom),
            GridPoint::new(b.left, b.midpoint_y),
            GridPoint::new(b.midpoint_x, b.top),
            GridPoint::new(b.midpoint_x, b.bottom),
            GridPoint::new(b.right, b.midpoint_y),
        ]);
    }

    let outer = |x: i64, y: i64| GridPoint::new(Coord::from_ticks(x), Coord::from_ticks(y));
    points.extend([
        outer(left.saturating_sub(margin), top.saturating_sub(margin)),
        outer(left.saturating_sub(margin), bottom.saturating_add(margin)),
        outer(right.saturating_add(margin), top.saturating_sub(margin)),
        outer(right.saturating_add(margin), bottom.saturating_add(margin)),
    ]);

    points
}

/// Interest points grouped by line: `by_x[x]` holds every `y` seen at `x`,
/// `by_y[y]` every `x` seen at `y`.
struct InterestIndex {
    by_x: BTreeMap<Coord, BTreeSet<Coord>>,
    by_y: BTreeMap<Coord, BTreeSet<Coord>>,
}

impl InterestIndex {
    fn new(points: &BTreeSet<GridPoint>) -> Self {
        let mut by_x = BTreeMap::<Coord, BTreeSet<Coord>>::new();
        let mut by_y = BTreeMap::<Coord, BTreeSet<Coord>>::new();
        for p in points {
            by_x.entry(p.x()).or_default().insert(p.y());
            by_y.entry(p.y()).or_default().insert(p.x());
        }
        Self { by_x, by_y }
    }

    /// Nearest interest point from `point` along `heading` on the shared line.
    fn nearest(&self, point: GridPoint, heading: Heading) -> Option<GridPoint> {
        match heading {
            Heading::Up => {
                let ys = self.by_x.get(&point.x())?;
                ys.range(..point.y()).next_back().map(|&y| point.with_y(y))
            }
            Heading::Down => {
                let ys = self.by_x.get(&point.x())?;
                ys.range((Excluded(point.y()), Unbounded)).next().map(|&y| point.with_y(y))
            }
            Heading::Left => {
                let xs = self.by_y.get(&point.y())?;
                xs.range(..point.x()).next_back().map(|&x| point.with_x(x))
            }
            Heading::Right => {
                let xs = self.by_y.get(&point.y())?;
                xs.range((Excluded(point.x()), Unbounded)).next().map(|&x| point.with_x(x))
            }
        }
    }

    /// Every candidate grid point beyond `point` along `heading`, nearest first.
    fn line_beyond(
        &self,
        point: GridPoint,
        heading: Heading,
    ) -> Box<dyn Iterator<Item = GridPoint> + '_> {
        match heading {
            Heading::Up => {
                Box::new(self.by_y.range(..point.y()).rev().map(move |(&y, _)| point.with_y(y)))
            }
            Heading::Down => Box::new(
                self.by_y.range((Excluded(point.y()), Unbounded)).map(move |(&y, _)| point.with_y(y)),
            ),
            Heading::Left => {
                Box::new(self.by_x.range(..point.x()).rev().map(move |(&x, _)| point.with_x(x)))
            }
            Heading::Right => Box::new(
                self.by_x.range((Excluded(point.x()), Unbounded)).map(move |(&x, _)| point.with_x(x)),
            ),
        }
    }
}

/// Headings in which `point` sees its nearest interest point unoccluded.
fn open_headings(
    point: GridPoint,
    index: &InterestIndex,
    occluders: &Occluders,
) -> SmallVec<[Heading; 4]> {
    Heading::ALL
        .into_iter()
        .filter(|&heading| {
            index.nearest(point, heading).is_some_and(|neighbor| !occluders.blocks(point, neighbor))
        })
        .collect()
}

/// Walks from `point` along `heading` until the first occlusion, recording every
/// grid point reached. The last one recorded is the far end of the corridor.
fn walk_corridor(
    point: GridPoint,
    heading: Heading,
    index: &InterestIndex,
    occluders: &Occluders,
    targets: &mut BTreeSet<GridPoint>,
) {
    let mut prev = point;
    for next in index.line_beyond(point, heading) {
        if occluders.blocks(prev, next) {
            break;
        }
        targets.insert(next);
        prev = next;
    }
}

/// Drops edges to points that did not qualify as vertices, then adds the
/// reverse of every surviving edge. Returns the edge map and the pruned count.
fn prune_and_mirror(
    raw: BTreeMap<GridPoint, BTreeSet<GridPoint>>,
    vertices: &BTreeSet<GridPoint>,
) -> (BTreeMap<GridPoint, BTreeSet<GridPoint>>, usize) {
    let mut pruned = 0usize;
    let mut edges = BTreeMap::<GridPoint, BTreeSet<GridPoint>>::new();

    for (from, targets) in raw {
        let before = targets.len();
        let kept = targets.into_iter().filter(|to| vertices.contains(to)).collect::<BTreeSet<_>>();
        pruned += before - kept.len();
        edges.insert(from, kept);
    }

    let reverse = edges
        .iter()
        .flat_map(|(from, targets)| targets.iter().map(move |to| (*to, *from)))
        .collect::<Vec<_>>();
    for (from, to) in reverse {
        edges.entry(from).or_default().insert(to);
    }

    (edges, pruned)
}
