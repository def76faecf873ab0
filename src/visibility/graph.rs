// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::geometry::{GridPoint, Point};

/// Orthogonal visibility graph over quantized points.
///
/// Every vertex has an entry in the edge map (possibly empty) and every edge
/// target is itself a vertex. Adjacency is symmetric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityGraph {
    vertices: BTreeSet<GridPoint>,
    edges: BTreeMap<GridPoint, BTreeSet<GridPoint>>,
    // Dense view of the same data for the search: `index[i]` is the i-th vertex
    // in order and `adjacency[i]` lists neighbor positions in `index`.
    index: Vec<GridPoint>,
    adjacency: Vec<SmallVec<[u32; 8]>>,
}

impl VisibilityGraph {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        vertices: BTreeSet<GridPoint>,
        mut edges: BTreeMap<GridPoint, BTreeSet<GridPoint>>,
    ) -> Self {
        for vertex in &vertices {
            edges.entry(*vertex).or_default();
        }
        debug_assert!(edges.keys().all(|p| vertices.contains(p)));

        let index = vertices.iter().copied().collect::<Vec<_>>();
        let adjacency = index
            .iter()
            .map(|p| {
                edges
                    .get(p)
                    .into_iter()
                    .flatten()
                    .filter_map(|q| index.binary_search(q).ok())
                    .map(|idx| idx as u32)
                    .collect::<SmallVec<[u32; 8]>>()
            })
            .collect::<Vec<_>>();

        Self { vertices, edges, index, adjacency }
    }

    pub fn vertices(&self) -> &BTreeSet<GridPoint> {
        &self.vertices
    }

    pub fn edges(&self) -> &BTreeMap<GridPoint, BTreeSet<GridPoint>> {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn contains_vertex(&self, point: &GridPoint) -> bool {
        self.vertices.contains(point)
    }

    pub fn contains_edge(&self, from: &GridPoint, to: &GridPoint) -> bool {
        self.edges.get(from).is_some_and(|targets| targets.contains(to))
    }

    pub fn neighbors<'a>(&'a self, point: &GridPoint) -> impl Iterator<Item = GridPoint> + 'a {
        self.edges.get(point).into_iter().flatten().copied()
    }

    /// Each undirected edge once, as `(a, b)` with `a < b`, in order.
    pub fn segments(&self) -> impl Iterator<Item = (GridPoint, GridPoint)> + '_ {
        self.edges
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (*from, *to)))
            .filter(|(from, to)| from < to)
    }

    /// The vertex closest to `point` in Manhattan distance; ties resolve to the
    /// smallest vertex in `GridPoint` order.
    pub fn nearest_vertex(&self, point: GridPoint) -> Option<GridPoint> {
        self.vertices.iter().copied().min_by_key(|v| (v.manhattan(point), *v))
    }

    pub fn export(&self) -> GraphExport {
        GraphExport {
            vertices: self.vertices.iter().map(|p| p.to_point()).collect(),
            segments: self.segments().map(|(a, b)| [a.to_point(), b.to_point()]).collect(),
        }
    }

    pub(crate) fn index_of(&self, point: &GridPoint) -> Option<usize> {
        self.index.binary_search(point).ok()
    }

    pub(crate) fn point_at(&self, idx: usize) -> GridPoint {
        self.index[idx]
    }

    pub(crate) fn neighbor_indices(&self, idx: usize) -> &[u32] {
        &self.adjacency[idx]
    }
}

/// Serializable view of a graph, suitable for debug overlays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    pub vertices: Vec<Point>,
    pub segments: Vec<[Point; 2]>,
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::VisibilityGraph;
    use crate::geometry::{Coord, GridPoint, Point};

    fn gp(x: i64, y: i64) -> GridPoint {
        GridPoint::new(Coord::from_ticks(x * 1000), Coord::from_ticks(y * 1000))
    }

    fn square() -> VisibilityGraph {
        let vertices = [gp(0, 0), gp(0, 10), gp(10, 0), gp(10, 10), gp(50, 50)]
            .into_iter()
            .collect::<BTreeSet<_>>();
        let mut edges = BTreeMap::<GridPoint, BTreeSet<GridPoint>>::new();
        for (a, b) in [
            (gp(0, 0), gp(0, 10)),
            (gp(0, 0), gp(10, 0)),
            (gp(0, 10), gp(10, 10)),
            (gp(10, 0), gp(10, 10)),
        ] {
            edges.entry(a).or_default().insert(b);
            edges.entry(b).or_default().insert(a);
        }
        VisibilityGraph::from_parts(vertices, edges)
    }

    #[test]
    fn isolated_vertices_get_empty_edge_entries() {
        let graph = square();
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors(&gp(50, 50)).count(), 0);
        assert!(graph.edges().contains_key(&gp(50, 50)));
    }

    #[test]
    fn dense_adjacency_mirrors_the_edge_map() {
        let graph = square();
        let origin = graph.index_of(&gp(0, 0)).expect("vertex");
        let neighbors = graph
            .neighbor_indices(origin)
            .iter()
            .map(|&idx| graph.point_at(idx as usize))
            .collect::<Vec<_>>();
        assert_eq!(neighbors, vec![gp(0, 10), gp(10, 0)]);
    }

    #[test]
    fn nearest_vertex_breaks_ties_by_order() {
        let graph = square();
        assert_eq!(graph.nearest_vertex(gp(5, 0)), Some(gp(0, 0)));
        assert_eq!(graph.nearest_vertex(gp(40, 45)), Some(gp(50, 50)));
        assert_eq!(VisibilityGraph::empty().nearest_vertex(gp(0, 0)), None);
    }

    #[test]
    fn export_lists_each_segment_once() {
        let export = square().export();
        assert_eq!(export.vertices.len(), 5);
        assert_eq!(export.segments.len(), 4);
        assert_eq!(export.segments[0], [Point::new(0.0, 0.0), Point::new(0.0, 10.0)]);
    }
}
