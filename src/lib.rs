// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Orbit routing: orthogonal connector routes around diagram nodes.
//!
//! Node geometry goes in as [`Obstacle`]s, gets inflated by a clearance into
//! [`BoundingBox`]es, and becomes a [`VisibilityGraph`] of axis-aligned
//! segments that never cut through a node. Connectors are then routed over
//! that graph with a pluggable [`Pathfinder`].

pub mod config;
pub mod geometry;
pub mod obstacle;
pub mod route;
pub mod router;
pub mod scene;
pub mod visibility;

pub use config::{ConfigError, RouterConfig};
pub use geometry::{Coord, GridPoint, Heading, Point, Size};
pub use obstacle::{extract_bounding_boxes, Anchor, BoundingBox, Obstacle};
pub use route::{find_route, AStar, Dijkstra, Pathfinder, Route, RouteError, RouteKind};
pub use router::{Connector, NodeAnchor, Router, Scene};
pub use scene::{route_document, RoutingReport, SceneDocument, SceneError};
pub use visibility::{build_visibility_graph, BuildStats, GraphExport, VisibilityGraph};
