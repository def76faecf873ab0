// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON scene documents: a node geometry snapshot plus the connectors to route.
//!
//! ```json
//! {
//!   "nodes": [
//!     { "position": { "x": 0, "y": 0 }, "size": { "width": 100, "height": 50 } },
//!     { "position": { "x": 0, "y": 150 }, "size": { "width": 100, "height": 50 } }
//!   ],
//!   "connectors": [
//!     { "from": { "node": 0, "anchor": "bottom" }, "to": { "node": 1, "anchor": "top" } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::obstacle::Obstacle;
use crate::route::Route;
use crate::router::{Connector, NodeAnchor, Router, Scene};
use crate::visibility::{BuildStats, GraphExport};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDocument {
    pub nodes: Vec<Obstacle>,
    #[serde(default)]
    pub connectors: Vec<Connector>,
}

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scene JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SceneDocument {
    pub fn from_json_str(raw: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, SceneError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorOutcome {
    pub connector: Connector,
    pub route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingReport {
    pub stats: BuildStats,
    pub routes: Vec<ConnectorOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphExport>,
}

/// Builds the scene on `router` and routes every connector. Connectors that
/// cannot be routed get the fallback line and carry the error message.
pub fn route_document(
    router: &Router,
    document: &SceneDocument,
    include_graph: bool,
) -> RoutingReport {
    let scene = router.rebuild(&document.nodes);
    let results = router.route_connectors(&document.connectors);

    let routes = document
        .connectors
        .iter()
        .zip(results)
        .map(|(connector, result)| match result {
            Ok(route) => ConnectorOutcome { connector: *connector, route, error: None },
            Err(err) => {
                tracing::warn!(?connector, error = %err, "connector fell back to a direct line");
                let clearance = router.config().clearance;
                let start = anchor_or_origin(&scene, connector.from, clearance);
                let goal = anchor_or_origin(&scene, connector.to, clearance);
                ConnectorOutcome {
                    connector: *connector,
                    route: Route::fallback(start, goal),
                    error: Some(err.to_string()),
                }
            }
        })
        .collect();

    RoutingReport {
        stats: scene.stats(),
        routes,
        graph: include_graph.then(|| scene.graph().export()),
    }
}

/// The point on the node outline a connector attaches to, like routed connectors.
/// Unknown or unmeasured nodes fall back to the origin.
fn anchor_or_origin(scene: &Scene, anchor: NodeAnchor, clearance: f64) -> Point {
    scene
        .boxes()
        .get(anchor.node)
        .filter(|b| !b.is_degenerate())
        .map(|b| b.node_anchor(anchor.anchor, clearance))
        .unwrap_or_default()
}
