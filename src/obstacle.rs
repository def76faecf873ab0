// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Obstacle extraction: node geometry snapshots to inflated bounding boxes.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

/// Read-only geometry snapshot of one diagram node.
///
/// `position` is the node's top-left corner. Either field may be missing when
/// the node has not been measured yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    #[serde(default)]
    pub position: Option<Point>,
    #[serde(default)]
    pub size: Option<Size>,
}

impl Obstacle {
    pub fn new(position: Point, size: Size) -> Self {
        Self { position: Some(position), size: Some(size) }
    }

    pub fn unmeasured() -> Self {
        Self::default()
    }

    fn resolved(&self) -> Option<(Point, Size)> {
        let position = self.position?;
        let size = self.size?;
        (position.is_finite() && size.is_valid()).then_some((position, size))
    }
}

/// Connector attachment side of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Top,
    Bottom,
    Left,
    Right,
}

/// Obstacle region: node geometry inflated on all four sides by the clearance.
///
/// A box built from unresolvable geometry holds NaN in every field, so every
/// comparison against it is false.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub midpoint_x: f64,
    pub midpoint_y: f64,
}

impl BoundingBox {
    pub fn inflate(position: Point, size: Size, clearance: f64) -> Self {
        Self {
            left: position.x - clearance,
            right: position.x + size.width + clearance,
            top: position.y - clearance,
            bottom: position.y + size.height + clearance,
            midpoint_x: position.x + size.width / 2.0,
            midpoint_y: position.y + size.height / 2.0,
        }
    }

    pub fn degenerate() -> Self {
        Self {
            left: f64::NAN,
            right: f64::NAN,
            top: f64::NAN,
            bottom: f64::NAN,
            midpoint_x: f64::NAN,
            midpoint_y: f64::NAN,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        ![self.left, self.right, self.top, self.bottom, self.midpoint_x, self.midpoint_y]
            .iter()
            .all(|v| v.is_finite())
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.left, self.bottom),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
        ]
    }

    /// Connector attachment point on the inflated outline.
    pub fn anchor(&self, anchor: Anchor) -> Point {
        match anchor {
            Anchor::Top => Point::new(self.midpoint_x, self.top),
            Anchor::Bottom => Point::new(self.midpoint_x, self.bottom),
            Anchor::Left => Point::new(self.left, self.midpoint_y),
            Anchor::Right => Point::new(self.right, self.midpoint_y),
        }
    }

    /// Attachment point on the node's own outline, `clearance` inside [`Self::anchor`].
    pub fn node_anchor(&self, anchor: Anchor, clearance: f64) -> Point {
        let orbit = self.anchor(anchor);
        match anchor {
            Anchor::Top => orbit.offset(0.0, clearance),
            Anchor::Bottom => orbit.offset(0.0, -clearance),
            Anchor::Left => orbit.offset(clearance, 0.0),
            Anchor::Right => orbit.offset(-clearance, 0.0),
        }
    }

    pub fn anchors(&self) -> [Point; 4] {
        [
            self.anchor(Anchor::Left),
            self.anchor(Anchor::Top),
            self.anchor(Anchor::Bottom),
            self.anchor(Anchor::Right),
        ]
    }

    /// True when `point` lies strictly inside the box.
    pub fn contains_strictly(&self, point: Point) -> bool {
        point.x > self.left && point.x < self.right && point.y > self.top && point.y < self.bottom
    }
}

/// One box per obstacle, in input order.
pub fn extract_bounding_boxes(obstacles: &[Obstacle], clearance: f64) -> Vec<BoundingBox> {
    obstacles
        .iter()
        .enumerate()
        .map(|(idx, obstacle)| match obstacle.resolved() {
            Some((position, size)) => BoundingBox::inflate(position, size, clearance),
            None => {
                tracing::debug!(obstacle = idx, "obstacle has no resolvable geometry");
                BoundingBox::degenerate()
            }
        })
        .collect()
}
