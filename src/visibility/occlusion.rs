// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::geometry::{Coord, GridPoint};
use crate::obstacle::BoundingBox;

/// A non-degenerate bounding box in quantized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridBox {
    pub(crate) left: Coord,
    pub(crate) right: Coord,
    pub(crate) top: Coord,
    pub(crate) bottom: Coord,
    pub(crate) midpoint_x: Coord,
    pub(crate) midpoint_y: Coord,
}

impl GridBox {
    pub(crate) fn from_bounding_box(b: &BoundingBox) -> Option<Self> {
        if b.is_degenerate() {
            return None;
        }
        let grid = Self {
            left: Coord::from_f64(b.left)?,
            right: Coord::from_f64(b.right)?,
            top: Coord::from_f64(b.top)?,
            bottom: Coord::from_f64(b.bottom)?,
            midpoint_x: Coord::from_f64(b.midpoint_x)?,
            midpoint_y: Coord::from_f64(b.midpoint_y)?,
        };
        (grid.left <= grid.right && grid.top <= grid.bottom).then_some(grid)
    }
}

/// Zero-width wall along a line shared by two touching boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Seam {
    at: Coord,
    from: Coord,
    to: Coord,
}

impl Seam {
    fn blocks(&self, at: Coord, lo: Coord, hi: Coord) -> bool {
        self.at == at && lo < self.to && self.from < hi
    }
}

/// Occlusion oracle for axis-aligned segments.
///
/// A segment is occluded when it passes through the open interior of a box, or
/// when it runs along a seam where two boxes touch with zero gap. Running along
/// the outline of a single box is not occluded.
#[derive(Debug, Clone, Default)]
pub(crate) struct Occluders {
    boxes: Vec<GridBox>,
    vertical_seams: Vec<Seam>,
    horizontal_seams: Vec<Seam>,
}

impl Occluders {
    pub(crate) fn new(boxes: Vec<GridBox>) -> Self {
        let mut vertical_seams = Vec::new();
        let mut horizontal_seams = Vec::new();

        for a in &boxes {
            for b in &boxes {
                if a.right == b.left {
                    let from = a.top.max(b.top);
                    let to = a.bottom.min(b.bottom);
                    if from < to {
                        vertical_seams.push(Seam { at: a.right, from, to });
                    }
                }
                if a.bottom == b.top {
                    let from = a.left.max(b.left);
                    let to = a.right.min(b.right);
                    if from < to {
                        horizontal_seams.push(Seam { at: a.bottom, from, to });
                    }
                }
            }
        }

        Self { boxes, vertical_seams, horizontal_seams }
    }

    pub(crate) fn seam_count(&self) -> usize {
        self.vertical_seams.len() + self.horizontal_seams.len()
    }

    pub(crate) fn blocks_vertical(&self, x: Coord, y0: Coord, y1: Coord) -> bool {
        let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        if lo == hi {
            return false;
        }
        self.boxes.iter().any(|b| b.left < x && x < b.right && lo < b.bottom && b.top < hi)
            || self.vertical_seams.iter().any(|s| s.blocks(x, lo, hi))
    }

    pub(crate) fn blocks_horizontal(&self, y: Coord, x0: Coord, x1: Coord) -> bool {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        if lo == hi {
            return false;
        }
        self.boxes.iter().any(|b| b.top < y && y < b.bottom && lo < b.right && b.left < hi)
            || self.horizontal_seams.iter().any(|s| s.blocks(y, lo, hi))
    }

    /// Diagonal segments are never visible.
    pub(crate) fn blocks(&self, a: GridPoint, b: GridPoint) -> bool {
        if a.x() == b.x() {
            self.blocks_vertical(a.x(), a.y(), b.y())
        } else if a.y() == b.y() {
            self.blocks_horizontal(a.y(), a.x(), b.x())
        } else {
            true
        }
    }
}
