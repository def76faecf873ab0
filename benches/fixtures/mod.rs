// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use orbit_route::{Anchor, Connector, NodeAnchor, Obstacle, Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumDense,
    LargeSparse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridParams {
    pub cols: usize,
    pub rows: usize,
    /// Distance between cell origins.
    pub pitch: u32,
}

impl GridParams {
    pub const fn new(cols: usize, rows: usize, pitch: u32) -> Self {
        Self { cols, rows, pitch }
    }
}

pub fn params(case: Case) -> GridParams {
    match case {
        Case::Small => GridParams::new(3, 3, 200),
        Case::MediumDense => GridParams::new(8, 6, 150),
        Case::LargeSparse => GridParams::new(16, 12, 260),
    }
}

/// Nodes laid out row-major on a grid. Sizes and offsets vary per cell with a
/// fixed pattern so neighboring lines rarely coincide.
pub fn nodes(params: GridParams) -> Vec<Obstacle> {
    let mut out = Vec::with_capacity(params.cols * params.rows);
    for row in 0..params.rows {
        for col in 0..params.cols {
            let i = (row * params.cols + col) as u32;
            let width = 60 + (i * 17) % 40;
            let height = 30 + (i * 11) % 30;
            let x = col as u32 * params.pitch + (i * 7) % 13;
            let y = row as u32 * params.pitch + (i * 5) % 11;
            out.push(Obstacle::new(
                Point::new(f64::from(x), f64::from(y)),
                Size::new(f64::from(width), f64::from(height)),
            ));
        }
    }
    out
}

/// Connects every node to its right neighbor and to the node below it, plus a
/// handful of long diagonal hops across the grid.
pub fn connectors(params: GridParams) -> Vec<Connector> {
    let at = |row: usize, col: usize| row * params.cols + col;
    let mut out = Vec::new();
    for row in 0..params.rows {
        for col in 0..params.cols {
            if col + 1 < params.cols {
                out.push(Connector::new(
                    NodeAnchor::new(at(row, col), Anchor::Right),
                    NodeAnchor::new(at(row, col + 1), Anchor::Left),
                ));
            }
            if row + 1 < params.rows {
                out.push(Connector::new(
                    NodeAnchor::new(at(row, col), Anchor::Bottom),
                    NodeAnchor::new(at(row + 1, col), Anchor::Top),
                ));
            }
        }
    }
    let last = params.cols * params.rows - 1;
    for step in 0..params.cols.min(params.rows) {
        out.push(Connector::new(
            NodeAnchor::new(at(step, 0), Anchor::Left),
            NodeAnchor::new(last - step, Anchor::Right),
        ));
    }
    out
}

pub fn fixture(case: Case) -> (Vec<Obstacle>, Vec<Connector>) {
    let params = params(case);
    (nodes(params), connectors(params))
}
