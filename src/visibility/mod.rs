// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Orthogonal visibility graph construction.
//!
//! Interest points (box corners, edge midpoints and the clearance-offset corners of
//! the envelope around all boxes) are indexed by `x` and by `y`. Every pair in
//! `X × Y` becomes a vertex when it is an interest point or when at least two of
//! its four nearest interest neighbors are visible. Vertices connect to every
//! vertex they can see along each open direction, up to the far end of the
//! unobstructed corridor.

mod builder;
mod graph;
pub(crate) mod occlusion;

pub use builder::{build_from_boxes, build_visibility_graph, BuildStats};
pub use graph::{GraphExport, VisibilityGraph};
