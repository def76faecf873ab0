// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::geometry::{GridPoint, Point};

/// Removes repeated points and every point that does not change direction.
pub(crate) fn compress_to_polyline(path: &[GridPoint]) -> Vec<GridPoint> {
    let mut deduped = Vec::<GridPoint>::with_capacity(path.len());
    for point in path.iter().copied() {
        if deduped.last() != Some(&point) {
            deduped.push(point);
        }
    }

    if deduped.len() < 3 {
        return deduped;
    }

    let direction = |a: GridPoint, b: GridPoint| {
        ((b.x().ticks() - a.x().ticks()).signum(), (b.y().ticks() - a.y().ticks()).signum())
    };

    let mut points = Vec::<GridPoint>::with_capacity(deduped.len());
    points.push(deduped[0]);
    let mut prev_dir = direction(deduped[0], deduped[1]);
    for idx in 1..deduped.len() - 1 {
        let dir = direction(deduped[idx], deduped[idx + 1]);
        if dir != prev_dir {
            points.push(deduped[idx]);
            prev_dir = dir;
        }
    }
    if let Some(last) = deduped.last() {
        points.push(*last);
    }
    points
}

/// Corner point joining `from` to `to` with one horizontal then one vertical
/// leg, or `None` when they already share a line.
pub(crate) fn elbow(from: GridPoint, to: GridPoint) -> Option<GridPoint> {
    (!from.is_axis_aligned_with(to)).then(|| from.with_x(to.x()))
}

/// Degraded direct connection: a straight line when the endpoints share an
/// axis, otherwise a single elbow.
pub fn fallback_polyline(start: Point, goal: Point) -> Vec<Point> {
    if start == goal {
        return vec![start];
    }
    if start.x == goal.x || start.y == goal.y {
        return vec![start, goal];
    }
    vec![start, Point::new(goal.x, start.y), goal]
}
