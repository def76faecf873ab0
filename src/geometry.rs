// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Geometry primitives shared by the extractor, the graph builder and the router.
//!
//! Public values are plain `f64` points. Every set and map inside the routing
//! engine is keyed by [`GridPoint`], whose coordinates are quantized to a fixed
//! resolution of `1 / COORD_SCALE` diagram units. Two points that quantize to the
//! same `GridPoint` are the same vertex.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ticks per diagram unit used when quantizing coordinates.
pub const COORD_SCALE: f64 = 1000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// A quantized coordinate on one axis.
///
/// The range is that of `i64` ticks, roughly ±9.2e15 diagram units. Values
/// beyond it do not quantize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord(i64);

impl Coord {
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Quantizes `value`, returning `None` for NaN, infinities and values outside
    /// the representable range.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let scaled = (value * COORD_SCALE).round();
        if scaled < i64::MIN as f64 || scaled > i64::MAX as f64 {
            return None;
        }
        Some(Self(scaled as i64))
    }

    pub const fn ticks(self) -> i64 {
        self.0
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / COORD_SCALE
    }

    pub fn abs_diff(self, other: Self) -> u64 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

/// A vertex key: a point with quantized coordinates, ordered by `x` then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GridPoint {
    x: Coord,
    y: Coord,
}

impl GridPoint {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    pub fn from_point(point: Point) -> Option<Self> {
        Some(Self { x: Coord::from_f64(point.x)?, y: Coord::from_f64(point.y)? })
    }

    pub fn x(&self) -> Coord {
        self.x
    }

    pub fn y(&self) -> Coord {
        self.y
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x.to_f64(), self.y.to_f64())
    }

    pub fn with_x(self, x: Coord) -> Self {
        Self { x, y: self.y }
    }

    pub fn with_y(self, y: Coord) -> Self {
        Self { x: self.x, y }
    }

    pub fn manhattan(self, other: Self) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns the heading from `self` towards `other` when both lie on one
    /// axis-aligned line, `None` for equal or diagonal pairs.
    pub fn heading_to(self, other: Self) -> Option<Heading> {
        match (self.x == other.x, self.y == other.y) {
            (true, false) => Some(if other.y < self.y { Heading::Up } else { Heading::Down }),
            (false, true) => Some(if other.x < self.x { Heading::Left } else { Heading::Right }),
            _ => None,
        }
    }

    pub fn is_axis_aligned_with(self, other: Self) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<GridPoint> for Point {
    fn from(value: GridPoint) -> Self {
        value.to_point()
    }
}

/// One of the four axis directions. Screen coordinates: `Up` decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    pub fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}
