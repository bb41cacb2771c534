// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout of the visible part of a [`MindTree`](crate::model::MindTree).
//!
//! Positions live in a continuous coordinate space. The *depth axis* grows with tree depth; the
//! *cross axis* separates siblings. [`LayoutDirection`] decides which screen axis is which.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::NodeId;

pub mod tidy;

pub use tidy::layout_tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutDirection {
    /// Root on the left, depth grows along `x`.
    #[default]
    #[serde(alias = "lr")]
    LeftToRight,
    /// Root on top, depth grows along `y`.
    #[serde(alias = "tb")]
    TopToBottom,
}

impl LayoutDirection {
    pub fn place(self, cross: f64, depth: f64) -> Point {
        match self {
            Self::LeftToRight => Point::new(depth, cross),
            Self::TopToBottom => Point::new(cross, depth),
        }
    }

    pub fn cross_of(self, point: Point) -> f64 {
        match self {
            Self::LeftToRight => point.y(),
            Self::TopToBottom => point.x(),
        }
    }

    pub fn depth_of(self, point: Point) -> f64 {
        match self {
            Self::LeftToRight => point.x(),
            Self::TopToBottom => point.y(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutOptions {
    /// Cross-axis distance between adjacent siblings. Cousins get twice this.
    pub node_spacing: f64,
    /// Depth-axis distance between levels.
    pub level_spacing: f64,
    pub direction: LayoutDirection,
    /// When set, replaces `level_spacing` with `fit_width / (height + 1)`, where `height` is the
    /// depth of the deepest node, hidden ones included, so levels keep their place on toggle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_width: Option<f64>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            node_spacing: 20.0,
            level_spacing: 180.0,
            direction: LayoutDirection::LeftToRight,
            fit_width: None,
        }
    }
}

impl LayoutOptions {
    /// Depth-axis distance between levels of a tree whose deepest node sits at `height`.
    pub fn level_spacing_for(&self, height: usize) -> f64 {
        match self.fit_width {
            Some(width) => width / (height + 1) as f64,
            None => self.level_spacing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Linear interpolation; `t` is not clamped.
    pub fn lerp(self, to: Point, t: f64) -> Point {
        Point::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned box in output coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Output of a layout pass: one position per visible node.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    options: LayoutOptions,
    positions: BTreeMap<NodeId, Point>,
    depths: BTreeMap<NodeId, usize>,
    bounds: Bounds,
}

impl TreeLayout {
    pub(crate) fn new(
        options: LayoutOptions,
        positions: BTreeMap<NodeId, Point>,
        depths: BTreeMap<NodeId, usize>,
    ) -> Self {
        let mut bounds: Option<Bounds> = None;
        for p in positions.values() {
            let b = bounds.get_or_insert(Bounds { min_x: p.x, min_y: p.y, max_x: p.x, max_y: p.y });
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        Self { options, positions, depths, bounds: bounds.unwrap_or_default() }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn direction(&self) -> LayoutDirection {
        self.options.direction
    }

    pub fn positions(&self) -> &BTreeMap<NodeId, Point> {
        &self.positions
    }

    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.depths.get(&id).copied()
    }

    pub fn cross(&self, id: NodeId) -> Option<f64> {
        self.position(id).map(|p| self.direction().cross_of(p))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Bounding box of all node centres.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// `(min, max)` of the cross coordinate over all placed nodes.
    pub fn cross_extent(&self) -> (f64, f64) {
        match self.direction() {
            LayoutDirection::LeftToRight => (self.bounds.min_y, self.bounds.max_y),
            LayoutDirection::TopToBottom => (self.bounds.min_x, self.bounds.max_x),
        }
    }

    /// Closest node whose centre lies within `radius` of `point`.
    pub fn node_at(&self, point: Point, radius: f64) -> Option<NodeId> {
        self.positions
            .iter()
            .map(|(id, p)| (*id, p.distance(point)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
            .map(|(id, _)| id)
    }
}
