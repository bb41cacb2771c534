// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Unicode text rendering of the settled state of a [`Transition`].
//!
//! Each node is a marker plus `icon label · subtitle`: `●` expanded, `⊕` collapsed (children
//! hidden), `○` leaf. Layout coordinates are snapped to character cells: two rows per sibling
//! slot when depth runs left to right, four rows per level when it runs top to bottom.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::text::{cell_len, fit_label};
use super::transition::{NodeTransition, Transition};
use super::{AnnotatedRender, RenderError};
use crate::layout::LayoutDirection;
use crate::model::{NodeId, NodeState};

/// Blank cells between the widest label of a level and the next level (left to right).
const LEVEL_GAP: usize = 6;
const ROWS_PER_SLOT: f64 = 2.0;
const ROWS_PER_LEVEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnicodeOptions {
    /// Longer labels are cut with `…`.
    pub max_label_width: usize,
}

impl Default for UnicodeOptions {
    fn default() -> Self {
        Self { max_label_width: 32 }
    }
}

pub fn marker(state: NodeState) -> char {
    match state {
        NodeState::Expanded => '●',
        NodeState::Collapsed => '⊕',
        NodeState::Leaf => '○',
    }
}

/// `icon label · subtitle`, leaving out whatever the node does not have.
fn caption(node: &NodeTransition) -> String {
    let mut text = String::new();
    if let Some(icon) = node.icon() {
        text.push_str(icon);
        text.push(' ');
    }
    text.push_str(node.label());
    if let Some(subtitle) = node.subtitle() {
        text.push_str(" · ");
        text.push_str(subtitle);
    }
    text
}

pub fn render_unicode(transition: &Transition, options: &UnicodeOptions) -> Result<String, RenderError> {
    Ok(render_unicode_annotated(transition, options)?.text)
}

/// Like [`render_unicode`], also reporting which cells each node's text occupies.
pub fn render_unicode_annotated(
    transition: &Transition,
    options: &UnicodeOptions,
) -> Result<AnnotatedRender, RenderError> {
    let nodes: Vec<&NodeTransition> = transition.settled_nodes().collect();
    if nodes.is_empty() {
        return Ok(AnnotatedRender { text: String::new(), spans: BTreeMap::new() });
    }

    let texts: BTreeMap<NodeId, String> = nodes
        .iter()
        .map(|n| {
            let label = fit_label(&caption(n), options.max_label_width.max(1));
            (n.id(), format!("{} {label}", marker(n.state())))
        })
        .collect();

    let mut children: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();
    for node in &nodes {
        if let Some(parent) = node.parent() {
            children.entry(parent).or_default().push(node.id());
        }
    }

    let grid = Grid::new(transition, &nodes, &texts);
    let mut canvas = Canvas::new(grid.width, grid.height)?;
    match grid.direction {
        LayoutDirection::LeftToRight => draw_horizontal_links(&mut canvas, &grid, &nodes, &children)?,
        LayoutDirection::TopToBottom => draw_vertical_links(&mut canvas, &grid, &children)?,
    }

    let mut spans = BTreeMap::new();
    for node in &nodes {
        let id = node.id();
        let text = &texts[&id];
        let (x, y) = grid.text_origin(id);
        let written = canvas.put_str(x, y, text)?;
        if written > 0 {
            spans.insert(id, (y, x, x + written - 1));
        }
    }

    Ok(AnnotatedRender { text: canvas.to_trimmed_string(), spans })
}

/// Cell placement of every settled node.
struct Grid {
    direction: LayoutDirection,
    width: usize,
    height: usize,
    /// Column where each level's text starts (left to right only).
    level_columns: Vec<usize>,
    /// `(column, row)` anchor: text start when left to right, text centre when top to bottom.
    anchors: BTreeMap<NodeId, (usize, usize)>,
    text_lens: BTreeMap<NodeId, usize>,
}

impl Grid {
    fn new(transition: &Transition, nodes: &[&NodeTransition], texts: &BTreeMap<NodeId, String>) -> Self {
        let options = transition.options();
        let direction = options.direction;
        let spacing = if options.node_spacing > 0.0 { options.node_spacing } else { 1.0 };
        let cross_min = nodes
            .iter()
            .map(|n| direction.cross_of(n.to()))
            .fold(f64::INFINITY, f64::min);
        let slot = |n: &NodeTransition| (direction.cross_of(n.to()) - cross_min) / spacing;
        let text_lens: BTreeMap<NodeId, usize> =
            texts.iter().map(|(id, text)| (*id, cell_len(text))).collect();
        let max_depth = nodes.iter().map(|n| n.depth()).max().unwrap_or(0);

        let mut anchors = BTreeMap::new();
        let mut level_columns = Vec::new();
        let (width, height) = match direction {
            LayoutDirection::LeftToRight => {
                let mut level_widths = vec![0usize; max_depth + 1];
                for node in nodes {
                    let w = &mut level_widths[node.depth()];
                    *w = (*w).max(text_lens[&node.id()]);
                }
                let mut col = 0;
                for w in &level_widths {
                    level_columns.push(col);
                    col += w + LEVEL_GAP;
                }
                let mut rows = 0;
                for node in nodes {
                    let row = (slot(*node) * ROWS_PER_SLOT).round() as usize;
                    rows = rows.max(row + 1);
                    anchors.insert(node.id(), (level_columns[node.depth()], row));
                }
                (level_columns[max_depth] + level_widths[max_depth], rows)
            }
            LayoutDirection::TopToBottom => {
                let widest = text_lens.values().copied().max().unwrap_or(0);
                let unit = (widest + 2) as f64;
                let mut cols = 0;
                for node in nodes {
                    let centre = (slot(*node) * unit).round() as usize + widest / 2;
                    cols = cols.max(centre + widest);
                    anchors.insert(node.id(), (centre, node.depth() * ROWS_PER_LEVEL));
                }
                (cols, max_depth * ROWS_PER_LEVEL + 1)
            }
        };

        Self { direction, width, height, level_columns, anchors, text_lens }
    }

    fn anchor(&self, id: NodeId) -> (usize, usize) {
        self.anchors.get(&id).copied().unwrap_or((0, 0))
    }

    fn text_len(&self, id: NodeId) -> usize {
        self.text_lens.get(&id).copied().unwrap_or(0)
    }

    fn text_origin(&self, id: NodeId) -> (usize, usize) {
        let (x, y) = self.anchor(id);
        match self.direction {
            LayoutDirection::LeftToRight => (x, y),
            LayoutDirection::TopToBottom => (x.saturating_sub(self.text_len(id) / 2), y),
        }
    }
}

/// `parent ──┬─ child` style connectors. The junction column sits in the gap before the
/// children's level.
fn draw_horizontal_links(
    canvas: &mut Canvas,
    grid: &Grid,
    nodes: &[&NodeTransition],
    children: &BTreeMap<NodeId, Vec<NodeId>>,
) -> Result<(), RenderError> {
    for node in nodes {
        let Some(kids) = children.get(&node.id()) else {
            continue;
        };
        let Some(child_col) = grid.level_columns.get(node.depth() + 1).copied() else {
            continue;
        };
        let (x, y) = grid.anchor(node.id());
        let junction = child_col - 3;
        canvas.hline(x + grid.text_len(node.id()) + 1, junction, y)?;

        let rows: Vec<usize> = kids.iter().map(|kid| grid.anchor(*kid).1).collect();
        let lo = rows.iter().copied().chain([y]).min().unwrap_or(y);
        let hi = rows.iter().copied().chain([y]).max().unwrap_or(y);
        if lo < hi {
            canvas.vline(junction, lo, hi)?;
        }
        for row in rows {
            canvas.hline(junction, child_col - 2, row)?;
        }
    }
    Ok(())
}

/// Stem down from the parent, a bar across the children, a stem down into each child.
fn draw_vertical_links(
    canvas: &mut Canvas,
    grid: &Grid,
    children: &BTreeMap<NodeId, Vec<NodeId>>,
) -> Result<(), RenderError> {
    for (parent, kids) in children {
        let (px, py) = grid.anchor(*parent);
        let bar = py + 2;
        canvas.vline(px, py + 1, bar)?;

        let cols: Vec<usize> = kids.iter().map(|kid| grid.anchor(*kid).0).collect();
        let lo = cols.iter().copied().chain([px]).min().unwrap_or(px);
        let hi = cols.iter().copied().chain([px]).max().unwrap_or(px);
        if lo < hi {
            canvas.hline(lo, hi, bar)?;
        }
        for col in cols {
            canvas.vline(col, bar, bar + 1)?;
        }
    }
    Ok(())
}
