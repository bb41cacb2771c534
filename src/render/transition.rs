// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Keyed enter/update/exit diff between two layouts.
//!
//! Nodes are keyed by [`NodeId`], edges by their child id. Elements that appear grow out of the
//! toggled node's previous position; elements that disappear shrink into its new position.

use std::collections::BTreeMap;

use smol_str::SmolStr;

use crate::layout::{Bounds, LayoutOptions, Point, TreeLayout};
use crate::model::{MindTree, NodeId, NodeState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Enter,
    Update,
    Exit,
}

/// One node's motion from `from` to `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTransition {
    id: NodeId,
    label: SmolStr,
    subtitle: Option<SmolStr>,
    icon: Option<SmolStr>,
    parent: Option<NodeId>,
    depth: usize,
    state: NodeState,
    phase: Phase,
    from: Point,
    to: Point,
}

impl NodeTransition {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// State at the end of the transition.
    pub fn state(&self) -> NodeState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }
}

/// One edge's motion; both endpoints move independently.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeTransition {
    parent: NodeId,
    child: NodeId,
    phase: Phase,
    from: (Point, Point),
    to: (Point, Point),
}

impl EdgeTransition {
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn child(&self) -> NodeId {
        self.child
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `(source, target)` endpoints at the start.
    pub fn from(&self) -> (Point, Point) {
        self.from
    }

    /// `(source, target)` endpoints at the end.
    pub fn to(&self) -> (Point, Point) {
        self.to
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    options: LayoutOptions,
    source: NodeId,
    nodes: Vec<NodeTransition>,
    edges: Vec<EdgeTransition>,
    bounds: Bounds,
}

impl Transition {
    /// Diffs `layout` (the new state of `tree`) against `previous`, the positions drawn last time.
    ///
    /// `source` is the node whose toggle caused the change; on the first draw pass the root.
    /// Exiting nodes are taken from `previous` and must still exist in `tree` (collapsing never
    /// removes nodes, it only hides them).
    pub fn between(
        tree: &MindTree,
        previous: &BTreeMap<NodeId, Point>,
        layout: &TreeLayout,
        source: NodeId,
    ) -> Self {
        let source_now = layout.position(source).or_else(|| previous.get(&source).copied());
        let source_before = previous.get(&source).copied().or(source_now);

        let mut nodes = Vec::with_capacity(layout.len());
        let mut edges = Vec::with_capacity(layout.len());

        for id in tree.visible_nodes() {
            let (Some(node), Some(to)) = (tree.node(id), layout.position(id)) else {
                continue;
            };
            let (phase, from) = match previous.get(&id) {
                Some(before) => (Phase::Update, *before),
                None => (Phase::Enter, source_before.unwrap_or(to)),
            };
            nodes.push(NodeTransition {
                id,
                label: SmolStr::new(node.label()),
                subtitle: node.subtitle().map(SmolStr::new),
                icon: node.icon().map(SmolStr::new),
                parent: node.parent(),
                depth: node.depth(),
                state: node.state(),
                phase,
                from,
                to,
            });

            let Some(parent) = node.parent() else {
                continue;
            };
            let parent_to = layout.position(parent).unwrap_or(to);
            let from = match (previous.get(&parent), previous.get(&id)) {
                (Some(p), Some(c)) => (*p, *c),
                _ => {
                    let origin = source_before.unwrap_or(parent_to);
                    (origin, origin)
                }
            };
            let phase = if previous.contains_key(&id) { Phase::Update } else { Phase::Enter };
            edges.push(EdgeTransition { parent, child: id, phase, from, to: (parent_to, to) });
        }

        for id in tree.preorder() {
            let Some(before) = previous.get(&id).copied() else {
                continue;
            };
            if layout.position(id).is_some() {
                continue;
            }
            let Some(node) = tree.node(id) else {
                continue;
            };
            let target = source_now.unwrap_or(before);
            nodes.push(NodeTransition {
                id,
                label: SmolStr::new(node.label()),
                subtitle: node.subtitle().map(SmolStr::new),
                icon: node.icon().map(SmolStr::new),
                parent: node.parent(),
                depth: node.depth(),
                state: node.state(),
                phase: Phase::Exit,
                from: before,
                to: target,
            });
            if let Some(parent) = node.parent() {
                let parent_before = previous.get(&parent).copied().unwrap_or(before);
                edges.push(EdgeTransition {
                    parent,
                    child: id,
                    phase: Phase::Exit,
                    from: (parent_before, before),
                    to: (target, target),
                });
            }
        }

        Self { options: *layout.options(), source, nodes, edges, bounds: layout.bounds() }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Entering and updating nodes in pre-order, then exiting nodes in pre-order.
    pub fn nodes(&self) -> &[NodeTransition] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeTransition] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeTransition> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edge ending in `child`.
    pub fn edge(&self, child: NodeId) -> Option<&EdgeTransition> {
        self.edges.iter().find(|e| e.child == child)
    }

    pub fn nodes_in(&self, phase: Phase) -> impl Iterator<Item = &NodeTransition> + '_ {
        self.nodes.iter().filter(move |n| n.phase == phase)
    }

    pub fn edges_in(&self, phase: Phase) -> impl Iterator<Item = &EdgeTransition> + '_ {
        self.edges.iter().filter(move |e| e.phase == phase)
    }

    /// Nodes present once the transition completes.
    pub fn settled_nodes(&self) -> impl Iterator<Item = &NodeTransition> + '_ {
        self.nodes.iter().filter(|n| n.phase != Phase::Exit)
    }

    pub fn settled_edges(&self) -> impl Iterator<Item = &EdgeTransition> + '_ {
        self.edges.iter().filter(|e| e.phase != Phase::Exit)
    }

    /// Bounding box of the settled node centres.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Final positions, i.e. what the next transition should diff against.
    pub fn settled_positions(&self) -> BTreeMap<NodeId, Point> {
        self.settled_nodes().map(|n| (n.id, n.to)).collect()
    }

    /// Snapshot at progress `t`, clamped to `[0, 1]` and eased with cubic in-out. Exiting
    /// elements are gone at `t = 1`.
    pub fn frame(&self, t: f64) -> Frame {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let k = ease_cubic_in_out(t);
        let done = t >= 1.0;

        let nodes = self
            .nodes
            .iter()
            .filter(|n| !(done && n.phase == Phase::Exit))
            .map(|n| FrameNode { id: n.id, point: n.from.lerp(n.to, k), opacity: opacity(n.phase, k) })
            .collect();
        let edges = self
            .edges
            .iter()
            .filter(|e| !(done && e.phase == Phase::Exit))
            .map(|e| FrameEdge {
                child: e.child,
                source: e.from.0.lerp(e.to.0, k),
                target: e.from.1.lerp(e.to.1, k),
                opacity: opacity(e.phase, k),
            })
            .collect();

        Frame { t, nodes, edges }
    }
}

fn opacity(phase: Phase, k: f64) -> f64 {
    match phase {
        Phase::Enter => k,
        Phase::Update => 1.0,
        Phase::Exit => 1.0 - k,
    }
}

fn ease_cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameNode {
    pub id: NodeId,
    pub point: Point,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameEdge {
    pub child: NodeId,
    pub source: Point,
    pub target: Point,
    pub opacity: f64,
}

/// Interpolated state of a [`Transition`] at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub t: f64,
    pub nodes: Vec<FrameNode>,
    pub edges: Vec<FrameEdge>,
}

impl Frame {
    pub fn node(&self, id: NodeId) -> Option<&FrameNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, child: NodeId) -> Option<&FrameEdge> {
        self.edges.iter().find(|e| e.child == child)
    }
}
