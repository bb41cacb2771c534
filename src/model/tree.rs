// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;

use super::ids::{IdAllocator, NodeId};
use super::outline::Outline;

/// Expand/collapse state of a single node.
///
/// `Leaf` is terminal: nothing ever adds children to a node after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeState {
    Expanded,
    Collapsed,
    Leaf,
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expanded => f.write_str("expanded"),
            Self::Collapsed => f.write_str("collapsed"),
            Self::Leaf => f.write_str("leaf"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    id: NodeId,
    label: SmolStr,
    subtitle: Option<SmolStr>,
    icon: Option<SmolStr>,
    parent: Option<NodeId>,
    depth: usize,
    children: Vec<NodeId>,
    collapsed_children: Option<Vec<NodeId>>,
}

impl TreeNode {
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

    /// Children currently shown. Empty for leaves and collapsed nodes.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Children retained while the node is collapsed.
    pub fn collapsed_children(&self) -> Option<&[NodeId]> {
        self.collapsed_children.as_deref()
    }

    /// Children regardless of state.
    pub fn all_children(&self) -> &[NodeId] {
        match &self.collapsed_children {
            Some(hidden) => hidden,
            None => &self.children,
        }
    }

    pub fn state(&self) -> NodeState {
        if self.collapsed_children.is_some() {
            NodeState::Collapsed
        } else if self.children.is_empty() {
            NodeState::Leaf
        } else {
            NodeState::Expanded
        }
    }

    pub fn has_hidden_children(&self) -> bool {
        self.collapsed_children.is_some()
    }
}

/// A rooted mind-map tree with per-node expand/collapse state.
///
/// Nodes live in one map keyed by [`NodeId`]; parent/child links are ids. Ids are assigned in
/// pre-order, so the root always has the smallest id of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MindTree {
    nodes: BTreeMap<NodeId, TreeNode>,
    root: NodeId,
}

impl MindTree {
    /// Builds a fully expanded tree, drawing ids from `ids`.
    pub fn from_outline(outline: &Outline, ids: &mut IdAllocator) -> Self {
        let child_lists = outline.child_lists();
        let entries = outline.entries();
        let mut nodes = BTreeMap::<NodeId, TreeNode>::new();
        let root = ids.allocate();

        // (entry index, parent id, depth)
        let mut stack = vec![(0usize, None::<NodeId>, 0usize)];
        while let Some((idx, parent, depth)) = stack.pop() {
            let entry = &entries[idx];
            let id = match parent {
                None => root,
                Some(parent) => {
                    let id = ids.allocate();
                    if let Some(parent_node) = nodes.get_mut(&parent) {
                        parent_node.children.push(id);
                    }
                    id
                }
            };

            nodes.insert(
                id,
                TreeNode {
                    id,
                    label: SmolStr::new(entry.label()),
                    subtitle: entry.subtitle().map(SmolStr::new),
                    icon: entry.icon().map(SmolStr::new),
                    parent,
                    depth,
                    children: Vec::with_capacity(child_lists[idx].len()),
                    collapsed_children: None,
                },
            );

            for &child in child_lists[idx].iter().rev() {
                stack.push((child, Some(id), depth + 1));
            }
        }

        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    pub fn state(&self, id: NodeId) -> Option<NodeState> {
        self.node(id).map(TreeNode::state)
    }

    /// Flips `id` between expanded and collapsed.
    ///
    /// Returns the new state, or `None` when `id` is unknown or a leaf; in both cases nothing
    /// changes. Descendant states are left untouched.
    pub fn toggle(&mut self, id: NodeId) -> Option<NodeState> {
        let node = self.nodes.get_mut(&id)?;
        match node.state() {
            NodeState::Leaf => None,
            NodeState::Expanded => {
                node.collapsed_children = Some(std::mem::take(&mut node.children));
                Some(NodeState::Collapsed)
            }
            NodeState::Collapsed => {
                node.children = node.collapsed_children.take().unwrap_or_default();
                Some(NodeState::Expanded)
            }
        }
    }

    /// A node is visible iff every ancestor is expanded. Unknown ids are not visible.
    pub fn is_visible(&self, id: NodeId) -> bool {
        let Some(mut node) = self.node(id) else {
            return false;
        };
        while let Some(parent_id) = node.parent {
            let Some(parent) = self.node(parent_id) else {
                return false;
            };
            if parent.has_hidden_children() {
                return false;
            }
            node = parent;
        }
        true
    }

    /// Visible nodes in pre-order.
    pub fn visible_nodes(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.node(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Visible `(parent, child)` pairs in pre-order of the child.
    pub fn visible_edges(&self) -> Vec<(NodeId, NodeId)> {
        self.visible_nodes()
            .into_iter()
            .filter_map(|id| self.node(id).and_then(|node| node.parent).map(|parent| (parent, id)))
            .collect()
    }

    /// All nodes in pre-order, hidden ones included.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.node(id) {
                stack.extend(node.all_children().iter().rev().copied());
            }
        }
        out
    }

    /// Strict descendants of `id` in pre-order, hidden ones included.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(node) = self.node(id) else {
            return out;
        };
        let mut stack = node.all_children().iter().rev().copied().collect::<Vec<_>>();
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(node) = self.node(next) {
                stack.extend(node.all_children().iter().rev().copied());
            }
        }
        out
    }

    /// First node in pre-order whose label equals `label`.
    pub fn find_by_label(&self, label: &str) -> Option<NodeId> {
        self.preorder().into_iter().find(|id| self.node(*id).is_some_and(|n| n.label() == label))
    }

    /// Depth of the deepest node, hidden ones included.
    pub fn height(&self) -> usize {
        self.nodes.values().map(TreeNode::depth).max().unwrap_or(0)
    }

    /// Depth of the deepest visible node; 0 for a lone root.
    pub fn visible_height(&self) -> usize {
        self.visible_nodes()
            .into_iter()
            .filter_map(|id| self.node(id).map(TreeNode::depth))
            .max()
            .unwrap_or(0)
    }
}
