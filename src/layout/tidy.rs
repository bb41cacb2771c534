// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tidy tree layout (Reingold–Tilford, in the linear-time formulation of Buchheim, Jünger and
//! Leipert).
//!
//! Every walk is iterative so arbitrarily deep trees do not exhaust the stack.

use std::collections::BTreeMap;

use crate::model::{MindTree, NodeId};

use super::{LayoutOptions, TreeLayout};

/// Per-node scratch state of the two walks.
#[derive(Debug, Clone)]
struct WalkNode {
    id: NodeId,
    parent: Option<usize>,
    children: Vec<usize>,
    /// Position among siblings.
    index: usize,
    depth: usize,
    /// Greatest distinct ancestor candidate used when shifting subtrees apart.
    ancestor: usize,
    /// Default ancestor handed from one child to the next; only set on parents.
    default_ancestor: Option<usize>,
    thread: Option<usize>,
    prelim: f64,
    modifier: f64,
    change: f64,
    shift: f64,
}

struct TidyWalk {
    nodes: Vec<WalkNode>,
}

impl TidyWalk {
    /// Copies the visible part of `tree` into walk nodes; slot 0 is the root.
    fn from_tree(tree: &MindTree) -> Self {
        let mut nodes = Vec::<WalkNode>::new();
        // (node id, parent slot, index among siblings, depth)
        let mut stack = vec![(tree.root(), None::<usize>, 0usize, 0usize)];
        while let Some((id, parent, index, depth)) = stack.pop() {
            let slot = nodes.len();
            nodes.push(WalkNode {
                id,
                parent,
                children: Vec::new(),
                index,
                depth,
                ancestor: slot,
                default_ancestor: None,
                thread: None,
                prelim: 0.0,
                modifier: 0.0,
                change: 0.0,
                shift: 0.0,
            });
            if let Some(parent) = parent {
                nodes[parent].children.push(slot);
            }
            if let Some(node) = tree.node(id) {
                for (child_index, child) in node.children().iter().enumerate().rev() {
                    stack.push((*child, Some(slot), child_index, depth + 1));
                }
            }
        }
        Self { nodes }
    }

    /// Children before parents, siblings left to right.
    fn postorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![0usize];
        while let Some(v) = stack.pop() {
            order.push(v);
            stack.extend(self.nodes[v].children.iter().copied());
        }
        order.reverse();
        order
    }

    fn separation(&self, a: usize, b: usize) -> f64 {
        if self.nodes[a].parent == self.nodes[b].parent {
            1.0
        } else {
            2.0
        }
    }

    fn left_sibling(&self, v: usize) -> Option<usize> {
        let node = &self.nodes[v];
        let parent = node.parent?;
        node.index.checked_sub(1).map(|idx| self.nodes[parent].children[idx])
    }

    fn next_left(&self, v: usize) -> Option<usize> {
        self.nodes[v].children.first().copied().or(self.nodes[v].thread)
    }

    fn next_right(&self, v: usize) -> Option<usize> {
        self.nodes[v].children.last().copied().or(self.nodes[v].thread)
    }

    fn first_walk(&mut self, v: usize) {
        let left = self.left_sibling(v);
        if self.nodes[v].children.is_empty() {
            if let Some(w) = left {
                self.nodes[v].prelim = self.nodes[w].prelim + self.separation(v, w);
            }
        } else {
            self.execute_shifts(v);
            let children = &self.nodes[v].children;
            let centroid = children.iter().map(|c| self.nodes[*c].prelim).sum::<f64>()
                / children.len() as f64;
            if let Some(w) = left {
                let prelim = self.nodes[w].prelim + self.separation(v, w);
                self.nodes[v].prelim = prelim;
                self.nodes[v].modifier = prelim - centroid;
            } else {
                self.nodes[v].prelim = centroid;
            }
        }

        if let Some(parent) = self.nodes[v].parent {
            let default_ancestor =
                self.nodes[parent].default_ancestor.unwrap_or(self.nodes[parent].children[0]);
            let next = self.apportion(v, left, default_ancestor);
            self.nodes[parent].default_ancestor = Some(next);
        }
    }

    /// Pushes `v`'s subtree right until its left contour clears the right contour of the
    /// subtrees to its left. Returns the default ancestor for the next sibling.
    fn apportion(&mut self, v: usize, left: Option<usize>, default_ancestor: usize) -> usize {
        let Some(w) = left else {
            return default_ancestor;
        };
        let Some(parent) = self.nodes[v].parent else {
            return default_ancestor;
        };
        let mut default_ancestor = default_ancestor;

        // i = inside, o = outside, p = right subtree (v), m = left forest.
        let mut vip = v;
        let mut vop = v;
        let mut vim = w;
        let mut vom = self.nodes[parent].children[0];
        let mut sip = self.nodes[vip].modifier;
        let mut sop = self.nodes[vop].modifier;
        let mut sim = self.nodes[vim].modifier;
        let mut som = self.nodes[vom].modifier;

        let mut next_im = self.next_right(vim);
        let mut next_ip = self.next_left(vip);
        while let (Some(im), Some(ip)) = (next_im, next_ip) {
            vim = im;
            vip = ip;
            // Both outer contours reach at least as deep as the inner ones.
            let (Some(om), Some(op)) = (self.next_left(vom), self.next_right(vop)) else {
                break;
            };
            vom = om;
            vop = op;
            self.nodes[vop].ancestor = v;

            let shift = self.nodes[vim].prelim + sim - self.nodes[vip].prelim - sip
                + self.separation(vim, vip);
            if shift > 0.0 {
                let ancestor = self.next_ancestor(vim, v, default_ancestor);
                self.move_subtree(ancestor, v, shift);
                sip += shift;
                sop += shift;
            }

            sim += self.nodes[vim].modifier;
            sip += self.nodes[vip].modifier;
            som += self.nodes[vom].modifier;
            sop += self.nodes[vop].modifier;

            next_im = self.next_right(vim);
            next_ip = self.next_left(vip);
        }

        if next_im.is_some() && self.next_right(vop).is_none() {
            self.nodes[vop].thread = next_im;
            self.nodes[vop].modifier += sim - sop;
        }
        if next_ip.is_some() && self.next_left(vom).is_none() {
            self.nodes[vom].thread = next_ip;
            self.nodes[vom].modifier += sip - som;
            default_ancestor = v;
        }

        default_ancestor
    }

    fn next_ancestor(&self, vim: usize, v: usize, default_ancestor: usize) -> usize {
        let candidate = self.nodes[vim].ancestor;
        if self.nodes[candidate].parent == self.nodes[v].parent {
            candidate
        } else {
            default_ancestor
        }
    }

    fn move_subtree(&mut self, wm: usize, wp: usize, shift: f64) {
        let subtrees = self.nodes[wp].index.saturating_sub(self.nodes[wm].index);
        if subtrees > 0 {
            let change = shift / subtrees as f64;
            self.nodes[wp].change -= change;
            self.nodes[wm].change += change;
        }
        self.nodes[wp].shift += shift;
        self.nodes[wp].prelim += shift;
        self.nodes[wp].modifier += shift;
    }

    fn execute_shifts(&mut self, v: usize) {
        let mut shift = 0.0;
        let mut change = 0.0;
        for k in (0..self.nodes[v].children.len()).rev() {
            let w = self.nodes[v].children[k];
            let node = &mut self.nodes[w];
            node.prelim += shift;
            node.modifier += shift;
            change += node.change;
            shift += node.shift + change;
        }
    }

    /// Resolves relative positions into absolute cross coordinates (in separation units), with
    /// the root at 0.
    fn second_walk(&mut self) -> Vec<f64> {
        let mut cross = vec![0.0; self.nodes.len()];
        let root_offset = -self.nodes[0].prelim;
        let mut stack = vec![0usize];
        while let Some(v) = stack.pop() {
            let parent_modifier = match self.nodes[v].parent {
                Some(parent) => self.nodes[parent].modifier,
                None => root_offset,
            };
            cross[v] = self.nodes[v].prelim + parent_modifier;
            self.nodes[v].modifier += parent_modifier;
            stack.extend(self.nodes[v].children.iter().copied());
        }
        cross
    }
}

/// Lays out the visible nodes of `tree`.
///
/// Guarantees, in layout units before scaling by `node_spacing`:
/// - adjacent nodes on the same level are at least 1 apart (2 for cousins)
/// - a parent sits at the mean of its visible children
/// - the root sits at cross 0, depth 0
pub fn layout_tree(tree: &MindTree, options: &LayoutOptions) -> TreeLayout {
    let mut walk = TidyWalk::from_tree(tree);
    for v in walk.postorder() {
        walk.first_walk(v);
    }
    let cross = walk.second_walk();
    let level_spacing = options.level_spacing_for(tree.height());

    let mut positions = BTreeMap::new();
    let mut depths = BTreeMap::new();
    for (slot, node) in walk.nodes.iter().enumerate() {
        let point = options.direction.place(
            normalize_zero(cross[slot] * options.node_spacing),
            node.depth as f64 * level_spacing,
        );
        positions.insert(node.id, point);
        depths.insert(node.id, node.depth);
    }

    tracing::debug!(nodes = positions.len(), direction = ?options.direction, "tree layout");
    TreeLayout::new(*options, positions, depths)
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
