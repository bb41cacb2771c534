// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use mindtree::model::{IdAllocator, MindTree, NodeId, Outline, OutlineEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    /// Levels below the root.
    pub depth: usize,
    pub branching: usize,
    pub label_len: usize,
}

impl TreeParams {
    pub const fn new(depth: usize, branching: usize, label_len: usize) -> Self {
        Self { depth, branching, label_len }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Wide,
    Deep,
    LargeLongLabels,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Small, Case::Wide, Case::Deep, Case::LargeLongLabels];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Wide => "wide",
            Self::Deep => "deep",
            Self::LargeLongLabels => "large_long_labels",
        }
    }

    pub const fn params(self) -> TreeParams {
        match self {
            Self::Small => TreeParams::new(3, 3, 8),
            Self::Wide => TreeParams::new(2, 40, 12),
            Self::Deep => TreeParams::new(2_000, 1, 8),
            Self::LargeLongLabels => TreeParams::new(6, 4, 48),
        }
    }
}

fn label(idx: usize, len: usize) -> String {
    let mut out = format!("n{idx}");
    let mut fill = b'a' + (idx % 26) as u8;
    while out.len() < len {
        out.push(' ');
        out.push(fill as char);
        fill = if fill == b'z' { b'a' } else { fill + 1 };
    }
    out.truncate(len.max(2));
    out
}

pub fn outline(case: Case) -> Outline {
    let params = case.params();
    let mut outline = Outline::with_root(OutlineEntry::new(label(0, params.label_len)));
    let mut frontier = vec![0usize];
    for _ in 0..params.depth {
        let mut next = Vec::with_capacity(frontier.len() * params.branching);
        for parent in frontier {
            for _ in 0..params.branching {
                let entry = OutlineEntry::new(label(outline.len(), params.label_len));
                next.push(outline.push_child(parent, entry).expect("fixture parent exists"));
            }
        }
        frontier = next;
    }
    outline
}

/// The same tree as nested mind-map JSON.
pub fn json(case: Case) -> String {
    let outline = outline(case);
    let children = outline.child_lists();
    let mut out = String::new();

    enum Step {
        Open(usize),
        Close,
        Comma,
    }
    let mut stack = vec![Step::Open(0)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Open(idx) => {
                let name = serde_json::to_string(outline.entries()[idx].label()).expect("label");
                out.push_str(&format!("{{\"name\":{name},\"children\":["));
                stack.push(Step::Close);
                for (pos, child) in children[idx].iter().enumerate().rev() {
                    stack.push(Step::Open(*child));
                    if pos > 0 {
                        stack.push(Step::Comma);
                    }
                }
            }
            Step::Close => out.push_str("]}"),
            Step::Comma => out.push(','),
        }
    }
    out
}

pub fn tree(case: Case) -> MindTree {
    MindTree::from_outline(&outline(case), &mut IdAllocator::new())
}

/// Inner nodes of `tree` in pre-order; toggling them collapses or expands whole subtrees.
pub fn inner_nodes(tree: &MindTree) -> Vec<NodeId> {
    tree.preorder()
        .into_iter()
        .filter(|id| tree.node(*id).is_some_and(|n| !n.all_children().is_empty()))
        .collect()
}
