// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{IdAllocator, NodeId};
use super::outline::{Outline, OutlineEntry};
use super::tree::MindTree;

/// `Root -> [A, B -> [B1]]`
pub(crate) fn outline_root_a_b_b1() -> Outline {
    let mut outline = Outline::with_root(OutlineEntry::new("Root"));
    outline.push_child(0, OutlineEntry::new("A")).expect("a");
    let b = outline.push_child(0, OutlineEntry::new("B")).expect("b");
    outline.push_child(b, OutlineEntry::new("B1")).expect("b1");
    outline
}

/// Three levels with mixed branching:
///
/// ```text
/// Plan
/// ├─ Goals ─ [Short, Long]
/// ├─ Risks
/// └─ Budget ─ [Staff ─ [Senior, Junior], Travel]
/// ```
pub(crate) fn outline_plan() -> Outline {
    let mut outline = Outline::with_root(OutlineEntry::new("Plan"));
    let goals = outline.push_child(0, OutlineEntry::new("Goals")).expect("goals");
    outline.push_child(goals, OutlineEntry::new("Short")).expect("short");
    outline.push_child(goals, OutlineEntry::new("Long")).expect("long");
    outline.push_child(0, OutlineEntry::new("Risks")).expect("risks");
    let budget = outline.push_child(0, OutlineEntry::new("Budget")).expect("budget");
    let staff = outline.push_child(budget, OutlineEntry::new("Staff")).expect("staff");
    outline.push_child(staff, OutlineEntry::new("Senior")).expect("senior");
    outline.push_child(staff, OutlineEntry::new("Junior")).expect("junior");
    outline.push_child(budget, OutlineEntry::new("Travel")).expect("travel");
    outline
}

/// Complete tree with `branching` children per inner node and `depth` levels below the root.
pub(crate) fn outline_balanced(branching: usize, depth: usize) -> Outline {
    let mut outline = Outline::with_root(OutlineEntry::new("n0"));
    let mut frontier = vec![0usize];
    for _ in 0..depth {
        let mut next = Vec::with_capacity(frontier.len() * branching);
        for parent in frontier {
            for _ in 0..branching {
                let label = format!("n{}", outline.len());
                next.push(outline.push_child(parent, OutlineEntry::new(label)).expect("child"));
            }
        }
        frontier = next;
    }
    outline
}

/// Single path of `len` nodes.
pub(crate) fn outline_chain(len: usize) -> Outline {
    let mut outline = Outline::with_root(OutlineEntry::new("c0"));
    for idx in 1..len.max(1) {
        outline.push_child(idx - 1, OutlineEntry::new(format!("c{idx}"))).expect("link");
    }
    outline
}

pub(crate) fn tree(outline: &Outline) -> MindTree {
    MindTree::from_outline(outline, &mut IdAllocator::new())
}

pub(crate) fn id_of(tree: &MindTree, label: &str) -> NodeId {
    tree.find_by_label(label).unwrap_or_else(|| panic!("no node labelled {label:?}"))
}

pub(crate) fn labels(tree: &MindTree, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .map(|id| tree.node(*id).map(|n| n.label().to_owned()).unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{outline_balanced, outline_chain, outline_plan, outline_root_a_b_b1};

    #[test]
    fn fixtures_have_expected_sizes() {
        assert_eq!(outline_root_a_b_b1().len(), 4);
        assert_eq!(outline_plan().len(), 10);
        assert_eq!(outline_balanced(3, 2).len(), 1 + 3 + 9);
        assert_eq!(outline_chain(5).len(), 5);
        assert_eq!(outline_chain(0).len(), 1);
    }
}
