// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Validated, id-less description of a tree.
//!
//! Every input format lowers into an [`Outline`] first. An outline is a flat list of entries where
//! each non-root entry points at an earlier entry as its parent, which makes it acyclic and
//! single-rooted by construction.

use std::fmt;

use smol_str::SmolStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    label: SmolStr,
    subtitle: Option<SmolStr>,
    icon: Option<SmolStr>,
    parent: Option<usize>,
}

impl OutlineEntry {
    pub fn new(label: impl Into<SmolStr>) -> Self {
        Self { label: label.into(), subtitle: None, icon: None, parent: None }
    }

    pub fn with_subtitle<T: Into<SmolStr>>(mut self, subtitle: Option<T>) -> Self {
        self.subtitle = subtitle.map(Into::into);
        self
    }

    pub fn with_icon<T: Into<SmolStr>>(mut self, icon: Option<T>) -> Self {
        self.icon = icon.map(Into::into);
        self
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

    /// Index of the parent entry; `None` only for the root.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
}

impl Outline {
    pub fn with_root(root: OutlineEntry) -> Self {
        let mut root = root;
        root.parent = None;
        Self { entries: vec![root] }
    }

    /// Appends `entry` as the last child of `parent` and returns its index.
    pub fn push_child(
        &mut self,
        parent: usize,
        entry: OutlineEntry,
    ) -> Result<usize, OutlineError> {
        if parent >= self.entries.len() {
            return Err(OutlineError::UnknownParent { parent, len: self.entries.len() });
        }
        let mut entry = entry;
        entry.parent = Some(parent);
        self.entries.push(entry);
        Ok(self.entries.len() - 1)
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn root(&self) -> &OutlineEntry {
        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; an outline has at least its root.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Child indices per entry, in insertion order.
    pub fn child_lists(&self) -> Vec<Vec<usize>> {
        let mut children = vec![Vec::<usize>::new(); self.entries.len()];
        for (idx, entry) in self.entries.iter().enumerate() {
            if let Some(parent) = entry.parent {
                children[parent].push(idx);
            }
        }
        children
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineError {
    UnknownParent { parent: usize, len: usize },
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownParent { parent, len } => {
                write!(f, "parent entry {parent} does not exist (outline has {len} entries)")
            }
        }
    }
}

impl std::error::Error for OutlineError {}

#[cfg(test)]
mod tests {
    use super::{Outline, OutlineEntry, OutlineError};

    #[test]
    fn push_child_links_to_parent_and_keeps_order() {
        let mut outline = Outline::with_root(OutlineEntry::new("Root"));
        let a = outline.push_child(0, OutlineEntry::new("A")).expect("a");
        let b = outline.push_child(0, OutlineEntry::new("B")).expect("b");
        let b1 = outline.push_child(b, OutlineEntry::new("B1")).expect("b1");

        assert_eq!(outline.len(), 4);
        assert_eq!(outline.entries()[b1].parent(), Some(b));
        assert_eq!(outline.child_lists(), vec![vec![a, b], vec![], vec![b1], vec![]]);
    }

    #[test]
    fn push_child_rejects_forward_parent() {
        let mut outline = Outline::with_root(OutlineEntry::new("Root"));
        assert_eq!(
            outline.push_child(3, OutlineEntry::new("X")),
            Err(OutlineError::UnknownParent { parent: 3, len: 1 })
        );
    }

    #[test]
    fn root_parent_is_always_cleared() {
        let mut outline = Outline::with_root(OutlineEntry::new("Root"));
        outline.push_child(0, OutlineEntry::new("A")).expect("a");
        let reused = outline.entries()[1].clone();
        let fresh = Outline::with_root(reused);
        assert_eq!(fresh.root().parent(), None);
        assert_eq!(fresh.root().label(), "A");
    }
}
