// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core tree model.
//!
//! Input formats lower into an [`Outline`]; a view turns the outline into a [`MindTree`] whose
//! nodes carry the expand/collapse state.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod outline;
pub mod tree;

pub use ids::{IdAllocator, IdError, NodeId};
pub use outline::{Outline, OutlineEntry, OutlineError};
pub use tree::{MindTree, NodeState, TreeNode};
