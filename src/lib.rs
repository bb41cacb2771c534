// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mindtree: collapsible mind-map tree view.
//!
//! Mind-map JSON is validated into an [`Outline`](model::Outline), built into a
//! [`MindTree`](model::MindTree) whose nodes expand and collapse, laid out with a tidy-tree
//! algorithm, and drawn through a [`RenderSurface`](view::RenderSurface) as keyed
//! enter/update/exit [`Transition`](render::Transition)s.
//!
//! ```
//! use mindtree::layout::LayoutOptions;
//! use mindtree::render::UnicodeOptions;
//! use mindtree::view::{TreeView, UnicodeSurface};
//!
//! let json = r#"{"name":"Root","children":[{"name":"A"},{"name":"B","children":[{"name":"B1"}]}]}"#;
//! let mut view = TreeView::from_json_str(
//!     json,
//!     LayoutOptions::default(),
//!     UnicodeSurface::new(UnicodeOptions::default()),
//! )?;
//! let b = view.tree().find_by_label("B").expect("B exists");
//! view.toggle(b)?;
//! assert!(view.surface().text().contains("⊕ B"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod format;
pub mod layout;
pub mod model;
pub mod render;
pub mod view;
