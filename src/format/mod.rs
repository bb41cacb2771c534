// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mind-map input formats.
//!
//! The AI service answers with nested `{name, children}` JSON; older front-end code consumed a
//! flat `{nodes, edges}` graph. Both are accepted and validated into an [`Outline`].
//!
//! [`Outline`]: crate::model::Outline

pub mod json;

pub use json::{
    input_schema, outline_from_value, parse_mind_map, EdgeEndpoint, InvalidTreeInput,
    MindMapNode, MindMapParseError,
};
