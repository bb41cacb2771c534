// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawing a laid-out tree.
//!
//! Every renderer consumes a [`Transition`], the keyed diff between the previously drawn
//! positions and the new layout. SVG output can animate it; text output shows where it settles.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::NodeId;

pub mod canvas;
pub mod svg;
mod text;
pub mod transition;
pub mod unicode;

pub use canvas::{Canvas, CanvasError};
pub use svg::{render_svg, Margins, SvgOptions};
pub use transition::{EdgeTransition, Frame, FrameEdge, FrameNode, NodeTransition, Phase, Transition};
pub use unicode::{render_unicode, render_unicode_annotated, UnicodeOptions};

/// Cells of one text run: `(row, first column, last column)`, inclusive.
pub type LineSpan = (usize, usize, usize);

/// Text rendering plus the cells each node's text occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRender {
    pub text: String,
    pub spans: BTreeMap<NodeId, LineSpan>,
}

impl AnnotatedRender {
    /// Node whose text covers cell `(x, y)`.
    pub fn node_at(&self, x: usize, y: usize) -> Option<NodeId> {
        self.spans
            .iter()
            .find(|(_, (row, x0, x1))| *row == y && (*x0..=*x1).contains(&x))
            .map(|(id, _)| *id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    Canvas(CanvasError),
    Format(fmt::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "text render failed: {err}"),
            Self::Format(_) => f.write_str("render output could not be written"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<CanvasError> for RenderError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

impl From<fmt::Error> for RenderError {
    fn from(err: fmt::Error) -> Self {
        Self::Format(err)
    }
}
