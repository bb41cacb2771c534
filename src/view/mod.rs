// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The collapsible tree view: tree state, layout, and a bound render surface.
//!
//! Every effective change (construction, toggle, new layout options) runs the same pass:
//! lay out the visible nodes, diff against the positions drawn last time, clear the surface and
//! draw the resulting [`Transition`].

use std::collections::BTreeMap;
use std::fmt;

use crate::format::{outline_from_value, parse_mind_map, MindMapParseError};
use crate::layout::{layout_tree, LayoutOptions, Point, TreeLayout};
use crate::model::{IdAllocator, MindTree, NodeId, NodeState, Outline};
use crate::render::{
    render_svg, render_unicode_annotated, AnnotatedRender, RenderError, SvgOptions, Transition,
    UnicodeOptions,
};

/// Where a [`TreeView`] draws.
pub trait RenderSurface {
    type Error: std::error::Error + 'static;

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn draw(&mut self, transition: &Transition) -> Result<(), Self::Error>;
}

/// Keeps the latest SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    options: SvgOptions,
    document: String,
}

impl SvgSurface {
    pub fn new(options: SvgOptions) -> Self {
        Self { options, document: String::new() }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn options(&self) -> &SvgOptions {
        &self.options
    }
}

impl RenderSurface for SvgSurface {
    type Error = RenderError;

    fn clear(&mut self) -> Result<(), RenderError> {
        self.document.clear();
        Ok(())
    }

    fn draw(&mut self, transition: &Transition) -> Result<(), RenderError> {
        self.document = render_svg(transition, &self.options)?;
        Ok(())
    }
}

/// Keeps the latest Unicode rendering and its per-node cell spans.
#[derive(Debug, Clone, Default)]
pub struct UnicodeSurface {
    options: UnicodeOptions,
    rendered: Option<AnnotatedRender>,
}

impl UnicodeSurface {
    pub fn new(options: UnicodeOptions) -> Self {
        Self { options, rendered: None }
    }

    pub fn text(&self) -> &str {
        self.rendered.as_ref().map_or("", |r| r.text.as_str())
    }

    pub fn rendered(&self) -> Option<&AnnotatedRender> {
        self.rendered.as_ref()
    }
}

impl RenderSurface for UnicodeSurface {
    type Error = RenderError;

    fn clear(&mut self) -> Result<(), RenderError> {
        self.rendered = None;
        Ok(())
    }

    fn draw(&mut self, transition: &Transition) -> Result<(), RenderError> {
        self.rendered = Some(render_unicode_annotated(transition, &self.options)?);
        Ok(())
    }
}

#[derive(Debug)]
pub enum TreeViewError<E> {
    Input(MindMapParseError),
    Surface(E),
}

impl<E: fmt::Display> fmt::Display for TreeViewError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(err) => err.fmt(f),
            Self::Surface(err) => write!(f, "render surface failed: {err}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for TreeViewError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl<E> From<MindMapParseError> for TreeViewError<E> {
    fn from(err: MindMapParseError) -> Self {
        Self::Input(err)
    }
}

pub type ToggleListener = Box<dyn FnMut(NodeId, NodeState) + Send>;

pub struct TreeView<S: RenderSurface> {
    tree: MindTree,
    options: LayoutOptions,
    layout: TreeLayout,
    transition: Transition,
    /// Positions as last drawn; the next transition starts from here.
    previous: BTreeMap<NodeId, Point>,
    surface: S,
    listener: Option<ToggleListener>,
}

impl<S: RenderSurface> TreeView<S> {
    /// Parses mind-map JSON (nested or flat form), builds a fully expanded view and draws it.
    pub fn from_json_str(
        json: &str,
        options: LayoutOptions,
        surface: S,
    ) -> Result<Self, TreeViewError<S::Error>> {
        let outline = parse_mind_map(json)?;
        Self::from_outline(&outline, options, surface).map_err(TreeViewError::Surface)
    }

    /// Same as [`TreeView::from_json_str`] for an already parsed JSON value.
    pub fn build(
        value: &serde_json::Value,
        options: LayoutOptions,
        surface: S,
    ) -> Result<Self, TreeViewError<S::Error>> {
        let outline = outline_from_value(value).map_err(MindMapParseError::Invalid)?;
        Self::from_outline(&outline, options, surface).map_err(TreeViewError::Surface)
    }

    pub fn from_outline(
        outline: &Outline,
        options: LayoutOptions,
        mut surface: S,
    ) -> Result<Self, S::Error> {
        let tree = MindTree::from_outline(outline, &mut IdAllocator::new());
        let layout = layout_tree(&tree, &options);
        let transition = Transition::between(&tree, &BTreeMap::new(), &layout, tree.root());
        surface.clear()?;
        surface.draw(&transition)?;
        let previous = transition.settled_positions();
        tracing::debug!(nodes = tree.len(), "tree view built");
        Ok(Self { tree, options, layout, transition, previous, surface, listener: None })
    }

    /// Registers the callback invoked after every effective toggle.
    pub fn on_toggle(&mut self, listener: impl FnMut(NodeId, NodeState) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Expands a collapsed node or collapses an expanded one, then re-lays out and redraws.
    ///
    /// Unknown ids and leaves change nothing and draw nothing; they return `Ok(None)`. Hidden
    /// nodes toggle like visible ones. When the surface fails, the node keeps its previous state
    /// and the listener is not called.
    pub fn toggle(&mut self, id: NodeId) -> Result<Option<NodeState>, S::Error> {
        let Some(state) = self.tree.toggle(id) else {
            tracing::debug!(%id, "toggle ignored: unknown node or leaf");
            return Ok(None);
        };
        if let Err(err) = self.relayout(id) {
            self.tree.toggle(id);
            tracing::warn!(%id, "redraw failed; toggle rolled back");
            return Err(err);
        }
        tracing::debug!(%id, %state, "toggled");
        if let Some(listener) = self.listener.as_mut() {
            listener(id, state);
        }
        Ok(Some(state))
    }

    /// Re-lays out with new options and redraws from the root. The old options stay in effect
    /// when the surface fails.
    pub fn set_layout_options(&mut self, options: LayoutOptions) -> Result<(), S::Error> {
        let old = std::mem::replace(&mut self.options, options);
        let result = self.relayout(self.tree.root());
        if result.is_err() {
            self.options = old;
        }
        result
    }

    pub fn tree(&self) -> &MindTree {
        &self.tree
    }

    pub fn layout(&self) -> &TreeLayout {
        &self.layout
    }

    pub fn layout_options(&self) -> &LayoutOptions {
        &self.options
    }

    /// The transition the surface last drew successfully.
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn previous_positions(&self) -> &BTreeMap<NodeId, Point> {
        &self.previous
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Visible node whose centre is within `radius` of `point`.
    pub fn node_at(&self, point: Point, radius: f64) -> Option<NodeId> {
        self.layout.node_at(point, radius)
    }

    /// Draws the current tree state; layout, transition and previous positions are only
    /// replaced once the surface accepted the new frame.
    fn relayout(&mut self, source: NodeId) -> Result<(), S::Error> {
        let layout = layout_tree(&self.tree, &self.options);
        let transition = Transition::between(&self.tree, &self.previous, &layout, source);
        self.surface.clear()?;
        self.surface.draw(&transition)?;
        self.previous = transition.settled_positions();
        self.layout = layout;
        self.transition = transition;
        Ok(())
    }
}

impl<S: RenderSurface + fmt::Debug> fmt::Debug for TreeView<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeView")
            .field("nodes", &self.tree.len())
            .field("visible", &self.layout.len())
            .field("options", &self.options)
            .field("surface", &self.surface)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
