// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! SVG node-link rendering.
//!
//! The static document shows the settled state of a [`Transition`]. With
//! [`SvgOptions::animate`] every element, exiting ones included, is emitted at its start
//! position with SMIL animations towards its end position.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::text::{svg_num, xml_escape};
use super::transition::{EdgeTransition, NodeTransition, Phase, Transition};
use super::RenderError;
use crate::layout::{LayoutDirection, Point};
use crate::model::NodeState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self { top: 50.0, right: 120.0, bottom: 50.0, left: 120.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SvgOptions {
    /// Minimum document width; grows when the tree is wider.
    pub width: f64,
    pub margin: Margins,
    pub node_radius: f64,
    /// Distance between a node centre and its label.
    pub label_offset: f64,
    pub fill: SmolStr,
    /// Fill of nodes whose children are hidden.
    pub collapsed_fill: SmolStr,
    pub stroke: SmolStr,
    pub link_stroke: SmolStr,
    pub link_opacity: f64,
    pub link_width: f64,
    /// Document background; also the halo colour behind labels.
    pub background: SmolStr,
    pub font: SmolStr,
    pub animate: bool,
    pub duration_ms: u64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 960.0,
            margin: Margins::default(),
            node_radius: 6.0,
            label_offset: 8.0,
            fill: SmolStr::new_static("#60a5fa"),
            collapsed_fill: SmolStr::new_static("#3e8ed0"),
            stroke: SmolStr::new_static("#555"),
            link_stroke: SmolStr::new_static("#555"),
            link_opacity: 0.4,
            link_width: 1.5,
            background: SmolStr::new_static("#f9fafb"),
            font: SmolStr::new_static("12px sans-serif"),
            animate: false,
            duration_ms: 250,
        }
    }
}

/// `(min_x, min_y, width, height)` of the document.
pub fn view_box(transition: &Transition, options: &SvgOptions) -> (f64, f64, f64, f64) {
    let b = transition.bounds();
    let m = &options.margin;
    match transition.options().direction {
        LayoutDirection::LeftToRight => (
            -m.left,
            b.min_y - m.top,
            options.width.max(b.max_x + m.left + m.right),
            b.height() + m.top + m.bottom,
        ),
        LayoutDirection::TopToBottom => (
            b.min_x - m.left,
            -m.top,
            options.width.max(b.width() + m.left + m.right),
            b.max_y + m.top + m.bottom,
        ),
    }
}

/// Cubic link from `s` to `t` that leaves and enters along the depth axis.
pub fn link_path(direction: LayoutDirection, s: Point, t: Point) -> String {
    match direction {
        LayoutDirection::LeftToRight => {
            let mx = svg_num((s.x() + t.x()) / 2.0);
            format!(
                "M{},{}C{mx},{} {mx},{} {},{}",
                svg_num(s.x()),
                svg_num(s.y()),
                svg_num(s.y()),
                svg_num(t.y()),
                svg_num(t.x()),
                svg_num(t.y())
            )
        }
        LayoutDirection::TopToBottom => {
            let my = svg_num((s.y() + t.y()) / 2.0);
            format!(
                "M{},{}C{},{my} {},{my} {},{}",
                svg_num(s.x()),
                svg_num(s.y()),
                svg_num(s.x()),
                svg_num(t.x()),
                svg_num(t.x()),
                svg_num(t.y())
            )
        }
    }
}

pub fn render_svg(transition: &Transition, options: &SvgOptions) -> Result<String, RenderError> {
    let mut out = String::new();
    let (vx, vy, vw, vh) = view_box(transition, options);
    let direction = transition.options().direction;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{} {} {w} {h}" style="max-width: 100%; height: auto; font: {}; background: {}; user-select: none;">"#,
        svg_num(vx),
        svg_num(vy),
        xml_escape(&options.font),
        xml_escape(&options.background),
        w = svg_num(vw),
        h = svg_num(vh),
    )?;

    writeln!(
        out,
        r#"<g class="links" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}">"#,
        xml_escape(&options.link_stroke),
        svg_num(options.link_opacity),
        svg_num(options.link_width),
    )?;
    for edge in transition.edges() {
        if options.animate {
            write_animated_edge(&mut out, direction, edge, options)?;
        } else if edge.phase() != Phase::Exit {
            let (s, t) = edge.to();
            writeln!(
                out,
                r#"<path data-id="{}" d="{}"/>"#,
                edge.child(),
                link_path(direction, s, t)
            )?;
        }
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="nodes" cursor="pointer" pointer-events="all">"#)?;
    for node in transition.nodes() {
        if !options.animate && node.phase() == Phase::Exit {
            continue;
        }
        write_node(&mut out, node, options)?;
    }
    writeln!(out, "</g>")?;
    out.push_str("</svg>\n");

    tracing::debug!(
        nodes = transition.settled_nodes().count(),
        bytes = out.len(),
        animate = options.animate,
        "rendered svg"
    );
    Ok(out)
}

fn write_animated_edge(
    out: &mut String,
    direction: LayoutDirection,
    edge: &EdgeTransition,
    options: &SvgOptions,
) -> Result<(), RenderError> {
    let from = link_path(direction, edge.from().0, edge.from().1);
    let to = link_path(direction, edge.to().0, edge.to().1);
    let dur = options.duration_ms;
    writeln!(out, r#"<path data-id="{}" data-phase="{}" d="{from}">"#, edge.child(), phase_name(edge.phase()))?;
    writeln!(
        out,
        r#"<animate attributeName="d" from="{from}" to="{to}" dur="{dur}ms" fill="freeze"/>"#
    )?;
    if edge.phase() != Phase::Update {
        let (a, b) = fade(edge.phase());
        writeln!(
            out,
            r#"<animate attributeName="opacity" from="{a}" to="{b}" dur="{dur}ms" fill="freeze"/>"#
        )?;
    }
    writeln!(out, "</path>")?;
    Ok(())
}

fn write_node(out: &mut String, node: &NodeTransition, options: &SvgOptions) -> Result<(), RenderError> {
    let at = if options.animate { node.from() } else { node.to() };
    let fill = match node.state() {
        NodeState::Collapsed => &options.collapsed_fill,
        NodeState::Expanded | NodeState::Leaf => &options.fill,
    };
    let (x, anchor) = match node.state() {
        NodeState::Leaf => (options.label_offset, "start"),
        NodeState::Expanded | NodeState::Collapsed => (-options.label_offset, "end"),
    };
    let label = match node.icon() {
        Some(icon) => xml_escape(&format!("{icon} {}", node.label())),
        None => xml_escape(node.label()),
    };

    write!(
        out,
        r#"<g class="node" data-id="{}" data-state="{}" transform="translate({},{})""#,
        node.id(),
        node.state(),
        svg_num(at.x()),
        svg_num(at.y()),
    )?;
    if options.animate {
        writeln!(out, r#" data-phase="{}">"#, phase_name(node.phase()))?;
        let dur = options.duration_ms;
        writeln!(
            out,
            r#"<animateTransform attributeName="transform" type="translate" from="{},{}" to="{},{}" dur="{dur}ms" fill="freeze"/>"#,
            svg_num(node.from().x()),
            svg_num(node.from().y()),
            svg_num(node.to().x()),
            svg_num(node.to().y()),
        )?;
        if node.phase() != Phase::Update {
            let (a, b) = fade(node.phase());
            writeln!(
                out,
                r#"<animate attributeName="opacity" from="{a}" to="{b}" dur="{dur}ms" fill="freeze"/>"#
            )?;
        }
    } else {
        writeln!(out, ">")?;
    }
    writeln!(
        out,
        r#"<circle r="{}" fill="{}" stroke="{}" stroke-width="1.5"/>"#,
        svg_num(options.node_radius),
        xml_escape(fill),
        xml_escape(&options.stroke),
    )?;
    writeln!(
        out,
        r#"<text dy="0.31em" x="{x}" text-anchor="{anchor}" stroke="{}" stroke-width="3" stroke-linejoin="round">{label}</text>"#,
        xml_escape(&options.background),
        x = svg_num(x),
    )?;
    writeln!(out, r#"<text dy="0.31em" x="{x}" text-anchor="{anchor}">{label}</text>"#, x = svg_num(x))?;
    if let Some(subtitle) = node.subtitle() {
        let subtitle = xml_escape(subtitle);
        writeln!(
            out,
            r#"<text class="subtitle" dy="1.4em" x="{x}" text-anchor="{anchor}" font-size="0.85em" stroke="{}" stroke-width="3" stroke-linejoin="round">{subtitle}</text>"#,
            xml_escape(&options.background),
            x = svg_num(x),
        )?;
        writeln!(
            out,
            r#"<text class="subtitle" dy="1.4em" x="{x}" text-anchor="{anchor}" font-size="0.85em" fill-opacity="0.7">{subtitle}</text>"#,
            x = svg_num(x),
        )?;
    }
    writeln!(out, "</g>")?;
    Ok(())
}

fn fade(phase: Phase) -> (u8, u8) {
    match phase {
        Phase::Enter => (0, 1),
        Phase::Update => (1, 1),
        Phase::Exit => (1, 0),
    }
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Enter => "enter",
        Phase::Update => "update",
        Phase::Exit => "exit",
    }
}
