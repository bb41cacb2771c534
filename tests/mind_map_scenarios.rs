// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::convert::Infallible;
use std::fs;
use std::path::{Path, PathBuf};

use mindtree::format::{InvalidTreeInput, MindMapParseError};
use mindtree::layout::{LayoutDirection, LayoutOptions, Point};
use mindtree::model::{NodeId, NodeState};
use mindtree::render::{Phase, SvgOptions, Transition, UnicodeOptions};
use mindtree::view::{RenderSurface, SvgSurface, TreeView, TreeViewError, UnicodeSurface};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("mind_maps")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

fn text_view(name: &str) -> TreeView<UnicodeSurface> {
    TreeView::from_json_str(
        &read_fixture(name),
        LayoutOptions::default(),
        UnicodeSurface::new(UnicodeOptions::default()),
    )
    .unwrap_or_else(|err| panic!("expected {name} to build, got error: {err}"))
}

fn find(view: &TreeView<UnicodeSurface>, label: &str) -> NodeId {
    view.tree().find_by_label(label).unwrap_or_else(|| panic!("no node labelled {label:?}"))
}

#[test]
fn root_a_b_b1_collapse_and_expand_round_trip() {
    let mut view = text_view("root_a_b_b1.json");
    let initial = view.surface().text().to_owned();
    assert_eq!(view.layout().len(), 4);
    assert_eq!(view.tree().visible_edges().len(), 3);

    let b = find(&view, "B");
    assert_eq!(view.toggle(b).expect("toggle"), Some(NodeState::Collapsed));
    assert_eq!(view.layout().len(), 3);
    assert_eq!(view.tree().visible_edges().len(), 2);
    assert_eq!(view.transition().nodes_in(Phase::Exit).count(), 1);
    assert!(view.surface().text().contains("⊕ B"));
    assert!(!view.surface().text().contains("B1"));

    assert_eq!(view.toggle(b).expect("toggle"), Some(NodeState::Expanded));
    assert_eq!(view.layout().len(), 4);
    assert_eq!(view.transition().nodes_in(Phase::Enter).count(), 1);
    assert_eq!(view.surface().text(), initial);
}

#[test]
fn flat_and_nested_forms_build_the_same_view() {
    let nested = text_view("root_a_b_b1.json");
    let flat = text_view("flat_graph.json");
    let placed = |view: &TreeView<UnicodeSurface>| {
        view.tree()
            .preorder()
            .into_iter()
            .map(|id| {
                let label = view.tree().node(id).expect("node").label().to_owned();
                (label, view.layout().position(id))
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(placed(&nested), placed(&flat));
    assert_eq!(nested.surface().text(), flat.surface().text());
}

#[test]
fn realistic_map_keeps_siblings_apart_and_parents_centred() {
    let mut view = text_view("benefits.json");
    assert_eq!(view.tree().len(), 14);

    for step in ["Salud", "Talleres", "Becas", "Salud"] {
        let id = find(&view, step);
        view.toggle(id).expect("toggle");

        let layout = view.layout();
        for id in view.tree().visible_nodes() {
            let node = view.tree().node(id).expect("node");
            let cross = layout.cross(id).expect("visible node is placed");
            let kids = node.children();
            if !kids.is_empty() {
                let mean = kids.iter().map(|k| layout.cross(*k).expect("child")).sum::<f64>()
                    / kids.len() as f64;
                assert!((cross - mean).abs() < 1e-9, "{} not centred after {step}", node.label());
            }
            for pair in kids.windows(2) {
                let gap = layout.cross(pair[1]).expect("b") - layout.cross(pair[0]).expect("a");
                assert!(gap >= layout.options().node_spacing - 1e-9);
            }
        }
    }
}

#[test]
fn svg_document_reflects_collapse_state() {
    let src = read_fixture("benefits.json");
    let mut view =
        TreeView::from_json_str(&src, LayoutOptions::default(), SvgSurface::new(SvgOptions::default()))
            .expect("view");
    let salud = view.tree().find_by_label("Salud").expect("Salud");
    view.toggle(salud).expect("toggle");

    let svg = view.surface().document();
    assert_eq!(svg.matches("<circle ").count(), 11);
    assert!(svg.contains(&format!(r#"data-id="{salud}" data-state="collapsed""#)));
    assert!(svg.contains(">Deportes &amp; cultura</text>"));
    assert!(!svg.contains("Seguro médico"));
}

#[test]
fn top_to_bottom_places_depth_downwards() {
    let src = read_fixture("root_a_b_b1.json");
    let options = LayoutOptions { direction: LayoutDirection::TopToBottom, ..LayoutOptions::default() };
    let view = TreeView::from_json_str(&src, options, UnicodeSurface::new(UnicodeOptions::default()))
        .expect("view");
    let b1 = view.tree().find_by_label("B1").expect("B1");
    assert_eq!(view.layout().position(b1), Some(Point::new(10.0, 360.0)));
    assert!(view.surface().text().starts_with("    ● Root"));
}

#[test]
fn malformed_inputs_are_rejected() {
    let err = TreeView::from_json_str(
        &read_fixture("missing_name.json"),
        LayoutOptions::default(),
        UnicodeSurface::default(),
    )
    .expect_err("missing name");
    assert!(matches!(
        err,
        TreeViewError::Input(MindMapParseError::Invalid(InvalidTreeInput::MissingLabel { ref path }))
            if path == "/children/0"
    ));

    let err = TreeView::from_json_str(
        &read_fixture("flat_cycle.json"),
        LayoutOptions::default(),
        UnicodeSurface::default(),
    )
    .expect_err("cycle");
    match err {
        TreeViewError::Input(MindMapParseError::Invalid(InvalidTreeInput::CycleDetected { keys })) => {
            assert_eq!(keys, vec!["x".to_owned(), "y".to_owned()]);
        }
        other => panic!("expected a cycle, got {other}"),
    }
}

/// Counts draws without producing output.
#[derive(Default)]
struct CountingSurface {
    drawn: usize,
}

impl RenderSurface for CountingSurface {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn draw(&mut self, transition: &Transition) -> Result<(), Infallible> {
        self.drawn = transition.nodes().len();
        Ok(())
    }
}

#[test]
fn hundred_thousand_levels_build_and_lay_out_on_the_default_stack() {
    let depth = 100_000;
    let mut src = String::with_capacity(depth * 32);
    for level in 0..depth {
        src.push_str(&format!(r#"{{"name":"l{level}","children":["#));
    }
    src.push_str(r#"{"name":"leaf"}"#);
    for _ in 0..depth {
        src.push_str("]}");
    }

    let mut view = TreeView::from_json_str(&src, LayoutOptions::default(), CountingSurface::default())
        .expect("deep input builds");
    let leaf = view.tree().find_by_label("leaf").expect("leaf");
    assert_eq!(view.layout().len(), depth + 1);
    assert_eq!(view.layout().depth(leaf), Some(depth));
    assert_eq!(view.surface().drawn, depth + 1);

    let top = view.tree().find_by_label("l1").expect("l1");
    assert_eq!(view.toggle(top).expect("toggle"), Some(NodeState::Collapsed));
    assert_eq!(view.layout().len(), 2);
}
