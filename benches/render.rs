// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mindtree::layout::{layout_tree, LayoutOptions};
use mindtree::render::{render_svg, render_unicode, SvgOptions, Transition, UnicodeOptions};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.transition`, `render.svg`, `render.unicode`
// - Case IDs are `fixtures::Case::id()` values.
fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.transition");
    for case in fixtures::Case::ALL {
        let mut tree = fixtures::tree(case);
        let options = LayoutOptions::default();
        let before = layout_tree(&tree, &options).positions().clone();
        let source = fixtures::inner_nodes(&tree).get(1).copied().unwrap_or(tree.root());
        tree.toggle(source);
        let after = layout_tree(&tree, &options);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let t = Transition::between(black_box(&tree), &before, black_box(&after), source);
                black_box(t.nodes().len())
            })
        });
    }
    group.finish();

    let transitions = fixtures::Case::ALL.map(|case| {
        let tree = fixtures::tree(case);
        let layout = layout_tree(&tree, &LayoutOptions::default());
        (case, Transition::between(&tree, &BTreeMap::new(), &layout, tree.root()))
    });

    let mut group = c.benchmark_group("render.svg");
    let svg_options = SvgOptions::default();
    for (case, transition) in &transitions {
        group.bench_function(case.id(), |b| {
            b.iter(|| {
                let svg = render_svg(black_box(transition), &svg_options).expect("render_svg");
                black_box(svg.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.unicode");
    let unicode_options = UnicodeOptions::default();
    for (case, transition) in &transitions {
        group.bench_function(case.id(), |b| {
            b.iter(|| {
                let text =
                    render_unicode(black_box(transition), &unicode_options).expect("render_unicode");
                black_box(text.len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
