// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use mindtree::format::parse_mind_map;
use mindtree::layout::{layout_tree, LayoutDirection, LayoutOptions};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `layout.tidy`, `layout.tidy_tb`, `parse.json`
// - Case IDs are `fixtures::Case::id()` values.
fn benches_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout.tidy");
    for case in fixtures::Case::ALL {
        let tree = fixtures::tree(case);
        let options = LayoutOptions::default();
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_function(case.id(), move |b| {
            b.iter(|| black_box(layout_tree(black_box(&tree), black_box(&options)).len()))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("layout.tidy_tb");
    for case in [fixtures::Case::Small, fixtures::Case::Wide] {
        let tree = fixtures::tree(case);
        let options =
            LayoutOptions { direction: LayoutDirection::TopToBottom, ..LayoutOptions::default() };
        group.bench_function(case.id(), move |b| {
            b.iter(|| black_box(layout_tree(black_box(&tree), black_box(&options)).len()))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("parse.json");
    for case in fixtures::Case::ALL {
        let src = fixtures::json(case);
        group.throughput(Throughput::Bytes(src.len() as u64));
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let outline = parse_mind_map(black_box(&src)).expect("parse_mind_map");
                black_box(outline.len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_layout
}
criterion_main!(benches);
