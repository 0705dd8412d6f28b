// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use recipe_tree::layout::{LayoutScale, LayoutStrategy};
use recipe_tree::tree::build_full_tree;

mod fixtures;
mod profiler;

use fixtures::Case;

// Benchmark identity (keep stable):
// - Group names in this file: `tree.build`, `tree.layout`
// - Case IDs must remain stable across refactors so results stay comparable.
fn cases() -> [(&'static str, Case); 4] {
    [
        ("ladder_32", Case::Ladder(32)),
        ("ladder_512", Case::Ladder(512)),
        ("balanced_8", Case::Balanced(8)),
        ("doubling_12", Case::Doubling(12)),
    ]
}

fn benches_tree(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("tree.build");

        for (case_id, case) in cases() {
            let steps = fixtures::fixture(case);
            group.throughput(Throughput::Elements(steps.len() as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let tree = build_full_tree(black_box(&steps)).expect("build");
                    black_box(tree.len())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("tree.layout");
        let scale = LayoutScale::default();

        for (case_id, case) in cases() {
            let tree = build_full_tree(&fixtures::fixture(case)).expect("build");
            group.throughput(Throughput::Elements(tree.len() as u64));
            for strategy in [LayoutStrategy::Forward, LayoutStrategy::Deep] {
                let tree = tree.clone();
                let id = format!("{case_id}/{strategy:?}").to_lowercase();
                group.bench_function(id, move |b| {
                    b.iter(|| {
                        let layout = strategy.place(black_box(&tree), &scale);
                        black_box(layout.positions().len())
                    })
                });
            }
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_tree
}
criterion_main!(benches);
