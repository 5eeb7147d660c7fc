//! Criterion benchmarks for the progression simulator.
//!
//! Two benchmark groups:
//! - `advance`: fresh start with budgets from one batch to full completion
//! - `min_resource`: point targets from one stage to the lifetime cap

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use growth_core::position::Position;
use growth_core::progression::{advance, min_resource_to_reach};
use growth_core::test_utils::*;
use std::hint::black_box;

fn bench_advance(c: &mut Criterion) {
    let table = standard();
    let mut group = c.benchmark_group("advance");

    for budget in [30u32, 3_000, 15_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(budget), &budget, |b, &budget| {
            b.iter(|| advance(&table, black_box(&Position::start()), black_box(budget)).unwrap());
        });
    }

    // Late start: most rewards come from the credit pass.
    let late = at_stage(4, 3, 0);
    group.bench_function("late_start_15000", |b| {
        b.iter(|| advance(&table, black_box(&late), black_box(15_000)).unwrap());
    });

    group.finish();
}

fn bench_min_resource(c: &mut Criterion) {
    let table = standard();
    let mut group = c.benchmark_group("min_resource");

    for target in [500u32, 4_000, 16_000] {
        group.bench_with_input(BenchmarkId::from_parameter(target), &target, |b, &target| {
            b.iter(|| {
                min_resource_to_reach(&table, black_box(&Position::start()), black_box(target))
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_advance, bench_min_resource);
criterion_main!(benches);
