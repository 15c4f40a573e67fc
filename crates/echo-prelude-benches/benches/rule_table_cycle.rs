// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: one full rule-table cycle (activate, support, read, reset).
//!
//! The table is built once outside the timed loop and reused across
//! iterations, which is how an evaluation loop drives it. Throughput
//! "elements" are activation calls per cycle; half of them are repeats, so
//! the dedup path is measured alongside first activations.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use echo_prelude::RuleTable;
use echo_prelude_benches::stride_indices;
use std::time::Duration;

fn bench_rule_table_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_table_cycle");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(6))
        .sample_size(60);

    for &universe in &[1_024usize, 65_536] {
        let active_per_cycle = universe / 4;
        let calls: Vec<usize> = stride_indices(universe, active_per_cycle)
            .chain(stride_indices(universe, active_per_cycle))
            .collect();
        group.throughput(Throughput::Elements(calls.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(universe), &calls, |b, calls| {
            let mut table = RuleTable::new(universe);
            b.iter(|| {
                for &i in calls {
                    black_box(&table.add_active(black_box(i)));
                }
                black_box(&table.add_support(black_box(calls[0])));
                black_box(table.active_indices().len());
                black_box(table.reset_cycle())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rule_table_cycle);
criterion_main!(benches);
