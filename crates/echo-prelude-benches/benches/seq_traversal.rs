// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: cursor traversal over materialized and deferred sequences.
//!
//! Construction is excluded from timing for the materialized case. The
//! deferred case rebuilds per iteration (`BatchSize::SmallInput`) so each
//! measurement forces every thunk once; building it only allocates the head.
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use echo_prelude::Seq;

fn deferred_range(from: u64, to: u64) -> Seq<u64> {
    if from == to {
        return Seq::empty();
    }
    Seq::cons(from, Seq::defer(move || deferred_range(from + 1, to)))
}

fn bench_seq_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("seq_traversal");
    for &n in &[1_000u64, 100_000] {
        group.throughput(Throughput::Elements(n));

        let materialized: Seq<u64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::new("materialized", n), &materialized, |b, seq| {
            b.iter(|| black_box(seq.iter().sum::<u64>()));
        });

        group.bench_function(BenchmarkId::new("deferred", n), |b| {
            b.iter_batched(
                || deferred_range(0, n),
                |seq| black_box(seq.iter().sum::<u64>()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_seq_traversal);
criterion_main!(benches);
