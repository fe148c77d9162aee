//! Criterion micro-benchmarks for the replay driver.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use riffle_bench::{doubling_growth, mixed_workload, push_fill};
use riffle_replay::{replay, Driver, ReplayConfig};

/// Benchmark: decode and apply a push-only script.
fn bench_push_fill(c: &mut Criterion) {
    let input = push_fill(1_000).encode();

    c.bench_function("replay_push_fill_1k", |b| {
        b.iter(|| {
            let report = replay(black_box(&input));
            black_box(report);
        });
    });
}

/// Benchmark: a mixed workload exercising every operation kind.
fn bench_mixed_workload(c: &mut Criterion) {
    let input = mixed_workload(42, 1_000).encode();

    c.bench_function("replay_mixed_1k", |b| {
        b.iter(|| {
            let report = replay(black_box(&input));
            black_box(report);
        });
    });
}

/// Benchmark: self-concatenation growth, where almost all time is
/// backend tree surgery rather than decoding.
fn bench_doubling_growth(c: &mut Criterion) {
    let input = doubling_growth(8, 20).encode();

    c.bench_function("replay_growth_2^23", |b| {
        b.iter(|| {
            let report = replay(black_box(&input));
            black_box(report);
        });
    });
}

/// Benchmark: the same mixed workload with trace rendering on.
fn bench_traced_replay(c: &mut Criterion) {
    let input = mixed_workload(42, 1_000).encode();
    let config = ReplayConfig { trace_enabled: true, ..Default::default() };
    let driver = Driver::new(config).expect("default-derived config is valid");

    c.bench_function("replay_mixed_1k_traced", |b| {
        b.iter(|| {
            let report = driver.run(black_box(&input));
            black_box(report);
        });
    });
}

criterion_group!(
    benches,
    bench_push_fill,
    bench_mixed_workload,
    bench_doubling_growth,
    bench_traced_replay
);
criterion_main!(benches);
