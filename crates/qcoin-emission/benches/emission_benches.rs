//! Criterion benchmarks for the supply simulator.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use qcoin_emission::schedule::total_emission;
use qcoin_emission::{SimulationParams, simulate};

fn bench_simulate_reference(c: &mut Criterion) {
    let params = SimulationParams::default();
    c.bench_function("simulate_reference", |b| {
        b.iter(|| simulate(black_box(&params)).unwrap())
    });
}

fn bench_simulate_long_horizon(c: &mut Criterion) {
    // Slow issuance drives the run to the horizon bound.
    let params = SimulationParams {
        blocks_per_year: 100,
        max_years: 200,
        ..Default::default()
    };
    c.bench_function("simulate_truncated_horizon", |b| {
        b.iter(|| simulate(black_box(&params)).unwrap())
    });
}

fn bench_total_emission(c: &mut Criterion) {
    c.bench_function("total_emission", |b| {
        b.iter(|| total_emission(black_box(5_000_000_000), black_box(210_000)))
    });
}

criterion_group!(
    benches,
    bench_simulate_reference,
    bench_simulate_long_horizon,
    bench_total_emission
);
criterion_main!(benches);
