//! Benchmarks for grid construction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nash_grid::compute_ev_grid;
use nash_grid::games::threshold::win_prob;

fn win_prob_benchmark(c: &mut Criterion) {
    c.bench_function("win_prob_single", |b| {
        b.iter(|| win_prob(black_box(0.35), black_box(0.6)))
    });
}

fn default_grid_benchmark(c: &mut Criterion) {
    c.bench_function("grid_20x20", |b| {
        b.iter(|| compute_ev_grid(black_box(1.0), black_box(1.0), 0.05))
    });
}

fn fine_grid_benchmark(c: &mut Criterion) {
    c.bench_function("grid_100x100", |b| {
        b.iter(|| compute_ev_grid(black_box(3.0), black_box(2.0), 0.01))
    });
}

criterion_group!(
    benches,
    win_prob_benchmark,
    default_grid_benchmark,
    fine_grid_benchmark
);
criterion_main!(benches);
