//! Criterion benchmarks for the standard normal approximations.
//!
//! Measures single evaluations and a dense sweep across the real line.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pricer_core::math::distributions::{norm_cdf, norm_pdf};

/// Benchmark single CDF/PDF evaluations.
fn bench_single_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_single");

    group.bench_function("norm_cdf", |b| b.iter(|| norm_cdf(black_box(0.4_f64))));
    group.bench_function("norm_pdf", |b| b.iter(|| norm_pdf(black_box(0.4_f64))));

    group.finish();
}

/// Benchmark a sweep of 1000 points on [-5, 5].
fn bench_sweep(c: &mut Criterion) {
    let xs: Vec<f64> = (0..1000).map(|i| -5.0 + i as f64 * 0.01).collect();

    c.bench_function("norm_cdf_sweep_1000", |b| {
        b.iter(|| xs.iter().map(|&x| norm_cdf(black_box(x))).sum::<f64>())
    });
}

criterion_group!(benches, bench_single_evaluation, bench_sweep);
criterion_main!(benches);
