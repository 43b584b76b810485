//! Criterion benchmarks for the estimation kernels.
//!
//! Compares the sequential baseline against fork-join runs at increasing
//! worker counts to characterise parallel scaling of both pipelines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use montequad_core::{
    AreaEstimator, IntegrationConfig, MonteCarloConfig, RiemannIntegrator, WorkerPool,
};

fn bench_riemann_scaling(c: &mut Criterion) {
    let config = IntegrationConfig::builder()
        .bounds(1.0, 10.0)
        .intervals(1_000_000)
        .build()
        .unwrap();
    let integrator = RiemannIntegrator::new(config);

    let mut group = c.benchmark_group("riemann");
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(integrator.sequential()));
    });
    for workers in [1, 2, 4] {
        let pool = WorkerPool::new(workers).unwrap();
        group.bench_with_input(BenchmarkId::new("parallel", workers), &pool, |b, pool| {
            b.iter(|| black_box(integrator.parallel(pool)));
        });
    }
    group.finish();
}

fn bench_mandelbrot_scaling(c: &mut Criterion) {
    let config = MonteCarloConfig::builder()
        .points(200_000)
        .max_iterations(250)
        .seed(42)
        .build()
        .unwrap();
    let estimator = AreaEstimator::new(config);

    let mut group = c.benchmark_group("mandelbrot_area");
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(estimator.sequential(0)));
    });
    for workers in [1, 2, 4] {
        let pool = WorkerPool::new(workers).unwrap();
        group.bench_with_input(BenchmarkId::new("parallel", workers), &pool, |b, pool| {
            b.iter(|| black_box(estimator.parallel(pool, 0)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_riemann_scaling, bench_mandelbrot_scaling);
criterion_main!(benches);
