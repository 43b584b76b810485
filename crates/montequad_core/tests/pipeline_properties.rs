//! End-to-end properties of both estimation pipelines through the public API.

use approx::assert_relative_eq;
use montequad_core::{
    run_area_experiment, run_integration_experiment, ConfigError, IntegrationConfig,
    MonteCarloConfig, RiemannIntegrator, WorkerPool,
};

#[test]
fn integration_rejects_zero_lower_bound() {
    let result = IntegrationConfig::builder()
        .bounds(0.0, 10.0)
        .intervals(100)
        .build();
    assert!(matches!(result, Err(ConfigError::NonPositiveBound(_))));
}

#[test]
fn integration_rejects_inverted_bounds() {
    let result = IntegrationConfig::builder()
        .bounds(5.0, 1.0)
        .intervals(100)
        .build();
    assert!(matches!(result, Err(ConfigError::EmptyInterval { .. })));
}

#[test]
fn integration_rejects_zero_intervals() {
    let result = IntegrationConfig::builder()
        .bounds(1.0, 10.0)
        .intervals(0)
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidSampleCount)));
}

#[test]
fn integral_of_log_over_x_from_one_to_e_is_half() {
    let config = IntegrationConfig::builder()
        .bounds(1.0, std::f64::consts::E)
        .intervals(1_000_000)
        .build()
        .unwrap();
    let integrator = RiemannIntegrator::new(config);

    let sequential = integrator.sequential();
    assert!((sequential - 0.5).abs() < 1e-3);

    let pool = WorkerPool::new(4).unwrap();
    let parallel = integrator.parallel(&pool);
    assert!((parallel - 0.5).abs() < 1e-3);
}

#[test]
fn integration_experiment_is_worker_count_invariant() {
    let config = IntegrationConfig::builder()
        .bounds(1.0, 10.0)
        .intervals(200_000)
        .build()
        .unwrap();
    let runs = run_integration_experiment(&config, &[1, 2, 4]).unwrap();

    assert_eq!(runs.len(), 3);
    let baseline = runs[0].value;
    for run in &runs {
        assert_relative_eq!(run.value, baseline, max_relative = 1e-9);
    }
}

#[test]
fn area_experiment_produces_plausible_estimates() {
    let config = MonteCarloConfig::builder()
        .points(50_000)
        .max_iterations(200)
        .seed(42)
        .build()
        .unwrap();
    let report = run_area_experiment(&config, &[1, 2, 4]).unwrap();

    // The Mandelbrot set occupies roughly a fifth of the default window;
    // at 50k draws every run lands well inside [1.2, 1.8].
    assert!(report.baseline.value > 1.2 && report.baseline.value < 1.8);
    for run in &report.runs {
        assert!(run.value > 1.2 && run.value < 1.8);
        assert!(run.speedup.is_finite());
        assert!(run.efficiency.is_finite());
    }

    let workers: Vec<usize> = report.runs.iter().map(|r| r.workers).collect();
    assert_eq!(workers, vec![1, 2, 4]);
}

#[test]
fn area_experiment_rejects_zero_worker_count() {
    let config = MonteCarloConfig::builder()
        .points(1_000)
        .max_iterations(10)
        .build()
        .unwrap();
    assert!(run_area_experiment(&config, &[1, 0]).is_err());
}
