//! Scaling experiments: timed runs across worker counts.
//!
//! An experiment executes a pipeline once per configured worker count, in
//! increasing order, each run fully independent. The Monte Carlo experiment
//! additionally runs a sequential baseline first and derives speedup and
//! efficiency from it. Only wall-clock bracketing happens here; result
//! presentation belongs to the caller.

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::{IntegrationConfig, MonteCarloConfig};
use crate::error::{ConfigError, EstimatorError};
use crate::mandelbrot::AreaEstimator;
use crate::pool::WorkerPool;
use crate::quadrature::RiemannIntegrator;

/// A computed scalar with the wall-clock time it took.
#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    /// Estimated integral value or area.
    pub value: f64,
    /// Elapsed wall-clock time of the estimation run.
    pub elapsed: Duration,
}

/// Brackets a single estimation run with [`Instant`].
pub fn measure<F>(run: F) -> Measurement
where
    F: FnOnce() -> f64,
{
    let start = Instant::now();
    let value = run();
    Measurement {
        value,
        elapsed: start.elapsed(),
    }
}

/// One timed integration run.
#[derive(Clone, Copy, Debug)]
pub struct IntegrationRun {
    /// Worker count used for the run.
    pub workers: usize,
    /// Estimated integral value.
    pub value: f64,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
}

/// One timed Monte Carlo run with scaling metrics against the baseline.
#[derive(Clone, Copy, Debug)]
pub struct ScalingRun {
    /// Worker count used for the run.
    pub workers: usize,
    /// Estimated area.
    pub value: f64,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
    /// Sequential time divided by this run's time.
    pub speedup: f64,
    /// Speedup divided by the worker count.
    pub efficiency: f64,
}

impl ScalingRun {
    /// Derives scaling metrics from a measurement and the baseline time.
    pub fn against_baseline(workers: usize, measurement: Measurement, baseline: Duration) -> Self {
        let speedup = baseline.as_secs_f64() / measurement.elapsed.as_secs_f64();
        Self {
            workers,
            value: measurement.value,
            elapsed: measurement.elapsed,
            speedup,
            efficiency: speedup / workers as f64,
        }
    }
}

/// Results of a full Monte Carlo scaling experiment.
#[derive(Clone, Debug)]
pub struct ScalingReport {
    /// The sequential baseline run.
    pub baseline: Measurement,
    /// Parallel runs in increasing worker-count order.
    pub runs: Vec<ScalingRun>,
}

/// Sorts, deduplicates, and validates a worker-count list.
fn normalise_worker_counts(worker_counts: &[usize]) -> Result<Vec<usize>, ConfigError> {
    if worker_counts.contains(&0) {
        return Err(ConfigError::InvalidWorkerCount);
    }
    let mut counts = worker_counts.to_vec();
    counts.sort_unstable();
    counts.dedup();
    Ok(counts)
}

/// Runs the Riemann integration pipeline once per worker count.
///
/// Runs execute in increasing worker-count order. The partition is
/// deterministic, so every run computes the same sum over the same sample
/// points; only the timing varies.
///
/// # Errors
///
/// Fails before any run starts if a worker count is zero, or on a given run
/// if its pool cannot be built.
pub fn run_integration_experiment(
    config: &IntegrationConfig,
    worker_counts: &[usize],
) -> Result<Vec<IntegrationRun>, EstimatorError> {
    let counts = normalise_worker_counts(worker_counts)?;
    let integrator = RiemannIntegrator::new(*config);

    let mut runs = Vec::with_capacity(counts.len());
    for workers in counts {
        let pool = WorkerPool::new(workers)?;
        let measurement = measure(|| integrator.parallel(&pool));
        info!(
            workers,
            value = measurement.value,
            elapsed_s = measurement.elapsed.as_secs_f64(),
            "integration run complete"
        );
        runs.push(IntegrationRun {
            workers,
            value: measurement.value,
            elapsed: measurement.elapsed,
        });
    }
    Ok(runs)
}

/// Runs the Monte Carlo area pipeline: sequential baseline, then one run per
/// worker count.
///
/// Runs execute in increasing worker-count order, each on fresh random
/// streams (the run ordinal feeds the seed derivation). Speedup and
/// efficiency are computed against the baseline time.
///
/// # Errors
///
/// Fails before any run starts if a worker count is zero, or on a given run
/// if its pool cannot be built.
pub fn run_area_experiment(
    config: &MonteCarloConfig,
    worker_counts: &[usize],
) -> Result<ScalingReport, EstimatorError> {
    let counts = normalise_worker_counts(worker_counts)?;
    let estimator = AreaEstimator::new(*config);

    let baseline = measure(|| estimator.sequential(0));
    info!(
        value = baseline.value,
        elapsed_s = baseline.elapsed.as_secs_f64(),
        "sequential baseline complete"
    );

    let mut runs = Vec::with_capacity(counts.len());
    for (ordinal, workers) in counts.into_iter().enumerate() {
        let pool = WorkerPool::new(workers)?;
        let measurement = measure(|| estimator.parallel(&pool, ordinal as u64 + 1));
        let run = ScalingRun::against_baseline(workers, measurement, baseline.elapsed);
        info!(
            workers,
            value = run.value,
            elapsed_s = run.elapsed.as_secs_f64(),
            speedup = run.speedup,
            "parallel run complete"
        );
        runs.push(run);
    }
    Ok(ScalingReport { baseline, runs })
}
