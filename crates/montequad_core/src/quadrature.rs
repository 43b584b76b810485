//! Deterministic Riemann-sum integration of `ln(x)/x`.
//!
//! The estimator approximates the definite integral over `[a, b]` as the sum
//! of `f(x_i)·h` over `n` equal-width subintervals, with `h = (b - a) / n`
//! and `x_i = a + i·h`. Sample evaluation is pure and per-index independent,
//! so the index domain partitions freely across workers; the analytic value
//! `(ln x)² / 2` makes correctness directly checkable.

use std::ops::Range;

use crate::config::IntegrationConfig;
use crate::pool::WorkerPool;

/// The integrand `f(x) = ln(x)/x`.
///
/// Defined for `x > 0` only. Callers guarantee the domain: a validated
/// [`IntegrationConfig`] has `a > 0`, and the partition only evaluates at
/// `x_i = a + i·h >= a`.
#[inline]
pub fn log_over_x(x: f64) -> f64 {
    debug_assert!(x > 0.0, "integrand evaluated outside its domain");
    x.ln() / x
}

/// Riemann-sum integration pipeline.
///
/// Holds a validated configuration; the same pipeline value can run
/// sequentially and in parallel any number of times, always over identical
/// sample points.
///
/// # Examples
///
/// ```rust
/// use montequad_core::{IntegrationConfig, RiemannIntegrator, WorkerPool};
///
/// let config = IntegrationConfig::builder()
///     .bounds(1.0, std::f64::consts::E)
///     .intervals(100_000)
///     .build()
///     .unwrap();
/// let integrator = RiemannIntegrator::new(config);
///
/// let pool = WorkerPool::new(2).unwrap();
/// let estimate = integrator.parallel(&pool);
/// assert!((estimate - 0.5).abs() < 1e-3);
/// ```
pub struct RiemannIntegrator {
    config: IntegrationConfig,
}

impl RiemannIntegrator {
    /// Creates the pipeline from a validated configuration.
    #[inline]
    pub fn new(config: IntegrationConfig) -> Self {
        Self { config }
    }

    /// Returns the pipeline configuration.
    #[inline]
    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    /// Accumulates `f(x_i)·h` over one contiguous index block.
    ///
    /// This is the worker body: it touches nothing but its private sum.
    fn block_sum(&self, block: Range<usize>) -> f64 {
        let a = self.config.bounds().lower();
        let h = self.config.step();

        let mut sum = 0.0;
        for i in block {
            let x = a + i as f64 * h;
            sum += log_over_x(x) * h;
        }
        sum
    }

    /// Runs the full sum on the calling thread.
    pub fn sequential(&self) -> f64 {
        self.block_sum(0..self.config.intervals())
    }

    /// Runs one fork-join pass on the given pool.
    ///
    /// Each worker sums its own contiguous block; block partials merge with
    /// `+` at the join barrier. Up to floating-point summation grouping the
    /// result is invariant to the pool size.
    pub fn parallel(&self, pool: &WorkerPool) -> f64 {
        pool.sum_partitions(self.config.intervals(), |_, block| self.block_sum(block))
    }
}
