//! # Montequad Core
//!
//! Data-parallel numerical estimation kernels: deterministic Riemann-sum
//! integration of `ln(x)/x` and stochastic Monte Carlo estimation of the
//! Mandelbrot set area. Both pipelines share one engineering core —
//! partitioning independent per-sample work across a fixed-size worker pool
//! and merging worker-private partials through an associative `+` reduction
//! at a single join barrier.
//!
//! # Architecture
//!
//! ```text
//! experiment            (timed runs, speedup/efficiency)
//! ├── RiemannIntegrator (quadrature: f(x_i)·h over [a, b])
//! ├── AreaEstimator     (mandelbrot: hit counting over a complex window)
//! │   └── SampleRng     (worker-private seeded streams)
//! └── WorkerPool        (fixed-size fork-join over partition blocks)
//!     └── partition     (contiguous balanced index blocks)
//! ```
//!
//! # Concurrency model
//!
//! One fork-join barrier per run. Configurations are immutable and shared
//! read-only; accumulators (a float sum or a hit count) are worker-private
//! until the join merges them, so no run ever takes a lock or touches an
//! atomic in the hot loop. The combined total is invariant to scheduling
//! order, and for the deterministic pipeline invariant to worker count up to
//! floating-point summation grouping.
//!
//! # Examples
//!
//! ## Riemann integration
//!
//! ```rust
//! use montequad_core::{IntegrationConfig, RiemannIntegrator, WorkerPool};
//!
//! let config = IntegrationConfig::builder()
//!     .bounds(1.0, 10.0)
//!     .intervals(1_000_000)
//!     .build()
//!     .unwrap();
//!
//! let integrator = RiemannIntegrator::new(config);
//! let pool = WorkerPool::new(4).unwrap();
//!
//! let sequential = integrator.sequential();
//! let parallel = integrator.parallel(&pool);
//! assert!((sequential - parallel).abs() < 1e-9);
//! ```
//!
//! ## Mandelbrot area
//!
//! ```rust
//! use montequad_core::{AreaEstimator, MonteCarloConfig, WorkerPool};
//!
//! let config = MonteCarloConfig::builder()
//!     .points(100_000)
//!     .max_iterations(250)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let estimator = AreaEstimator::new(config);
//! let pool = WorkerPool::new(4).unwrap();
//!
//! let area = estimator.parallel(&pool, 0);
//! assert!((area - 1.506).abs() < 0.1);
//! ```
//!
//! ## Scaling experiment
//!
//! ```rust
//! use montequad_core::{run_area_experiment, MonteCarloConfig};
//!
//! let config = MonteCarloConfig::builder()
//!     .points(50_000)
//!     .max_iterations(100)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let report = run_area_experiment(&config, &[1, 2, 4]).unwrap();
//! for run in &report.runs {
//!     println!(
//!         "{} workers: area {:.4}, speedup {:.2}x, efficiency {:.2}",
//!         run.workers, run.value, run.speedup, run.efficiency
//!     );
//! }
//! ```

pub mod config;
pub mod error;
pub mod experiment;
pub mod mandelbrot;
pub mod partition;
pub mod pool;
pub mod quadrature;
pub mod rng;

// Re-exports for convenient access
pub use config::{
    ComplexRegion, IntegrationConfig, IntegrationConfigBuilder, IntervalBounds, MonteCarloConfig,
    MonteCarloConfigBuilder,
};
pub use error::{ConfigError, EstimatorError};
pub use experiment::{
    measure, run_area_experiment, run_integration_experiment, IntegrationRun, Measurement,
    ScalingReport, ScalingRun,
};
pub use mandelbrot::{in_set, AreaEstimator};
pub use pool::WorkerPool;
pub use quadrature::{log_over_x, RiemannIntegrator};
