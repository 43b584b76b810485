//! Monte Carlo estimation of the Mandelbrot set area.
//!
//! Points are drawn uniformly from a rectangular window of the complex
//! plane; the escape-time test decides membership, and the area estimate is
//! the window area scaled by the hit ratio. Each worker draws from its own
//! seeded stream, so the parallel phase shares nothing mutable.

use crate::config::MonteCarloConfig;
use crate::pool::WorkerPool;
use crate::rng::{worker_seed, SampleRng};

/// Escape-time membership test for the Mandelbrot set.
///
/// Iterates `z <- z² + c` from `z = 0` for `c = real + imag·i`, escaping as
/// soon as `|z|² > 4`. The squares of the components are carried between
/// iterations so each step costs three multiplications. Returns `true` when
/// the orbit survives the full `max_iterations` budget; the budget is a
/// strict upper bound and the escape check is the only early exit.
///
/// # Examples
///
/// ```rust
/// use montequad_core::mandelbrot::in_set;
///
/// assert!(in_set(0.0, 0.0, 1000));   // the origin never escapes
/// assert!(!in_set(2.0, 2.0, 1));     // |c|² = 8 > 4 on the first step
/// ```
#[inline]
pub fn in_set(real: f64, imag: f64, max_iterations: u32) -> bool {
    let mut zr = 0.0;
    let mut zi = 0.0;
    let mut zr2 = 0.0;
    let mut zi2 = 0.0;

    for _ in 0..max_iterations {
        zi = 2.0 * zr * zi + imag;
        zr = zr2 - zi2 + real;
        zr2 = zr * zr;
        zi2 = zi * zi;

        if zr2 + zi2 > 4.0 {
            return false;
        }
    }
    true
}

/// Monte Carlo area-estimation pipeline.
///
/// Holds a validated configuration. A pipeline value can run any number of
/// times; the `run` ordinal keeps separate runs on fresh random streams (see
/// [`worker_seed`]).
///
/// # Examples
///
/// ```rust
/// use montequad_core::{AreaEstimator, MonteCarloConfig, WorkerPool};
///
/// let config = MonteCarloConfig::builder()
///     .points(50_000)
///     .max_iterations(200)
///     .seed(42)
///     .build()
///     .unwrap();
/// let estimator = AreaEstimator::new(config);
///
/// let pool = WorkerPool::new(2).unwrap();
/// let area = estimator.parallel(&pool, 0);
/// assert!(area > 1.0 && area < 2.0);
/// ```
pub struct AreaEstimator {
    config: MonteCarloConfig,
}

impl AreaEstimator {
    /// Creates the pipeline from a validated configuration.
    #[inline]
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Returns the pipeline configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Resolves the run-level seed: the configured experiment seed, or fresh
    /// operating-system entropy when none was set.
    fn run_seed(&self) -> u64 {
        self.config.seed().unwrap_or_else(rand::random)
    }

    /// Draws `draws` points from a private stream and counts membership hits.
    ///
    /// This is the worker body: generator and counter are both private until
    /// the join barrier merges the counts.
    fn count_hits(&self, draws: usize, seed: u64) -> u64 {
        let region = self.config.region();
        let max_iterations = self.config.max_iterations();
        let mut rng = SampleRng::from_seed(seed);

        let mut hits = 0u64;
        for _ in 0..draws {
            let x = rng.gen_uniform(region.real_min(), region.real_max());
            let y = rng.gen_uniform(region.imag_min(), region.imag_max());
            if in_set(x, y, max_iterations) {
                hits += 1;
            }
        }
        hits
    }

    /// Scales a hit count to an area estimate.
    fn to_area(&self, hits: u64) -> f64 {
        self.config.region().area() * (hits as f64 / self.config.points() as f64)
    }

    /// Runs the full draw count on the calling thread.
    pub fn sequential(&self, run: u64) -> f64 {
        let seed = worker_seed(self.run_seed(), run, 0);
        let hits = self.count_hits(self.config.points(), seed);
        self.to_area(hits)
    }

    /// Runs one fork-join pass on the given pool.
    ///
    /// The draw count splits into balanced per-worker blocks; every worker
    /// samples its block from its own stream and the hit counts merge with
    /// `+` at the join barrier.
    pub fn parallel(&self, pool: &WorkerPool, run: u64) -> f64 {
        let run_seed = self.run_seed();
        let hits: u64 = pool.sum_partitions(self.config.points(), |worker, block| {
            self.count_hits(block.len(), worker_seed(run_seed, run, worker))
        });
        self.to_area(hits)
    }
}
