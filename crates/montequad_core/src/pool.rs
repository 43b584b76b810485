//! Fixed-size fork-join worker pool.
//!
//! The original experiment relied on an OpenMP `parallel for` with a `+`
//! reduction clause; here the same schedule is spelled out explicitly. A
//! [`WorkerPool`] owns a dedicated Rayon thread pool of exactly the requested
//! size, forks one task per partition block, and joins once every
//! worker-private partial has been merged through an associative, commutative
//! `+`.
//!
//! # Determinism
//!
//! Worker identity is the partition-block index, not the OS thread that
//! happens to execute the block. Partial results are reduced by summing the
//! per-block values, so the combined total does not depend on which thread
//! ran which block or in what order the blocks finished.

use std::iter::Sum;
use std::ops::Range;

use crate::error::{ConfigError, EstimatorError};
use crate::partition::partition_blocks;

use rayon::prelude::*;

/// Fixed-size worker pool for data-parallel fork-join runs.
///
/// # Examples
///
/// ```rust
/// use montequad_core::WorkerPool;
///
/// let pool = WorkerPool::new(4).unwrap();
///
/// // Sum of 0..1000 split across four workers.
/// let total: u64 = pool.sum_partitions(1000, |_worker, block| {
///     block.map(|i| i as u64).sum::<u64>()
/// });
/// assert_eq!(total, 499_500);
/// ```
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Builds a pool with exactly `workers` threads.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWorkerCount`] for a zero worker count,
    /// or [`EstimatorError::Pool`] if the operating system refuses to spawn
    /// the threads.
    pub fn new(workers: usize) -> Result<Self, EstimatorError> {
        if workers == 0 {
            return Err(ConfigError::InvalidWorkerCount.into());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("montequad-worker-{index}"))
            .build()?;
        Ok(Self { pool, workers })
    }

    /// Returns the pool size.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs one fork-join reduction over the index domain `0..n`.
    ///
    /// The domain is split into one contiguous balanced block per worker
    /// (see [`partition_blocks`]); `partial` is invoked once per block with
    /// the block's worker index and index range, accumulates privately, and
    /// the per-worker partials are merged with `+` at the join barrier.
    /// Workers share nothing during the parallel phase.
    pub fn sum_partitions<T, F>(&self, n: usize, partial: F) -> T
    where
        T: Send + Sum,
        F: Fn(usize, Range<usize>) -> T + Sync,
    {
        let blocks = partition_blocks(n, self.workers);
        self.pool.install(|| {
            blocks
                .into_par_iter()
                .enumerate()
                .map(|(worker, block)| partial(worker, block))
                .sum()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_zero_workers() {
        let result = WorkerPool::new(0);
        assert!(matches!(
            result,
            Err(EstimatorError::Config(ConfigError::InvalidWorkerCount))
        ));
    }

    #[test]
    fn test_sum_partitions_counts_every_index_once() {
        let pool = WorkerPool::new(3).unwrap();
        let total: u64 = pool.sum_partitions(10_001, |_, block| block.len() as u64);
        assert_eq!(total, 10_001);
    }

    #[test]
    fn test_sum_partitions_float_reduction() {
        let pool = WorkerPool::new(4).unwrap();
        let total: f64 = pool.sum_partitions(1000, |_, block| {
            block.map(|i| i as f64).sum::<f64>()
        });
        assert_relative_eq!(total, 499_500.0);
    }

    #[test]
    fn test_worker_indices_are_partition_indices() {
        let pool = WorkerPool::new(4).unwrap();
        // Encode each observed worker index as a bit; all four blocks must
        // report their own partition index exactly once.
        let mask: u64 = pool.sum_partitions(4, |worker, block| {
            assert_eq!(block, worker..worker + 1);
            1u64 << worker
        });
        assert_eq!(mask, 0b1111);
    }

    #[test]
    fn test_pool_is_reusable_across_runs() {
        let pool = WorkerPool::new(2).unwrap();
        let first: u64 = pool.sum_partitions(100, |_, block| block.len() as u64);
        let second: u64 = pool.sum_partitions(100, |_, block| block.len() as u64);
        assert_eq!(first, second);
    }
}
