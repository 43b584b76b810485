//! Static partitioning of the sample domain.
//!
//! Both pipelines index their work items `0..n` (subintervals for the
//! Riemann sum, random draws for Monte Carlo) and split that range into one
//! contiguous block per worker. Blocks are balanced to within one item, so a
//! static schedule keeps every worker busy for near-identical spans on a
//! uniform workload.

use std::ops::Range;

/// Splits `0..n` into `workers` contiguous balanced blocks.
///
/// Every block holds either `n / workers` or `n / workers + 1` consecutive
/// indices; the first `n % workers` blocks take the larger size. Together the
/// blocks cover `0..n` exactly once, in ascending order. When `workers > n`
/// the trailing blocks are empty.
///
/// # Panics
///
/// Panics if `workers` is zero. Callers reach this function through a
/// validated [`WorkerPool`](crate::pool::WorkerPool), which rejects a zero
/// worker count at construction.
///
/// # Examples
///
/// ```rust
/// use montequad_core::partition::partition_blocks;
///
/// let blocks = partition_blocks(10, 4);
/// assert_eq!(blocks, vec![0..3, 3..6, 6..8, 8..10]);
/// ```
pub fn partition_blocks(n: usize, workers: usize) -> Vec<Range<usize>> {
    debug_assert!(workers > 0, "worker count validated before partitioning");

    let base = n / workers;
    let remainder = n % workers;

    let mut blocks = Vec::with_capacity(workers);
    let mut start = 0;
    for worker in 0..workers {
        let len = if worker < remainder { base + 1 } else { base };
        blocks.push(start..start + len);
        start += len;
    }
    blocks
}
