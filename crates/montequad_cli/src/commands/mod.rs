//! Command implementations.

pub mod integrate;
pub mod mandelbrot;

use tracing::warn;

/// Flags worker counts above the machine's available parallelism.
///
/// Oversubscription is legal (it can be the point of a scaling experiment)
/// but worth a warning, since speedup figures stop meaning much past the
/// physical core count.
pub fn warn_on_oversubscription(workers: &[usize]) {
    let available = num_cpus::get();
    for &count in workers {
        if count > available {
            warn!(
                requested = count,
                available, "worker count exceeds available parallelism"
            );
        }
    }
}
