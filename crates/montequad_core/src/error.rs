//! Error types for the estimation kernels.
//!
//! All validation happens at pipeline-construction time; a pipeline that
//! builds successfully cannot fail on numerical grounds. The only runtime
//! failure mode is the operating system refusing to spawn worker threads.

use thiserror::Error;

/// Construction-time validation failure.
///
/// Raised synchronously by the configuration builders before any parallel
/// work is scheduled. There is no local recovery: the caller aborts the run.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Integration bound at or below zero (the integrand ln(x)/x requires
    /// a strictly positive domain).
    #[error("bound {0} must be strictly positive")]
    NonPositiveBound(f64),

    /// Lower bound does not lie strictly below the upper bound.
    #[error("empty interval: lower bound {lower} must be below upper bound {upper}")]
    EmptyInterval {
        /// Offending lower bound.
        lower: f64,
        /// Offending upper bound.
        upper: f64,
    },

    /// Sample count (subintervals or random draws) of zero.
    #[error("sample count must be positive")]
    InvalidSampleCount,

    /// Escape-time iteration budget of zero.
    #[error("maximum iteration count must be positive")]
    InvalidIterationCount,

    /// Worker count of zero.
    #[error("worker count must be positive")]
    InvalidWorkerCount,
}

/// Top-level error for running an estimation pipeline.
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// Invalid pipeline parameters.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The fork-join worker pool could not be constructed.
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NonPositiveBound(0.0);
        assert!(err.to_string().contains("strictly positive"));

        let err = ConfigError::EmptyInterval {
            lower: 5.0,
            upper: 1.0,
        };
        assert!(err.to_string().contains("lower bound 5"));
        assert!(err.to_string().contains("upper bound 1"));

        let err = ConfigError::InvalidSampleCount;
        assert!(err.to_string().contains("sample count"));
    }

    #[test]
    fn test_estimator_error_from_config() {
        let err = EstimatorError::from(ConfigError::InvalidWorkerCount);
        assert!(matches!(
            err,
            EstimatorError::Config(ConfigError::InvalidWorkerCount)
        ));
        assert!(err.to_string().contains("worker count"));
    }
}
