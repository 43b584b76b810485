//! Error types for the montequad CLI.

use thiserror::Error;

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid experiment configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] montequad_core::ConfigError),

    /// Estimation pipeline failure.
    #[error(transparent)]
    Estimator(#[from] montequad_core::EstimatorError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use montequad_core::ConfigError;

    #[test]
    fn test_error_display() {
        let err = CliError::from(ConfigError::InvalidSampleCount);
        assert!(err.to_string().contains("invalid configuration"));
    }
}
