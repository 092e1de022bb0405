//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Document is not valid YAML or is missing required keys.
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Document parsed but contains out-of-range values.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
