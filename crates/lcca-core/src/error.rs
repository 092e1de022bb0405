//! Error types for the cost model.

use thiserror::Error;

/// Errors produced by the cost model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Cluster input failed boundary validation.
    #[error("invalid cluster: {0}")]
    InvalidCluster(String),
}

/// Convenience alias for model results.
pub type ModelResult<T> = Result<T, ModelError>;
