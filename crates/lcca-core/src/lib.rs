//! # LCCA Core
//!
//! Core domain types for the lifecycle cost analysis service:
//! - Cluster sizing inputs with boundary validation
//! - Cost estimate and comparison result types
//! - Error types

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cluster;
pub mod error;
pub mod estimate;

// Re-export commonly used types
pub use cluster::Cluster;
pub use error::{ModelError, ModelResult};
pub use estimate::{ComparisonResult, CostEstimate, SystemKind};
