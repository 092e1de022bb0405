//! # LCCA Telemetry
//!
//! Structured logging setup shared by the service binary and the CLI.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod logging;

// Re-export commonly used types
pub use logging::{init_logging, LoggingConfig, TelemetryError};
