//! # LCCA Config
//!
//! Configuration management for the LCCA service:
//! - Typed cost-book loading from YAML with required-key enforcement
//! - Service settings (bind address, cost-book path) with environment
//!   variable overrides
//!
//! All paths are injected explicitly; nothing is resolved relative to the
//! source layout.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cost_book;
pub mod error;
pub mod settings;

// Re-export commonly used types
pub use cost_book::{load_cost_book, CostBook, FinanceDefaults, PressureCosts, VacuumCosts};
pub use error::{ConfigError, ConfigResult};
pub use settings::{load_settings, ServerSettings, ServiceConfig};
