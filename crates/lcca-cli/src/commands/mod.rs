//! CLI command implementations.

pub mod compare;
pub mod costs;
pub mod validate;
