//! # LCCA Report
//!
//! Rendering of a [`ComparisonResult`](lcca_core::ComparisonResult) into the
//! supported output representations: Markdown table, styled HTML table, and
//! CSV with a summary trailer. Structured output stays with `serde_json` at
//! the HTTP layer; this crate owns only the text renderings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod format;
pub mod render;

// Re-export commonly used types
pub use format::money;
pub use render::{to_csv, to_html, to_markdown, ReportFormat, UnknownFormat, HEADERS};
