//! # LCCA Server
//!
//! HTTP surface for the lifecycle cost analysis service:
//! - Axum routes for cost-book exposure and system comparison
//! - Request validation at the boundary, before the model runs
//! - Rendering negotiation (JSON, Markdown, HTML, CSV)
//! - Graceful shutdown handling

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use error::ApiError;
pub use routes::create_router;
pub use server::{Server, ServerConfig};
pub use state::AppState;
