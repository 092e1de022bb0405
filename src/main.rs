//! # LCCA Service
//!
//! HTTP service for lifecycle cost analysis of wastewater collection
//! systems: vacuum vs. low-pressure sewer comparison driven by a YAML
//! cost book.
//!
//! ## Usage
//!
//! ```bash
//! # Start with default configuration
//! lcca-service
//!
//! # Start with a custom configuration file
//! LCCA_CONFIG=/path/to/service.yaml lcca-service
//!
//! # Override the cost book and port
//! LCCA_COST_BOOK=/path/to/cost_book.yaml LCCA_PORT=9000 lcca-service
//! ```

use lcca_config::{load_cost_book, load_settings};
use lcca_server::{AppState, Server, ServerConfig};
use lcca_telemetry::{init_logging, LoggingConfig};
use tracing::{error, info};

/// Application entry point
#[tokio::main]
async fn main() {
    // Initialize logging first
    if let Err(e) = init_logging(&LoggingConfig::new().with_level("info")) {
        eprintln!("Failed to initialize logging: {e}");
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting LCCA service"
    );

    // Run the application
    if let Err(e) = run().await {
        error!(error = %e, "Application failed");
        std::process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = load_settings(None).await?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        cost_book = %config.cost_book_path.display(),
        "Configuration loaded"
    );

    // Load and validate the cost book; a bad book is fatal at startup
    let book = load_cost_book(&config.cost_book_path).await?;

    // Build application state
    let state = AppState::builder().cost_book(book).build();

    // Create server
    let server_config = ServerConfig::new()
        .with_host(&config.server.host)
        .with_port(config.server.port);

    let server = Server::new(server_config, state);

    // Run server
    server.run().await?;

    Ok(())
}
