//! Route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

/// Create the main API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(handlers::health_check))
        .route("/live", get(handlers::liveness_check))
        .route("/ready", get(handlers::readiness_check))
        // Vendor comparison endpoints
        .nest("/vendors", vendor_routes())
        // Siteworks endpoints
        .nest("/siteworks", siteworks_routes())
        // Apply middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        // Add state
        .with_state(state)
}

/// Vendor lifecycle-cost comparison routes.
fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/costs", get(handlers::vendors_costs))
        .route("/compare", post(handlers::vendors_compare))
}

/// Siteworks earthwork routes.
fn siteworks_routes() -> Router<AppState> {
    Router::new().route("/fill", post(handlers::siteworks_fill))
}
