//! Shared application state.

use lcca_config::CostBook;
use lcca_model::CostModel;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers.
///
/// Only immutable data lives here; every request computes local values, so
/// unlimited concurrent callers are safe.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The cost model, holding the loaded cost book.
    pub model: Arc<CostModel>,
    /// Service start time, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Create a state builder.
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }
}

/// Builder for [`AppState`].
#[derive(Debug, Default)]
pub struct AppStateBuilder {
    cost_book: Option<CostBook>,
}

impl AppStateBuilder {
    /// Set the cost book the model will be built over.
    #[must_use]
    pub fn cost_book(mut self, book: CostBook) -> Self {
        self.cost_book = Some(book);
        self
    }

    /// Build the application state.
    ///
    /// # Panics
    /// Panics if no cost book was provided; state construction happens once
    /// at startup where a missing book is a programming error.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn build(self) -> AppState {
        let book = self.cost_book.expect("cost book is required");
        AppState {
            model: Arc::new(CostModel::new(book)),
            started_at: Instant::now(),
        }
    }
}
