//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Request and response types
//! - Shared application state

pub mod routes;

use std::sync::Arc;

use axum::Router;
use royalty_db::LedgerStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory ledger.
    pub store: Arc<LedgerStore>,
}

impl AppState {
    /// Wraps a store for sharing across handlers.
    #[must_use]
    pub fn new(store: LedgerStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
