//! Lango Server Library
//!
//! HTTP endpoints for username availability checks and stored summary
//! retrieval.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{ServerConfig, SummaryBackend};
pub use error::{Result, ServerError};
pub use state::AppState;

use axum::Router;
use lango_storage::{LocalStorageContext, MemorySummaryStore};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", api::router())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Wire stores to the configured backends
///
/// Profiles always come from the database; summaries come from the database
/// or from a bounded in-memory store.
pub fn build_state(config: &ServerConfig, storage: LocalStorageContext) -> AppState {
    let storage = Arc::new(storage);

    let summaries: Arc<dyn lango_core::SummaryStore> = match config.storage.summary_backend {
        SummaryBackend::Database => Arc::clone(&storage) as _,
        SummaryBackend::Memory => Arc::new(MemorySummaryStore::new(config.storage.summary_capacity)),
    };

    AppState::new(storage, summaries)
}
