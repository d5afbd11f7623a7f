/// Shared application state
use lango_core::{ProfileStore, SummaryStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileStore>,
    pub summaries: Arc<dyn SummaryStore>,
}

impl AppState {
    pub fn new(profiles: Arc<dyn ProfileStore>, summaries: Arc<dyn SummaryStore>) -> Self {
        Self {
            profiles,
            summaries,
        }
    }
}
