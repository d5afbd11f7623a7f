/// API route modules
pub mod health;
pub mod summaries;
pub mod username;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// All `/api` routes, without outer layers
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/username/check", post(username::check_username))
        .route("/yt-summary/", get(summaries::missing_summary_id))
        .route("/yt-summary/rename", post(summaries::rename_summary))
        .route("/yt-summary/:id", get(summaries::get_summary))
        .route("/yt-page/:slug", get(summaries::get_page))
}
