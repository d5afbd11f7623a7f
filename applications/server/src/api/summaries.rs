/// Summary API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use lango_core::{LangoError, SummaryStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RenameResponse {
    pub success: bool,
    pub slug: String,
}

/// Look up a summary payload by ID
pub async fn fetch_summary(store: &dyn SummaryStore, id: &str) -> Result<serde_json::Value> {
    if id.is_empty() {
        return Err(ServerError::BadRequest("Summary ID is required".to_string()));
    }

    store
        .get(id)
        .await?
        .map(|summary| summary.payload)
        .ok_or_else(|| ServerError::NotFound("Summary not found. It may have expired.".to_string()))
}

/// GET /api/yt-summary/:id - Get a stored summary
pub async fn get_summary(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    fetch_summary(app_state.summaries.as_ref(), &id).await.map(Json)
}

/// GET /api/yt-summary/ - Summary ID missing from the path
pub async fn missing_summary_id() -> Result<Json<serde_json::Value>> {
    Err(ServerError::BadRequest("Summary ID is required".to_string()))
}

/// GET /api/yt-page/:slug - Resolve a custom slug to its summary
///
/// Store failures are logged and answered like an unknown slug.
pub async fn get_page(
    Path(slug): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    let summary = app_state
        .summaries
        .get_by_slug(&slug)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Page lookup failed for {}: {:?}", slug, e);
            None
        });

    summary
        .map(|summary| Json(summary.payload))
        .ok_or_else(|| ServerError::NotFound("Page not found".to_string()))
}

/// POST /api/yt-summary/rename - Give a summary a custom slug
///
/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn rename_summary(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<RenameResponse>> {
    let (id, slug) = serde_json::from_slice::<RenameRequest>(&body)
        .ok()
        .and_then(|req| Some((req.id?, req.slug?)))
        .filter(|(id, slug)| !id.is_empty() && !slug.is_empty())
        .ok_or_else(|| ServerError::BadRequest("id and slug are required".to_string()))?;

    let slug = app_state
        .summaries
        .rename(&id, &slug)
        .await
        .map_err(|e| match e {
            LangoError::InvalidInput(msg) | LangoError::Conflict(msg) => ServerError::BadRequest(msg),
            LangoError::NotFound { .. } => ServerError::NotFound("Summary not found".to_string()),
            other => ServerError::Store(other),
        })?;

    tracing::info!("Summary {} renamed to {}", id, slug);

    Ok(Json(RenameResponse {
        success: true,
        slug,
    }))
}
