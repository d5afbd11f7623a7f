/// Username availability API routes
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use lango_core::Username;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UsernameCheckResponse {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UsernameCheckResponse {
    fn available(available: bool) -> Self {
        Self {
            available,
            error: None,
        }
    }

    fn unavailable(error: impl Into<String>) -> Self {
        Self {
            available: false,
            error: Some(error.into()),
        }
    }
}

/// POST /api/username/check - Check whether a username is free
///
/// Format violations are an expected outcome and come back as 200 with
/// `available: false`; only a missing field (400) or a store failure (500)
/// use error statuses. The body is parsed as JSON whatever its
/// `Content-Type`.
pub async fn check_username(
    State(app_state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<UsernameCheckResponse>) {
    let raw = serde_json::from_slice::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.get("username").and_then(|v| v.as_str()).map(str::to_owned))
        .filter(|raw| !raw.is_empty());

    let Some(raw) = raw else {
        return (
            StatusCode::BAD_REQUEST,
            Json(UsernameCheckResponse::unavailable("Username is required")),
        );
    };

    let username = match Username::parse(&raw) {
        Ok(username) => username,
        Err(e) => {
            return (
                StatusCode::OK,
                Json(UsernameCheckResponse::unavailable(e.to_string())),
            );
        }
    };

    match app_state.profiles.find_by_username(&username).await {
        Ok(profile) => (
            StatusCode::OK,
            Json(UsernameCheckResponse::available(profile.is_none())),
        ),
        Err(e) => {
            tracing::error!("Username lookup failed for {}: {:?}", username, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UsernameCheckResponse::unavailable("Database error")),
            )
        }
    }
}
