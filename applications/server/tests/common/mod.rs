/// Common test utilities and fixtures
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use lango_core::{LangoError, Profile, ProfileStore, Result, Summary, SummaryStore, Username};
use lango_server::{create_router, AppState};
use lango_storage::MemorySummaryStore;
use std::collections::HashSet;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Profile store backed by a fixed set of usernames
#[derive(Default)]
pub struct FixedProfileStore {
    usernames: HashSet<String>,
}

impl FixedProfileStore {
    pub fn with_usernames(usernames: &[&str]) -> Self {
        Self {
            usernames: usernames.iter().map(|u| (*u).to_string()).collect(),
        }
    }
}

#[async_trait]
impl ProfileStore for FixedProfileStore {
    async fn find_by_username(&self, username: &Username) -> Result<Option<Profile>> {
        Ok(self.usernames.get(username.as_str()).map(|name| Profile {
            id: 1,
            username: name.clone(),
            created_at: "2025-01-01T00:00:00+00:00".to_string(),
        }))
    }
}

/// Profile store whose every lookup fails
pub struct FailingProfileStore;

#[async_trait]
impl ProfileStore for FailingProfileStore {
    async fn find_by_username(&self, _username: &Username) -> Result<Option<Profile>> {
        Err(LangoError::Database("connection refused".to_string()))
    }
}

/// Summary store whose every call fails
pub struct FailingSummaryStore;

#[async_trait]
impl SummaryStore for FailingSummaryStore {
    async fn get(&self, _id: &str) -> Result<Option<Summary>> {
        Err(LangoError::Database("database is locked".to_string()))
    }

    async fn get_by_slug(&self, _slug: &str) -> Result<Option<Summary>> {
        Err(LangoError::Database("database is locked".to_string()))
    }

    async fn save(&self, _summary: Summary) -> Result<()> {
        Err(LangoError::Database("database is locked".to_string()))
    }

    async fn rename(&self, _id: &str, _slug: &str) -> Result<String> {
        Err(LangoError::Database("database is locked".to_string()))
    }

    async fn list(&self) -> Result<Vec<Summary>> {
        Err(LangoError::Database("database is locked".to_string()))
    }
}

/// Build a router over the given stores
pub fn test_app(profiles: Arc<dyn ProfileStore>, summaries: Arc<dyn SummaryStore>) -> Router {
    create_router(AppState::new(profiles, summaries))
}

/// Router with the given taken usernames and an empty in-memory summary store
#[allow(dead_code)]
pub fn app_with_usernames(usernames: &[&str]) -> (Router, Arc<MemorySummaryStore>) {
    let summaries = Arc::new(MemorySummaryStore::default());
    let app = test_app(
        Arc::new(FixedProfileStore::with_usernames(usernames)),
        Arc::clone(&summaries) as Arc<dyn SummaryStore>,
    );
    (app, summaries)
}

/// Send a request and decode the JSON response body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    post_raw(uri, &serde_json::to_string(body).unwrap())
}

#[allow(dead_code)]
pub fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST without a `Content-Type` header
#[allow(dead_code)]
pub fn post_untyped(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
