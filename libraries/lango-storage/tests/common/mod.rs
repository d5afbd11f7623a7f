//! Shared fixtures for the storage integration suites
//!
//! Each database is a file in its own temp dir, so every pooled connection
//! sees the same schema.

use lango_core::{Summary, SummaryId};
use lango_storage::LocalStorageContext;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Migrated database, deleted with its directory on drop
pub struct TestDb {
    pool: SqlitePool,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("lango-test.db").display());

        let pool = lango_storage::create_pool(&url).await.unwrap();
        lango_storage::run_migrations(&pool).await.unwrap();

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    #[allow(dead_code)]
    pub fn storage(&self) -> LocalStorageContext {
        LocalStorageContext::new(self.pool.clone())
    }
}

/// Test fixture: a summary created `minutes_ago` minutes in the past
#[allow(dead_code)]
pub fn summary_created(id: &str, minutes_ago: i64) -> Summary {
    let mut summary = Summary::new(
        SummaryId::new(id),
        serde_json::json!({ "id": id, "videoTitle": format!("Video {id}") }),
    );
    summary.created_at = chrono::Utc::now() - chrono::Duration::minutes(minutes_ago);
    summary
}
