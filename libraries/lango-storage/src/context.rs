use crate::{profiles, summaries};
use async_trait::async_trait;
use lango_core::{
    error::Result,
    normalize_slug,
    traits::{ProfileStore, SummaryStore},
    types::{Profile, Summary},
    Username,
};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
///
/// Serves both the profile table and the summary table from one pool.
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ProfileStore for LocalStorageContext {
    async fn find_by_username(&self, username: &Username) -> Result<Option<Profile>> {
        Ok(profiles::find_by_username(&self.pool, username.as_str()).await?)
    }
}

#[async_trait]
impl SummaryStore for LocalStorageContext {
    async fn get(&self, id: &str) -> Result<Option<Summary>> {
        Ok(summaries::get_by_id(&self.pool, id).await?)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Summary>> {
        Ok(summaries::get_by_slug(&self.pool, slug).await?)
    }

    async fn save(&self, summary: Summary) -> Result<()> {
        Ok(summaries::upsert(&self.pool, &summary).await?)
    }

    async fn rename(&self, id: &str, slug: &str) -> Result<String> {
        let slug = normalize_slug(slug)?;
        summaries::set_slug(&self.pool, id, &slug).await?;
        Ok(slug)
    }

    async fn list(&self) -> Result<Vec<Summary>> {
        Ok(summaries::get_all(&self.pool).await?)
    }
}
