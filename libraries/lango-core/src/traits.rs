//! Store traits
//!
//! Both stores are narrow on purpose: handlers depend on these traits, and the
//! server picks SQLite-backed or in-memory implementations at startup.

use crate::error::Result;
use crate::types::{Profile, Summary};
use crate::username::Username;
use async_trait::async_trait;

/// Read access to registered user profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Find the profile owning `username`, if any
    ///
    /// Usernames are unique, so at most one profile matches.
    async fn find_by_username(&self, username: &Username) -> Result<Option<Profile>>;
}

/// Storage for previously computed summaries
///
/// Implementations own expiry and eviction. Expired entries must be reported
/// as absent by every read.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Get a live summary by ID
    async fn get(&self, id: &str) -> Result<Option<Summary>>;

    /// Get a live summary by its custom slug
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Summary>>;

    /// Insert a summary, replacing any existing entry with the same ID
    async fn save(&self, summary: Summary) -> Result<()>;

    /// Assign a custom slug to a summary, returning the normalized slug
    ///
    /// # Errors
    /// - `LangoError::InvalidInput` if the slug is too short or too long
    /// - `LangoError::NotFound` if no live summary has this ID
    /// - `LangoError::Conflict` if another summary already owns the slug
    async fn rename(&self, id: &str, slug: &str) -> Result<String>;

    /// All live summaries, newest first
    async fn list(&self) -> Result<Vec<Summary>>;
}
