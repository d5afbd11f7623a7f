//! Bounded in-memory summary store
//!
//! Keeps at most `capacity` summaries. A save that pushes the store over
//! capacity evicts the summary with the oldest `created_at`, along with its
//! slug mapping. Expired summaries are invisible and are dropped on save.

use crate::StorageError;
use async_trait::async_trait;
use chrono::Utc;
use lango_core::{error::Result, normalize_slug, traits::SummaryStore, types::Summary};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Default number of summaries kept in memory
pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Default)]
struct Inner {
    summaries: HashMap<String, Summary>,
    // slug -> summary id
    slugs: HashMap<String, String>,
}

impl Inner {
    fn live(&self, id: &str) -> Option<&Summary> {
        let now = Utc::now();
        self.summaries.get(id).filter(|s| !s.is_expired_at(now))
    }

    fn remove(&mut self, id: &str) {
        if let Some(summary) = self.summaries.remove(id) {
            if let Some(slug) = summary.slug {
                if self.slugs.get(&slug).is_some_and(|owner| owner == id) {
                    self.slugs.remove(&slug);
                }
            }
        }
    }

    fn purge_expired(&mut self) {
        let now = Utc::now();
        let expired: Vec<String> = self
            .summaries
            .values()
            .filter(|s| s.is_expired_at(now))
            .map(|s| s.id.as_str().to_string())
            .collect();
        for id in expired {
            self.remove(&id);
        }
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .summaries
            .values()
            .min_by_key(|s| s.created_at)
            .map(|s| s.id.as_str().to_string());
        if let Some(id) = oldest {
            tracing::debug!("Evicting summary {} from memory store", id);
            self.remove(&id);
        }
    }
}

/// Summary store held in process memory
#[derive(Debug)]
pub struct MemorySummaryStore {
    capacity: usize,
    inner: RwLock<Inner>,
}

impl MemorySummaryStore {
    /// Create a store holding at most `capacity` summaries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(Inner::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored entries, including any not yet purged
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.summaries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> std::result::Result<RwLockReadGuard<'_, Inner>, StorageError> {
        self.inner.read().map_err(|_| StorageError::LockPoisoned)
    }

    fn write(&self) -> std::result::Result<RwLockWriteGuard<'_, Inner>, StorageError> {
        self.inner.write().map_err(|_| StorageError::LockPoisoned)
    }
}

impl Default for MemorySummaryStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl SummaryStore for MemorySummaryStore {
    async fn get(&self, id: &str) -> Result<Option<Summary>> {
        let inner = self.read()?;
        Ok(inner.live(id).cloned())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Summary>> {
        let inner = self.read()?;
        Ok(inner.slugs.get(slug).and_then(|id| inner.live(id)).cloned())
    }

    async fn save(&self, summary: Summary) -> Result<()> {
        let mut inner = self.write()?;
        inner.purge_expired();

        let id = summary.id.as_str().to_string();
        if let Some(slug) = &summary.slug {
            if inner.slugs.get(slug).is_some_and(|owner| *owner != id) {
                return Err(StorageError::Conflict("This URL is already taken".to_string()).into());
            }
        }

        inner.remove(&id);
        if let Some(slug) = &summary.slug {
            inner.slugs.insert(slug.clone(), id.clone());
        }
        inner.summaries.insert(id, summary);

        while inner.summaries.len() > self.capacity {
            inner.evict_oldest();
        }
        Ok(())
    }

    async fn rename(&self, id: &str, slug: &str) -> Result<String> {
        let slug = normalize_slug(slug)?;
        let mut inner = self.write()?;

        if inner.live(id).is_none() {
            return Err(StorageError::not_found("Summary", id).into());
        }

        if let Some(owner) = inner.slugs.get(&slug).cloned() {
            if owner != id {
                if inner.live(&owner).is_some() {
                    return Err(StorageError::Conflict("This URL is already taken".to_string()).into());
                }
                inner.remove(&owner);
            }
        }

        let old_slug = inner
            .summaries
            .get_mut(id)
            .and_then(|summary| summary.slug.replace(slug.clone()));
        if let Some(old_slug) = old_slug {
            inner.slugs.remove(&old_slug);
        }
        inner.slugs.insert(slug.clone(), id.to_string());

        Ok(slug)
    }

    async fn list(&self) -> Result<Vec<Summary>> {
        let inner = self.read()?;
        let now = Utc::now();
        let mut summaries: Vec<Summary> = inner
            .summaries
            .values()
            .filter(|s| !s.is_expired_at(now))
            .cloned()
            .collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }
}
