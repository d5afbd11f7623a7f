/// Summary domain type
use super::SummaryId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A stored summary
///
/// The payload is opaque to this system and is handed back to clients exactly
/// as it was saved. The remaining fields are store bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Unique summary identifier
    pub id: SummaryId,

    /// Optional custom URL slug
    pub slug: Option<String>,

    /// Creation time, used for newest-first listing and oldest-first eviction
    pub created_at: DateTime<Utc>,

    /// Entries at or past this instant are treated as absent
    pub expires_at: Option<DateTime<Utc>>,

    /// Stored summary payload
    pub payload: serde_json::Value,
}

impl Summary {
    /// Create a summary created now, with no slug and no expiry
    pub fn new(id: SummaryId, payload: serde_json::Value) -> Self {
        Self {
            id,
            slug: None,
            created_at: Utc::now(),
            expires_at: None,
            payload,
        }
    }

    /// Expire the summary `ttl` after its creation time
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.expires_at = Some(self.created_at + ttl);
        self
    }

    /// Check whether the summary has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
