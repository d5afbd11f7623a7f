//! Summary queries
//!
//! Timestamps are stored as unix milliseconds. Rows whose `expires_at` has
//! passed are invisible to every read and are deleted on the next save.

use crate::StorageError;
use chrono::{DateTime, Utc};
use lango_core::types::{Summary, SummaryId};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

const SELECT_COLUMNS: &str = "SELECT id, slug, payload, created_at, expires_at FROM summaries";

fn millis_to_datetime(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| StorageError::CorruptRow(format!("timestamp out of range: {millis}")))
}

fn row_to_summary(row: &SqliteRow) -> Result<Summary> {
    let payload: String = row.get("payload");
    let created_at: i64 = row.get("created_at");
    let expires_at: Option<i64> = row.get("expires_at");

    Ok(Summary {
        id: SummaryId::new(row.get::<String, _>("id")),
        slug: row.get("slug"),
        created_at: millis_to_datetime(created_at)?,
        expires_at: expires_at.map(millis_to_datetime).transpose()?,
        payload: serde_json::from_str(&payload)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?,
    })
}

/// Get a live summary by ID
pub async fn get_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Summary>> {
    let now = Utc::now().timestamp_millis();
    let row = sqlx::query(&format!(
        "{SELECT_COLUMNS} WHERE id = ? AND (expires_at IS NULL OR expires_at > ?)"
    ))
    .bind(id)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_summary).transpose()
}

/// Get a live summary by custom slug
pub async fn get_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Summary>> {
    let now = Utc::now().timestamp_millis();
    let row = sqlx::query(&format!(
        "{SELECT_COLUMNS} WHERE slug = ? AND (expires_at IS NULL OR expires_at > ?)"
    ))
    .bind(slug)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_summary).transpose()
}

/// Insert or replace a summary
///
/// Expired rows are purged first so their slugs become reusable.
pub async fn upsert(pool: &SqlitePool, summary: &Summary) -> Result<()> {
    let payload = serde_json::to_string(&summary.payload)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;

    purge_expired(pool).await?;

    sqlx::query(
        "INSERT INTO summaries (id, slug, payload, created_at, expires_at)
         VALUES (?, ?, ?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET
             slug = excluded.slug,
             payload = excluded.payload,
             created_at = excluded.created_at,
             expires_at = excluded.expires_at",
    )
    .bind(summary.id.as_str())
    .bind(summary.slug.as_deref())
    .bind(payload)
    .bind(summary.created_at.timestamp_millis())
    .bind(summary.expires_at.map(|t| t.timestamp_millis()))
    .execute(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            StorageError::Conflict("This URL is already taken".to_string())
        }
        other => StorageError::Database(other),
    })?;

    Ok(())
}

/// Set the slug of a live summary
///
/// `slug` must already be normalized. Runs in a single transaction so the
/// uniqueness check and the update see the same state.
pub async fn set_slug(pool: &SqlitePool, id: &str, slug: &str) -> Result<()> {
    let now = Utc::now().timestamp_millis();
    let mut tx = pool.begin().await?;

    let exists = sqlx::query(
        "SELECT id FROM summaries WHERE id = ? AND (expires_at IS NULL OR expires_at > ?)",
    )
    .bind(id)
    .bind(now)
    .fetch_optional(&mut *tx)
    .await?
    .is_some();

    if !exists {
        return Err(StorageError::not_found("Summary", id));
    }

    let owner: Option<String> = sqlx::query("SELECT id FROM summaries WHERE slug = ?")
        .bind(slug)
        .fetch_optional(&mut *tx)
        .await?
        .map(|row| row.get("id"));

    if let Some(owner) = owner {
        if owner != id {
            let owner_live = sqlx::query(
                "SELECT id FROM summaries WHERE id = ? AND (expires_at IS NULL OR expires_at > ?)",
            )
            .bind(&owner)
            .bind(now)
            .fetch_optional(&mut *tx)
            .await?
            .is_some();

            if owner_live {
                return Err(StorageError::Conflict("This URL is already taken".to_string()));
            }

            // Expired owners release their slug
            sqlx::query("UPDATE summaries SET slug = NULL WHERE id = ?")
                .bind(&owner)
                .execute(&mut *tx)
                .await?;
        }
    }

    sqlx::query("UPDATE summaries SET slug = ? WHERE id = ?")
        .bind(slug)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Get all live summaries, newest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Summary>> {
    let now = Utc::now().timestamp_millis();
    let rows = sqlx::query(&format!(
        "{SELECT_COLUMNS} WHERE expires_at IS NULL OR expires_at > ? ORDER BY created_at DESC"
    ))
    .bind(now)
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_summary).collect()
}

/// Delete expired summaries, returning how many were removed
pub async fn purge_expired(pool: &SqlitePool) -> Result<u64> {
    let now = Utc::now().timestamp_millis();
    let result = sqlx::query("DELETE FROM summaries WHERE expires_at IS NOT NULL AND expires_at <= ?")
        .bind(now)
        .execute(pool)
        .await?;

    let removed = result.rows_affected();
    if removed > 0 {
        tracing::debug!("Purged {} expired summaries", removed);
    }
    Ok(removed)
}
