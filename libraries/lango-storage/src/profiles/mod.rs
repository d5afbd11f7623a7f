//! Profile queries

use crate::StorageError;
use lango_core::types::Profile;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

fn row_to_profile(row: &SqliteRow) -> Profile {
    let created_at: i64 = row.get("created_at");
    Profile {
        id: row.get("id"),
        username: row.get("username"),
        created_at: chrono::DateTime::from_timestamp(created_at, 0)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default(),
    }
}

/// Find the profile with exactly this username
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `username` - Normalized username
///
/// # Returns
///
/// Returns the matching profile, or None if the username is free
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<Profile>> {
    let row = sqlx::query("SELECT id, username, created_at FROM profiles WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(row_to_profile))
}

/// Create a profile
///
/// The caller is responsible for normalizing and validating the username.
pub async fn create(pool: &SqlitePool, username: &str) -> Result<Profile> {
    let now = chrono::Utc::now().timestamp();

    let result = sqlx::query("INSERT INTO profiles (username, created_at) VALUES (?, ?)")
        .bind(username)
        .bind(now)
        .execute(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StorageError::Conflict(format!("Username already taken: {username}"))
            }
            other => StorageError::Database(other),
        })?;

    Ok(Profile {
        id: result.last_insert_rowid(),
        username: username.to_string(),
        created_at: chrono::DateTime::from_timestamp(now, 0)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default(),
    })
}
