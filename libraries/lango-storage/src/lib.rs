//! Lango Storage
//!
//! Store backends for profiles and summaries.
//!
//! Each table has its own slice module of plain query functions taking a
//! pool (`profiles`, `summaries`). [`LocalStorageContext`] wraps a pool and
//! implements the core store traits on top of those slices.
//! [`MemorySummaryStore`] is the process-local alternative for summaries.
//!
//! ```rust,no_run
//! use lango_core::{ProfileStore, Username};
//! use lango_storage::{create_pool, run_migrations, LocalStorageContext};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://lango.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! let taken = storage
//!     .find_by_username(&Username::parse("alice123")?)
//!     .await?
//!     .is_some();
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

pub mod memory;
pub mod profiles;
pub mod summaries;

pub use context::LocalStorageContext;
pub use error::StorageError;
pub use memory::MemorySummaryStore;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(30);

/// Bring the `profiles` and `summaries` tables up to date
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Open a WAL-mode pool, creating the database file if it is missing
///
/// `database_url` is a `sqlite://` URL, e.g. `sqlite://./data/lango.db`.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    tracing::debug!(url = database_url, "Opened SQLite pool");
    Ok(pool)
}
