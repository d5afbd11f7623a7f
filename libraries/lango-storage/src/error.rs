//! Errors raised by the storage backends

use lango_core::LangoError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique column already holds this value; the message is client-facing
    #[error("{0}")]
    Conflict(String),

    /// Payload column did not hold valid JSON
    #[error("Invalid stored payload: {0}")]
    SerializationError(String),

    /// Row value outside the range the domain types accept
    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    /// A writer panicked while holding the in-memory store lock
    #[error("Store lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

impl From<StorageError> for LangoError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => LangoError::not_found(entity, id),
            StorageError::Conflict(msg) => LangoError::conflict(msg),
            StorageError::Database(e) => LangoError::from(e),
            other => LangoError::storage(other.to_string()),
        }
    }
}
