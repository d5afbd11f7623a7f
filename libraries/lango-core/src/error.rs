//! Errors shared by the Lango stores and validators

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LangoError>;

/// Failure of a validation step or a store call
///
/// `InvalidInput` and `Conflict` carry client-facing text and render it
/// verbatim. The remaining variants describe internal failures and are never
/// shown to clients as-is.
#[derive(Error, Debug)]
pub enum LangoError {
    /// Rejected by a format or length rule
    #[error("{0}")]
    InvalidInput(String),

    /// A unique value (slug, username) belongs to another record
    #[error("{0}")]
    Conflict(String),

    /// No live record with this key
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Backend failure that is not a database driver error
    #[error("Store failure: {0}")]
    Storage(String),

    /// Database driver failure, flattened to text
    #[error("Database error: {0}")]
    Database(String),

    /// Stored payload could not be encoded or decoded
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl LangoError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for LangoError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
