//! Error types for device identity management

use thiserror::Error;

/// Device identity errors
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Writing to client-local storage failed (e.g. quota exceeded)
    #[error("Storage error: {0}")]
    Storage(String),

    /// The random source could not produce bytes
    #[error("Random source error: {0}")]
    Random(String),
}

impl From<rand::Error> for IdentityError {
    fn from(err: rand::Error) -> Self {
        Self::Random(err.to_string())
    }
}

/// Result type for device identity operations
pub type Result<T> = std::result::Result<T, IdentityError>;
