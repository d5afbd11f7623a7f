/// Profile domain type
use serde::{Deserialize, Serialize};

/// A registered user profile, as seen by the availability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique profile identifier
    pub id: i64,

    /// Unique, normalized username
    pub username: String,

    /// Profile creation timestamp (ISO string)
    pub created_at: String,
}
