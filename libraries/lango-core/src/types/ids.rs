/// ID types for Lango entities
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const SUMMARY_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SUMMARY_ID_LEN: usize = 8;

/// Summary identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryId(String);

impl SummaryId {
    /// Create a summary ID from an existing value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random 8-character summary ID
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..SUMMARY_ID_LEN)
            .map(|_| char::from(SUMMARY_ID_ALPHABET[rng.gen_range(0..SUMMARY_ID_ALPHABET.len())]))
            .collect();
        Self(id)
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SummaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SummaryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_use_lowercase_alphanumerics() {
        for _ in 0..100 {
            let id = SummaryId::generate();
            assert_eq!(id.as_str().len(), SUMMARY_ID_LEN);
            assert!(id
                .as_str()
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        }
    }
}
