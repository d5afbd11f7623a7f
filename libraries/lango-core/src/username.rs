//! Username normalization and format validation
//!
//! Candidate usernames are trimmed and lowercased, then must consist of 3-20
//! lowercase ASCII letters, digits, or underscores.

use crate::error::{LangoError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message returned to clients when a username fails format validation
pub const USERNAME_FORMAT_MESSAGE: &str =
    "Username must be 3-20 characters, only lowercase letters, numbers, and underscores";

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_]{3,20}$").expect("valid username regex"));

/// A normalized username that satisfies the format rules
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Normalize and validate a raw candidate
    ///
    /// # Errors
    /// Returns `LangoError::InvalidInput` carrying [`USERNAME_FORMAT_MESSAGE`]
    /// when the normalized value does not match the format.
    pub fn parse(raw: &str) -> Result<Self> {
        let cleaned = normalize(raw);
        if USERNAME_RE.is_match(&cleaned) {
            Ok(Self(cleaned))
        } else {
            Err(LangoError::invalid_input(USERNAME_FORMAT_MESSAGE))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trim surrounding whitespace and lowercase
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
