//! Lango Core
//!
//! Platform-agnostic domain types, validation rules, and store traits shared by
//! the Lango server and its storage backends.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Username`, `Profile`, `Summary`, `SummaryId`
//! - **Validation**: username format and custom slug normalization
//! - **Store Traits**: `ProfileStore`, `SummaryStore`
//! - **Error Handling**: Unified `LangoError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use lango_core::{Summary, SummaryId, Username};
//!
//! // Usernames are trimmed and lowercased before validation
//! let username = Username::parse("  Alice_01 ").unwrap();
//! assert_eq!(username.as_str(), "alice_01");
//!
//! // Summaries wrap an opaque JSON payload
//! let summary = Summary::new(SummaryId::generate(), serde_json::json!({ "title": "Intro" }));
//! assert_eq!(summary.id.as_str().len(), 8);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod slug;
pub mod traits;
pub mod types;
pub mod username;

// Re-export commonly used types
pub use error::{LangoError, Result};
pub use slug::normalize_slug;
pub use traits::{ProfileStore, SummaryStore};
pub use types::{Profile, Summary, SummaryId};
pub use username::Username;
