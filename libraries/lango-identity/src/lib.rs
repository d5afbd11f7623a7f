//! Lango - Device Identity
//!
//! Generates and persists a per-device identifier: a 15-character string over
//! `[A-Za-z0-9]`, kept in a single slot of client-local storage.
//!
//! # Architecture
//!
//! Both environment dependencies are injected:
//! - **Storage**: any [`KeyValueStorage`]. [`NullStorage`] stands in when the
//!   host has no persistent storage, which turns get-or-create into a no-op
//!   returning an empty string.
//! - **Randomness**: any [`RandomSource`]. [`OsRandom`] is cryptographically
//!   secure; [`FallbackRandom`] is a seeded PRNG for hosts without an OS
//!   source and gives no unpredictability guarantee.
//!
//! Under the `wasm` feature, `BrowserStorage` wraps `window.localStorage` and
//! `getUserId()` / `generateUserId()` are exported to JavaScript.
//!
//! # Example
//!
//! ```rust
//! use lango_identity::{DeviceIdentity, MemoryStorage, OsRandom, ID_LENGTH};
//!
//! let mut identity = DeviceIdentity::new(MemoryStorage::default(), OsRandom);
//!
//! let first = identity.get_or_create().unwrap();
//! assert_eq!(first.len(), ID_LENGTH);
//!
//! // Subsequent calls read the persisted value
//! assert_eq!(identity.get_or_create().unwrap(), first);
//! ```

mod device_id;
mod error;
mod random;
mod storage;

pub mod wasm;

// Public exports
pub use device_id::{generate, is_well_formed, DeviceIdentity, ALPHABET, ID_LENGTH, STORAGE_KEY};
pub use error::{IdentityError, Result};
pub use random::{default_source, FallbackRandom, OsRandom, RandomSource};
pub use storage::{KeyValueStorage, MemoryStorage, NullStorage};
