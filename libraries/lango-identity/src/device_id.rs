//! Device identifier generation and get-or-create

use crate::error::Result;
use crate::random::RandomSource;
use crate::storage::KeyValueStorage;

/// Storage slot holding the device identifier
pub const STORAGE_KEY: &str = "lw-user-id";

/// Identifier length in characters
pub const ID_LENGTH: usize = 15;

/// The 62-symbol identifier alphabet
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

// Largest multiple of 62 that fits in a byte; bytes at or above it are
// rejected so every symbol is equally likely.
const ACCEPT_BELOW: u8 = 248;

/// Generate a fresh identifier from `random`
pub fn generate<R: RandomSource + ?Sized>(random: &mut R) -> Result<String> {
    let mut id = String::with_capacity(ID_LENGTH);
    let mut buf = [0u8; ID_LENGTH * 2];

    while id.len() < ID_LENGTH {
        random.fill_bytes(&mut buf)?;
        for &byte in buf.iter().filter(|&&b| b < ACCEPT_BELOW) {
            id.push(char::from(ALPHABET[usize::from(byte) % ALPHABET.len()]));
            if id.len() == ID_LENGTH {
                break;
            }
        }
    }

    Ok(id)
}

/// Stored values are accepted as long as they have the right length
///
/// Length is counted in Unicode scalar values (`chars()`), not bytes or
/// UTF-16 code units.
pub fn is_well_formed(value: &str) -> bool {
    value.chars().count() == ID_LENGTH
}

/// Reads, and on first use creates, this device's identifier
///
/// Concurrent callers on the same uninitialized storage may each generate a
/// value; the last write wins.
pub struct DeviceIdentity<S, R> {
    storage: S,
    random: R,
}

impl<S: KeyValueStorage, R: RandomSource> DeviceIdentity<S, R> {
    pub fn new(storage: S, random: R) -> Self {
        Self { storage, random }
    }

    /// Return the persisted identifier, creating it if absent or malformed
    ///
    /// Returns an empty string without touching storage when the storage is
    /// not persistent.
    ///
    /// # Errors
    /// Fails if the random source fails or the write-back is rejected by
    /// the storage.
    pub fn get_or_create(&mut self) -> Result<String> {
        if !self.storage.is_persistent() {
            return Ok(String::new());
        }

        if let Some(existing) = self.storage.get(STORAGE_KEY) {
            if is_well_formed(&existing) {
                return Ok(existing);
            }
            tracing::debug!("Replacing malformed device identifier");
        }

        let id = generate(&mut self.random)?;
        self.storage.set(STORAGE_KEY, &id)?;
        Ok(id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> (S, R) {
        (self.storage, self.random)
    }
}
