//! Random byte sources
//!
//! Implements the secure OS source and the insecure seeded fallback

use crate::error::Result;
use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};

/// A source of random bytes
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Whether the bytes are suitable for security-sensitive use
    fn is_secure(&self) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }

    fn is_secure(&self) -> bool {
        (**self).is_secure()
    }
}

/// Cryptographically secure bytes from the operating system
///
/// In browsers this is `crypto.getRandomValues` (via the `wasm` feature).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }

    fn is_secure(&self) -> bool {
        true
    }
}

/// Non-cryptographic PRNG for hosts without a secure source
///
/// Identifiers produced from this source are unique in practice but
/// predictable to anyone who can guess the seed.
#[derive(Debug, Clone)]
pub struct FallbackRandom {
    rng: SmallRng,
}

impl FallbackRandom {
    /// Deterministic source, mainly for tests
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the wall clock
    pub fn from_clock() -> Self {
        Self::from_seed(clock_seed())
    }
}

impl RandomSource for FallbackRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng.fill_bytes(dest);
        Ok(())
    }

    fn is_secure(&self) -> bool {
        false
    }
}

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    js_sys::Date::now().to_bits()
}

#[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Pick the best available source for this host
///
/// Probes the OS source once; only when the probe fails is the insecure
/// fallback used.
pub fn default_source() -> Box<dyn RandomSource> {
    let mut probe = [0u8; 1];
    match OsRng.try_fill_bytes(&mut probe) {
        Ok(()) => Box::new(OsRandom),
        Err(e) => {
            tracing::warn!("Secure random source unavailable, using insecure fallback: {}", e);
            Box::new(FallbackRandom::from_clock())
        }
    }
}
