//! Concrete entropy source with switchable standard and secure modes.
//!
//! This module provides [`Entropy`], a generator object that owns exactly one
//! underlying RNG at a time and implements both [`EntropySource`] and
//! [`rand::RngCore`].

use std::fmt;
use std::str::FromStr;

use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, RngCore, SeedableRng};
use serde::Deserialize;
use tracing::debug;

use super::source::EntropySource;
use crate::config::{ConfigError, EntropyConfig};

/// Operating mode of an [`Entropy`] source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntropyMode {
    /// Fast, seedable, not cryptographically secure.
    #[default]
    Standard,
    /// Operating system CSPRNG.
    Secure,
}

impl EntropyMode {
    /// Returns the lowercase name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntropyMode::Standard => "standard",
            EntropyMode::Secure => "secure",
        }
    }
}

impl FromStr for EntropyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "std" => Ok(EntropyMode::Standard),
            "secure" => Ok(EntropyMode::Secure),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for EntropyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
enum Inner {
    Standard(SmallRng),
    Secure(OsRng),
}

/// Random number generator handed to every generation call.
///
/// # Examples
///
/// ```rust
/// use krand_core::entropy::{Entropy, EntropySource};
///
/// let mut rng1 = Entropy::from_seed(42);
/// let mut rng2 = Entropy::from_seed(42);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.next_int(), rng2.next_int());
/// assert_eq!(rng1.seed(), Some(42));
/// ```
#[derive(Debug)]
pub struct Entropy {
    inner: Inner,
    /// Seed of the current standard generator, if it was seeded explicitly.
    seed: Option<u64>,
}

impl Entropy {
    /// Creates a standard-mode source seeded from operating system entropy.
    pub fn new() -> Self {
        debug!(mode = "standard", "initialising entropy source");
        Self {
            inner: Inner::Standard(SmallRng::from_entropy()),
            seed: None,
        }
    }

    /// Creates a standard-mode source with a fixed seed.
    ///
    /// The same seed always produces the same sequence on the same build.
    pub fn from_seed(seed: u64) -> Self {
        debug!(mode = "standard", seed, "initialising seeded entropy source");
        Self {
            inner: Inner::Standard(SmallRng::seed_from_u64(seed)),
            seed: Some(seed),
        }
    }

    /// Creates a secure-mode source backed by the operating system CSPRNG.
    pub fn secure() -> Self {
        debug!(mode = "secure", "initialising entropy source");
        Self {
            inner: Inner::Secure(OsRng),
            seed: None,
        }
    }

    /// Builds a source from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SeedWithSecureMode`] when a seed is combined
    /// with secure mode.
    pub fn from_config(config: &EntropyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(match (config.mode, config.seed) {
            (EntropyMode::Secure, _) => Self::secure(),
            (EntropyMode::Standard, Some(seed)) => Self::from_seed(seed),
            (EntropyMode::Standard, None) => Self::new(),
        })
    }

    /// Switches between secure and standard mode.
    ///
    /// The current generator is always replaced, even when the requested mode
    /// is already active, and any seed is forgotten. A new standard generator
    /// is seeded from operating system entropy.
    pub fn use_secure(&mut self, secure: bool) {
        *self = if secure { Self::secure() } else { Self::new() };
    }

    /// Returns the active mode.
    pub fn mode(&self) -> EntropyMode {
        match self.inner {
            Inner::Standard(_) => EntropyMode::Standard,
            Inner::Secure(_) => EntropyMode::Secure,
        }
    }

    /// Returns `true` in secure mode.
    pub fn is_secure(&self) -> bool {
        matches!(self.inner, Inner::Secure(_))
    }

    /// Returns the seed of the current generator, if it was seeded explicitly.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for Entropy {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Entropy {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match &mut self.inner {
            Inner::Standard(rng) => rng.next_u32(),
            Inner::Secure(rng) => rng.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match &mut self.inner {
            Inner::Standard(rng) => rng.next_u64(),
            Inner::Secure(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match &mut self.inner {
            Inner::Standard(rng) => rng.fill_bytes(dest),
            Inner::Secure(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match &mut self.inner {
            Inner::Standard(rng) => rng.try_fill_bytes(dest),
            Inner::Secure(rng) => rng.try_fill_bytes(dest),
        }
    }
}

impl EntropySource for Entropy {
    #[inline]
    fn next_int(&mut self) -> i32 {
        self.gen()
    }

    #[inline]
    fn next_long(&mut self) -> i64 {
        self.gen()
    }

    #[inline]
    fn next_float(&mut self) -> f32 {
        self.gen()
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        self.gen()
    }

    #[inline]
    fn next_boolean(&mut self) -> bool {
        self.gen()
    }
}
