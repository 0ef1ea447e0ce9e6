//! # Entropy Sources
//!
//! This module provides the random bit generators every draw is taken from.
//!
//! ## Module Structure
//!
//! - [`source`]: the [`EntropySource`] contract consumed by generation code
//! - [`generator`]: [`Entropy`], the concrete source with standard and secure modes
//!
//! ## Modes
//!
//! - **Standard**: `SmallRng` (xoshiro family). Fast, seedable, not
//!   cryptographically secure. A seeded standard source is fully reproducible.
//! - **Secure**: `OsRng`, backed by the operating system CSPRNG. Not seedable.
//!
//! Switching modes with [`Entropy::use_secure`] discards the previous
//! generator together with its seed and position in the sequence.
//!
//! ## Usage Example
//!
//! ```rust
//! use krand_core::entropy::{Entropy, EntropyMode, EntropySource};
//!
//! let mut entropy = Entropy::from_seed(12345);
//! let value = entropy.next_double();
//! assert!((0.0..1.0).contains(&value));
//!
//! entropy.use_secure(true);
//! assert_eq!(entropy.mode(), EntropyMode::Secure);
//! assert_eq!(entropy.seed(), None);
//! ```

mod generator;
mod source;

pub use generator::{Entropy, EntropyMode};
pub use source::EntropySource;
