//! # krand_core: Entropy and Bounded Integer Generation
//!
//! ## Layer 1 (Foundation) Role
//!
//! krand_core is the bottom layer of the krand workspace, providing:
//! - Entropy sources with standard and secure modes (`entropy`)
//! - Range- and parity-constrained integer generation (`bounded`)
//! - The error taxonomy shared by every layer (`error`)
//! - Entropy configuration from files, environment, and CLI (`config`)
//!
//! There is no global generator. Every draw goes through an explicit
//! [`Entropy`] (or any other [`EntropySource`]) passed by the caller, so
//! seeded, reproducible sequences are available wherever they are needed.
//!
//! ## Usage Examples
//!
//! ```rust
//! use krand_core::{BoundedIntegerGenerator, Entropy};
//!
//! let mut entropy = Entropy::from_seed(7);
//!
//! let die = entropy.next_in_range(1, 7).unwrap();
//! assert!((1..7).contains(&die));
//!
//! let even = entropy.next_even_in_range(10, 20).unwrap();
//! assert!(even % 2 == 0 && (10..=20).contains(&even));
//! ```
//!
//! ## Range Semantics
//!
//! `next_in_range(start, end)` reduces a non-negative draw modulo
//! `end - start`, so `end` itself is only ever returned for the degenerate
//! range `start == end`. The parity operations may still land on `end` after
//! their `+1` correction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bounded;
pub mod config;
pub mod entropy;
pub mod error;

pub use bounded::{BoundedIntegerGenerator, Parity};
pub use config::{ConfigError, ConfigOverrides, EntropyConfig};
pub use entropy::{Entropy, EntropyMode, EntropySource};
pub use error::{KRandError, Result};
