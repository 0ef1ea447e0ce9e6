//! # krand_collections: Random Fixtures
//!
//! ## Layer 2 Role
//!
//! Builds collections on top of the entropy sources and bounded generation
//! of `krand_core`:
//! - [`CollectionGenerator`]: arrays, matrices, and strings (`generator`)
//! - [`Scalar`] / [`ScalarKind`]: the closed set of element types (`scalar`)
//! - [`Matrix`]: immutable row-major matrix snapshot (`matrix`)
//! - [`Alphabet`]: character sets for string generation (`alphabet`)
//! - Matrix pretty-printing (`printer`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use krand_collections::{Alphabet, CollectionGenerator};
//! use krand_core::Entropy;
//!
//! let mut generator = CollectionGenerator::new(Entropy::from_seed(42));
//!
//! let ints: Vec<i32> = generator.array(16);
//! assert_eq!(ints.len(), 16);
//!
//! let grid = generator.bool_matrix(3, 4, 0.25).unwrap();
//! assert_eq!((grid.rows(), grid.cols()), (3, 4));
//!
//! let pin = generator.string(6, &Alphabet::numeric()).unwrap();
//! assert!(pin.chars().all(|c| c.is_ascii_digit()));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alphabet;
pub mod generator;
pub mod matrix;
pub mod printer;
pub mod scalar;

pub use alphabet::Alphabet;
pub use generator::{CollectionGenerator, DEFAULT_TRUE_PROBABILITY};
pub use matrix::Matrix;
pub use printer::{print_bool_matrix, print_matrix, write_bool_matrix, write_matrix, BoolStyle};
pub use scalar::{Scalar, ScalarKind, UnknownScalarKind};
