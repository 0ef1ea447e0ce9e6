//! Error types for generation requests.
//!
//! Every variant is a caller-input contract violation. Nothing here is
//! transient: the entropy source itself cannot fail, so callers should never
//! retry a failed request with the same arguments.

use thiserror::Error;

use crate::bounded::Parity;

/// Convenience alias for results produced by krand operations.
pub type Result<T> = std::result::Result<T, KRandError>;

/// Errors raised by bounded and collection generation.
///
/// # Variants
///
/// - `InvalidRange`: the right bound is smaller than the left bound
/// - `UnsatisfiableConstraint`: a single-value range lacks the requested parity
/// - `InvalidProbability`: a `true` probability outside `[0, 1]`
/// - `EmptyAlphabet`: a string alphabet with no characters
/// - `AlphabetTooLarge`: an alphabet whose length cannot be used as a range bound
///
/// # Examples
///
/// ```
/// use krand_core::KRandError;
///
/// let err = KRandError::InvalidRange { start: 5, end: 1 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid range: right bound 1 is smaller than left bound 5"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KRandError {
    /// Right bound smaller than left bound.
    #[error("Invalid range: right bound {end} is smaller than left bound {start}")]
    InvalidRange {
        /// Left (inclusive) bound
        start: i32,
        /// Right bound
        end: i32,
    },

    /// Degenerate range whose only value has the wrong parity.
    #[error("Unsatisfiable constraint: no {parity} value in [{value}, {value}]")]
    UnsatisfiableConstraint {
        /// The single value the range admits
        value: i32,
        /// The parity that was requested
        parity: Parity,
    },

    /// Probability of `true` outside `[0, 1]` (or NaN).
    #[error("Invalid probability: {0} is not in [0, 1]")]
    InvalidProbability(f64),

    /// Alphabet with no characters.
    #[error("Alphabet must contain at least one character")]
    EmptyAlphabet,

    /// Alphabet longer than `i32::MAX` characters.
    #[error("Alphabet of {0} characters exceeds the supported maximum")]
    AlphabetTooLarge(usize),
}
