//! Range- and parity-constrained integer generation.
//!
//! [`BoundedIntegerGenerator`] is implemented for every [`EntropySource`], so
//! any source (including `&mut` borrows of one) gains the bounded operations:
//!
//! ```rust
//! use krand_core::{BoundedIntegerGenerator, Entropy, KRandError, Parity};
//!
//! let mut entropy = Entropy::from_seed(2024);
//!
//! let odd = entropy.next_odd_in_range(-9, 9).unwrap();
//! assert!(Parity::Odd.matches(odd));
//!
//! assert!(matches!(
//!     entropy.next_in_range(10, 1),
//!     Err(KRandError::InvalidRange { start: 10, end: 1 })
//! ));
//! ```
//!
//! # Upper Bound
//!
//! The range reduction is `(|raw| mod (end - start)) + start`. For
//! `start < end` this never yields `end`; callers that index into a slice of
//! length `n` with `next_in_range(0, n)` rely on that. A degenerate range
//! `[v, v]` returns `v` without drawing.

use std::fmt;

use crate::entropy::EntropySource;
use crate::error::{KRandError, Result};

/// Parity requested from a constrained draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Divisible by two.
    Even,
    /// Not divisible by two.
    Odd,
}

impl Parity {
    /// Returns the parity of `value`.
    #[inline]
    pub fn of(value: i32) -> Self {
        if value & 1 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// Returns `true` if `value` has this parity.
    #[inline]
    pub fn matches(self, value: i32) -> bool {
        Parity::of(value) == self
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => f.write_str("even"),
            Parity::Odd => f.write_str("odd"),
        }
    }
}

#[inline]
fn check_range(start: i32, end: i32) -> Result<()> {
    if end < start {
        return Err(KRandError::InvalidRange { start, end });
    }
    Ok(())
}

/// Integer draws constrained by an inclusive range and an optional parity.
///
/// All operations consume only [`EntropySource::next_int`]. Failures are
/// reported before anything is drawn.
pub trait BoundedIntegerGenerator: EntropySource {
    /// Returns the magnitude of one full-range draw.
    ///
    /// `i32::MIN` maps to `2^31`, which is why the result is unsigned.
    #[inline]
    fn next_positive_int(&mut self) -> u32 {
        self.next_int().unsigned_abs()
    }

    /// Returns a value in `[start, end]`.
    ///
    /// For `start < end` the result is always strictly below `end`; see the
    /// module documentation.
    ///
    /// # Errors
    ///
    /// [`KRandError::InvalidRange`] if `end < start`.
    fn next_in_range(&mut self, start: i32, end: i32) -> Result<i32> {
        check_range(start, end)?;

        let span = i64::from(end) - i64::from(start);
        if span == 0 {
            return Ok(start);
        }

        let offset = i64::from(self.next_positive_int()) % span;
        // start + offset < end, so the sum always fits in i32
        Ok((i64::from(start) + offset) as i32)
    }

    /// Returns an even value over the full `i32` range.
    ///
    /// An odd draw is moved up by one, wrapping `i32::MAX` to `i32::MIN`.
    #[inline]
    fn next_even(&mut self) -> i32 {
        let value = self.next_int();
        if Parity::Odd.matches(value) {
            value.wrapping_add(1)
        } else {
            value
        }
    }

    /// Returns an odd value over the full `i32` range.
    ///
    /// Always `next_even() + 1`; odd results are not sampled independently.
    #[inline]
    fn next_odd(&mut self) -> i32 {
        self.next_even().wrapping_add(1)
    }

    /// Returns an even value in `[start, end]`.
    ///
    /// # Errors
    ///
    /// - [`KRandError::InvalidRange`] if `end < start`
    /// - [`KRandError::UnsatisfiableConstraint`] if `start == end` and the
    ///   value is odd
    fn next_even_in_range(&mut self, start: i32, end: i32) -> Result<i32> {
        next_with_parity(self, start, end, Parity::Even)
    }

    /// Returns an odd value in `[start, end]`.
    ///
    /// # Errors
    ///
    /// - [`KRandError::InvalidRange`] if `end < start`
    /// - [`KRandError::UnsatisfiableConstraint`] if `start == end` and the
    ///   value is even
    fn next_odd_in_range(&mut self, start: i32, end: i32) -> Result<i32> {
        next_with_parity(self, start, end, Parity::Odd)
    }

    /// Dispatches to [`next_in_range`](Self::next_in_range) or one of the
    /// parity operations depending on `parity`.
    fn next_in_range_with_parity(
        &mut self,
        start: i32,
        end: i32,
        parity: Option<Parity>,
    ) -> Result<i32> {
        match parity {
            None => self.next_in_range(start, end),
            Some(Parity::Even) => self.next_even_in_range(start, end),
            Some(Parity::Odd) => self.next_odd_in_range(start, end),
        }
    }
}

impl<S: EntropySource + ?Sized> BoundedIntegerGenerator for S {}

fn next_with_parity<G>(generator: &mut G, start: i32, end: i32, parity: Parity) -> Result<i32>
where
    G: BoundedIntegerGenerator + ?Sized,
{
    check_range(start, end)?;
    if start == end && !parity.matches(start) {
        return Err(KRandError::UnsatisfiableConstraint {
            value: start,
            parity,
        });
    }

    let value = generator.next_in_range(start, end)?;
    if parity.matches(value) {
        return Ok(value);
    }

    // Nudge one step towards `end` when there is room, otherwise towards `start`.
    if value < end {
        Ok(value + 1)
    } else if value > start {
        Ok(value - 1)
    } else {
        // Only a degenerate range can get here, and it was rejected above.
        Err(KRandError::UnsatisfiableConstraint { value, parity })
    }
}
