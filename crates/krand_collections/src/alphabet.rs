//! Character sets for string generation.

use krand_core::{KRandError, Result};

const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// Printable range, inclusive. `'~'` (126) is left out.
const PRINTABLE_FIRST: u8 = 32;
const PRINTABLE_LAST: u8 = 125;

/// A non-empty ordered set of characters.
///
/// Strings draw one index per position with `next_in_range(0, len)`, so
/// every character of the alphabet can be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from arbitrary characters, keeping their order.
    ///
    /// # Errors
    ///
    /// - [`KRandError::EmptyAlphabet`] if `chars` is empty
    /// - [`KRandError::AlphabetTooLarge`] if it holds more than `i32::MAX` characters
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(KRandError::EmptyAlphabet);
        }
        if i32::try_from(chars.len()).is_err() {
            return Err(KRandError::AlphabetTooLarge(chars.len()));
        }
        Ok(Self { chars })
    }

    /// ASCII 32 (space) through 125 (`}`).
    pub fn printable() -> Self {
        Self {
            chars: (PRINTABLE_FIRST..=PRINTABLE_LAST).map(char::from).collect(),
        }
    }

    /// `A-Z` followed by `a-z`.
    pub fn alphabetic() -> Self {
        Self {
            chars: LATIN.chars().collect(),
        }
    }

    /// `0-9`.
    pub fn numeric() -> Self {
        Self {
            chars: DIGITS.chars().collect(),
        }
    }

    /// Number of characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Never `true` for a constructed alphabet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters, in order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length as a range bound. Construction guarantees it fits.
    pub(crate) fn bound(&self) -> i32 {
        self.chars.len() as i32
    }
}
