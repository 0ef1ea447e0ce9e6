//! Arrays, matrices, and strings drawn from an entropy source.

use krand_core::{BoundedIntegerGenerator, Entropy, EntropySource, KRandError, Result};
use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Probability of `true` used when none is given.
pub const DEFAULT_TRUE_PROBABILITY: f64 = 0.5;

fn check_probability(probability: f64) -> Result<()> {
    // NaN fails `contains` as well
    if !(0.0..=1.0).contains(&probability) {
        return Err(KRandError::InvalidProbability(probability));
    }
    Ok(())
}

/// Generates collections from an owned or borrowed [`EntropySource`].
///
/// Pass `&mut entropy` to keep using the source afterwards, or move it in and
/// recover it with [`into_inner`](Self::into_inner).
///
/// # Examples
///
/// ```rust
/// use krand_collections::CollectionGenerator;
/// use krand_core::Entropy;
///
/// let mut entropy = Entropy::from_seed(9);
/// let mut generator = CollectionGenerator::new(&mut entropy);
///
/// let longs: Vec<i64> = generator.array(4);
/// let unit = generator.matrix::<f32>(2, 2);
/// assert_eq!(longs.len(), 4);
/// assert!(unit.iter_rows().flatten().all(|v| (0.0..1.0).contains(v)));
/// ```
#[derive(Debug)]
pub struct CollectionGenerator<S> {
    source: S,
}

impl<S: EntropySource> CollectionGenerator<S> {
    /// Wraps an entropy source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the underlying source mutably, e.g. to switch its mode.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the generator, returning the source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Returns `size` unconstrained values of `T`.
    pub fn array<T: Scalar>(&mut self, size: usize) -> Vec<T> {
        let kind = T::KIND;
        trace!(%kind, size, "generating array");
        (0..size).map(|_| T::draw(&mut self.source)).collect()
    }

    /// Returns `size` booleans, each `true` with the given probability.
    ///
    /// # Errors
    ///
    /// [`KRandError::InvalidProbability`] if `probability` is outside `[0, 1]`.
    pub fn bool_array(&mut self, size: usize, probability: f64) -> Result<Vec<bool>> {
        check_probability(probability)?;
        Ok(self.draw_bools(size, probability))
    }

    fn draw_bools(&mut self, size: usize, probability: f64) -> Vec<bool> {
        trace!(size, probability, "generating boolean array");
        // strict comparison: 0.0 never yields true, 1.0 always does
        (0..size)
            .map(|_| self.source.next_double() < probability)
            .collect()
    }

    /// Returns a `rows` x `cols` matrix, one independent array per row.
    pub fn matrix<T: Scalar>(&mut self, rows: usize, cols: usize) -> Matrix<T> {
        let kind = T::KIND;
        debug!(%kind, rows, cols, "generating matrix");
        (0..rows)
            .map(|_| self.array(cols))
            .collect::<Vec<_>>()
            .into()
    }

    /// Returns a `rows` x `cols` boolean matrix with the given probability of `true`.
    ///
    /// # Errors
    ///
    /// [`KRandError::InvalidProbability`] if `probability` is outside `[0, 1]`.
    /// Nothing is drawn in that case.
    pub fn bool_matrix(
        &mut self,
        rows: usize,
        cols: usize,
        probability: f64,
    ) -> Result<Matrix<bool>> {
        check_probability(probability)?;
        debug!(rows, cols, probability, "generating boolean matrix");
        Ok((0..rows)
            .map(|_| self.draw_bools(cols, probability))
            .collect::<Vec<_>>()
            .into())
    }

    /// Returns a string of `len` characters drawn independently from `alphabet`.
    ///
    /// Each index comes from `next_in_range(0, alphabet.len())`, which covers
    /// every position of the alphabet.
    pub fn string(&mut self, len: usize, alphabet: &Alphabet) -> Result<String> {
        trace!(len, alphabet_len = alphabet.len(), "generating string");
        let chars = alphabet.chars();
        (0..len)
            .map(|_| {
                let index = self.source.next_in_range(0, alphabet.bound())?;
                Ok(chars[index as usize])
            })
            .collect()
    }

    /// Returns a string of visible ASCII characters (see [`Alphabet::printable`]).
    pub fn printable_string(&mut self, len: usize) -> Result<String> {
        self.string(len, &Alphabet::printable())
    }

    /// Returns a string of Latin letters (see [`Alphabet::alphabetic`]).
    pub fn alphabetic_string(&mut self, len: usize) -> Result<String> {
        self.string(len, &Alphabet::alphabetic())
    }

    /// Returns a string of decimal digits (see [`Alphabet::numeric`]).
    pub fn numeric_string(&mut self, len: usize) -> Result<String> {
        self.string(len, &Alphabet::numeric())
    }
}

impl Default for CollectionGenerator<Entropy> {
    fn default() -> Self {
        Self::new(Entropy::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn seeded(seed: u64) -> CollectionGenerator<Entropy> {
        CollectionGenerator::new(Entropy::from_seed(seed))
    }

    #[test]
    fn test_array_sizes() {
        let mut generator = seeded(1);
        assert_eq!(generator.array::<i32>(0).len(), 0);
        assert_eq!(generator.array::<i64>(17).len(), 17);
        assert_eq!(generator.array::<bool>(5).len(), 5);
    }

    #[test]
    fn test_float_arrays_in_unit_interval() {
        let mut generator = seeded(2);
        let floats: Vec<f32> = generator.array(5_000);
        let doubles: Vec<f64> = generator.array(5_000);
        assert!(floats.iter().all(|v| (0.0..1.0).contains(v)));
        assert!(doubles.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_bool_probability_extremes() {
        let mut generator = seeded(3);
        assert!(generator.bool_array(1000, 0.0).unwrap().iter().all(|&b| !b));
        assert!(generator.bool_array(1000, 1.0).unwrap().iter().all(|&b| b));
    }

    #[test]
    fn test_bool_probability_rejected() {
        let mut generator = seeded(4);
        for p in [-0.1, 1.000_001, f64::NAN, f64::INFINITY] {
            let err = generator.bool_array(10, p).unwrap_err();
            assert!(matches!(err, KRandError::InvalidProbability(_)));
        }
        assert!(generator.bool_matrix(2, 2, 2.0).is_err());
    }

    /// A rejected probability must leave the source untouched.
    #[test]
    fn test_rejected_probability_draws_nothing() {
        let mut generator = seeded(5);
        let mut reference = Entropy::from_seed(5);

        assert!(generator.bool_matrix(3, 3, -1.0).is_err());
        assert_eq!(generator.source_mut().next_long(), reference.next_long());
    }

    #[test]
    fn test_bool_probability_ratio() {
        let mut generator = seeded(6);
        let sample = generator.bool_array(50_000, 0.3).unwrap();
        let ratio = sample.iter().filter(|&&b| b).count() as f64 / sample.len() as f64;
        assert_abs_diff_eq!(ratio, 0.3, epsilon = 0.02);
    }

    #[test]
    fn test_default_bool_array_matches_half_probability() {
        let mut plain = seeded(7);
        let mut explicit = seeded(7);
        assert_eq!(
            plain.array::<bool>(64),
            explicit.bool_array(64, DEFAULT_TRUE_PROBABILITY).unwrap()
        );
    }

    #[test]
    fn test_matrix_shape() {
        let mut generator = seeded(8);
        let m = generator.matrix::<i32>(3, 4);
        assert_eq!(m.rows(), 3);
        assert!(m.iter_rows().all(|row| row.len() == 4));

        let b = generator.bool_matrix(2, 7, 0.5).unwrap();
        assert_eq!((b.rows(), b.cols()), (2, 7));
    }

    /// Rows are consecutive independent arrays from the same stream.
    #[test]
    fn test_matrix_rows_are_sequential_arrays() {
        let mut by_matrix = seeded(9);
        let mut by_array = seeded(9);

        let m = by_matrix.matrix::<i64>(3, 2);
        for row in m.iter_rows() {
            assert_eq!(row, by_array.array::<i64>(2).as_slice());
        }
    }

    #[test]
    fn test_numeric_string() {
        let mut generator = seeded(10);
        let s = generator.numeric_string(10).unwrap();
        assert_eq!(s.chars().count(), 10);
        assert!(s.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_string_reaches_every_character() {
        let mut generator = seeded(11);
        let digits = generator.numeric_string(5_000).unwrap();
        assert!(('0'..='9').all(|c| digits.contains(c)));

        let letters = generator.alphabetic_string(5_000).unwrap();
        assert!(letters.contains('A') && letters.contains('z'));
        assert!(letters.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_printable_string_excludes_tilde() {
        let mut generator = seeded(11);
        let printable = generator.printable_string(5_000).unwrap();
        assert!(!printable.contains('~'));
        assert!(printable.contains(' ') && printable.contains('}'));
        assert!(printable.chars().all(|c| (' '..'~').contains(&c)));
    }

    #[test]
    fn test_single_character_alphabet() {
        let mut generator = seeded(12);
        let only = Alphabet::new(['x']).unwrap();
        assert_eq!(generator.string(4, &only).unwrap(), "xxxx");
    }

    #[test]
    fn test_borrowed_source_keeps_state() {
        let mut entropy = Entropy::from_seed(13);
        let mut reference = Entropy::from_seed(13);

        let first: Vec<i32> = CollectionGenerator::new(&mut entropy).array(3);
        let expected: Vec<i32> = (0..3).map(|_| reference.next_int()).collect();
        assert_eq!(first, expected);
        assert_eq!(entropy.next_int(), reference.next_int());
    }

    #[test]
    fn test_secure_source() {
        let mut generator = CollectionGenerator::new(Entropy::secure());
        assert_eq!(generator.matrix::<f64>(2, 3).rows(), 2);
        generator.source_mut().use_secure(false);
        assert!(!generator.source().is_secure());
    }
}
