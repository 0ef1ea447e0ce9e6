//! The entropy source contract.

/// A source of uniformly distributed primitive values.
///
/// Bounded and collection generation only ever talk to this trait, which keeps
/// them independent of the concrete generator. Tests substitute scripted
/// sources to pin down edge cases that a real generator would rarely hit.
///
/// Only [`next_int`](EntropySource::next_int) is required by the bounded
/// integer logic; the remaining methods serve unconstrained collections.
pub trait EntropySource {
    /// Returns a uniformly distributed `i32` over its full range.
    fn next_int(&mut self) -> i32;

    /// Returns a uniformly distributed `i64` over its full range.
    fn next_long(&mut self) -> i64;

    /// Returns a uniformly distributed `f32` in `[0, 1)`.
    fn next_float(&mut self) -> f32;

    /// Returns a uniformly distributed `f64` in `[0, 1)`.
    fn next_double(&mut self) -> f64;

    /// Returns `true` or `false` with equal probability.
    fn next_boolean(&mut self) -> bool;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    #[inline]
    fn next_int(&mut self) -> i32 {
        (**self).next_int()
    }

    #[inline]
    fn next_long(&mut self) -> i64 {
        (**self).next_long()
    }

    #[inline]
    fn next_float(&mut self) -> f32 {
        (**self).next_float()
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        (**self).next_double()
    }

    #[inline]
    fn next_boolean(&mut self) -> bool {
        (**self).next_boolean()
    }
}
