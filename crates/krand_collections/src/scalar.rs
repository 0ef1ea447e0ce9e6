//! The closed set of scalar element types.
//!
//! [`Scalar`] is sealed: collections are generated for exactly `i32`, `i64`,
//! `f32`, `f64`, and `bool`. [`ScalarKind`] names the same set at runtime, for
//! callers that pick the element type from user input.

use std::fmt;
use std::str::FromStr;

use krand_core::EntropySource;
use thiserror::Error;

use crate::generator::DEFAULT_TRUE_PROBABILITY;

mod private {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
}

/// An element type that can be drawn directly from an [`EntropySource`].
///
/// | Type   | Values            |
/// |--------|-------------------|
/// | `i32`  | full range        |
/// | `i64`  | full range        |
/// | `f32`  | `[0, 1)`          |
/// | `f64`  | `[0, 1)`          |
/// | `bool` | `true` with p=0.5 |
pub trait Scalar: Copy + fmt::Debug + private::Sealed {
    /// Runtime tag of this type.
    const KIND: ScalarKind;

    /// Draws one unconstrained value.
    fn draw<S: EntropySource + ?Sized>(source: &mut S) -> Self;
}

impl Scalar for i32 {
    const KIND: ScalarKind = ScalarKind::Int;

    #[inline]
    fn draw<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        source.next_int()
    }
}

impl Scalar for i64 {
    const KIND: ScalarKind = ScalarKind::Long;

    #[inline]
    fn draw<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        source.next_long()
    }
}

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::Float;

    #[inline]
    fn draw<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        source.next_float()
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Double;

    #[inline]
    fn draw<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        source.next_double()
    }
}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Boolean;

    /// Same comparison as a probability draw at 0.5, so a default boolean
    /// array matches `bool_array(size, 0.5)` draw for draw.
    #[inline]
    fn draw<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        source.next_double() < DEFAULT_TRUE_PROBABILITY
    }
}

/// Error returned when parsing an unknown [`ScalarKind`] name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown scalar kind: {0}. Supported: int, long, float, double, bool")]
pub struct UnknownScalarKind(pub String);

/// Runtime tag for the supported scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `i32`
    Int,
    /// `i64`
    Long,
    /// `f32`
    Float,
    /// `f64`
    Double,
    /// `bool`
    Boolean,
}

impl ScalarKind {
    /// All kinds, in declaration order.
    pub const ALL: [ScalarKind; 5] = [
        ScalarKind::Int,
        ScalarKind::Long,
        ScalarKind::Float,
        ScalarKind::Double,
        ScalarKind::Boolean,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::Int => "int",
            ScalarKind::Long => "long",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
            ScalarKind::Boolean => "bool",
        }
    }
}

impl FromStr for ScalarKind {
    type Err = UnknownScalarKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" | "i32" => Ok(ScalarKind::Int),
            "long" | "i64" => Ok(ScalarKind::Long),
            "float" | "f32" => Ok(ScalarKind::Float),
            "double" | "f64" => Ok(ScalarKind::Double),
            "bool" | "boolean" => Ok(ScalarKind::Boolean),
            _ => Err(UnknownScalarKind(s.to_string())),
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
