//! Array command implementation
//!
//! Generates a single row of scalar values and writes it as one bracketed line.

use std::io::Write;

use krand_collections::{
    write_bool_matrix, write_matrix, BoolStyle, CollectionGenerator, Matrix, Scalar, ScalarKind,
    DEFAULT_TRUE_PROBABILITY,
};
use krand_core::EntropySource;
use tracing::info;

use crate::{CliError, Result};

/// Rejects a probability for anything but boolean output.
pub(crate) fn check_probability_kind(kind: ScalarKind, probability: Option<f64>) -> Result<()> {
    if probability.is_some() && kind != ScalarKind::Boolean {
        return Err(CliError::InvalidArgument(format!(
            "--probability only applies to bool, not {}",
            kind
        )));
    }
    Ok(())
}

fn write_row<T, S, W>(
    generator: &mut CollectionGenerator<S>,
    out: &mut W,
    size: usize,
) -> Result<()>
where
    T: Scalar,
    S: EntropySource,
    W: Write,
{
    let row = Matrix::from_rows(vec![generator.array::<T>(size)]);
    write_matrix(out, &row)?;
    Ok(())
}

/// Run the array command
pub fn run<S, W>(
    generator: &mut CollectionGenerator<S>,
    out: &mut W,
    kind: ScalarKind,
    size: usize,
    probability: Option<f64>,
    style: BoolStyle,
) -> Result<()>
where
    S: EntropySource,
    W: Write,
{
    check_probability_kind(kind, probability)?;
    info!(%kind, size, "generating array");

    match kind {
        ScalarKind::Int => write_row::<i32, _, _>(generator, out, size),
        ScalarKind::Long => write_row::<i64, _, _>(generator, out, size),
        ScalarKind::Float => write_row::<f32, _, _>(generator, out, size),
        ScalarKind::Double => write_row::<f64, _, _>(generator, out, size),
        ScalarKind::Boolean => {
            let p = probability.unwrap_or(DEFAULT_TRUE_PROBABILITY);
            let row = Matrix::from_rows(vec![generator.bool_array(size, p)?]);
            write_bool_matrix(out, &row, style)?;
            Ok(())
        }
    }
}
