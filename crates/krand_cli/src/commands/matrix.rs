//! Matrix command implementation
//!
//! Generates a `rows` x `cols` matrix and pretty-prints it, one row per line.

use std::io::Write;

use krand_collections::{
    write_bool_matrix, write_matrix, BoolStyle, CollectionGenerator, Scalar, ScalarKind,
    DEFAULT_TRUE_PROBABILITY,
};
use krand_core::EntropySource;
use tracing::info;

use super::array::check_probability_kind;
use crate::Result;

fn write_generated<T, S, W>(
    generator: &mut CollectionGenerator<S>,
    out: &mut W,
    rows: usize,
    cols: usize,
) -> Result<()>
where
    T: Scalar,
    S: EntropySource,
    W: Write,
{
    write_matrix(out, &generator.matrix::<T>(rows, cols))?;
    Ok(())
}

/// Run the matrix command
pub fn run<S, W>(
    generator: &mut CollectionGenerator<S>,
    out: &mut W,
    kind: ScalarKind,
    (rows, cols): (usize, usize),
    probability: Option<f64>,
    style: BoolStyle,
) -> Result<()>
where
    S: EntropySource,
    W: Write,
{
    check_probability_kind(kind, probability)?;
    info!(%kind, rows, cols, "generating matrix");

    match kind {
        ScalarKind::Int => write_generated::<i32, _, _>(generator, out, rows, cols),
        ScalarKind::Long => write_generated::<i64, _, _>(generator, out, rows, cols),
        ScalarKind::Float => write_generated::<f32, _, _>(generator, out, rows, cols),
        ScalarKind::Double => write_generated::<f64, _, _>(generator, out, rows, cols),
        ScalarKind::Boolean => {
            let p = probability.unwrap_or(DEFAULT_TRUE_PROBABILITY);
            let matrix = generator.bool_matrix(rows, cols, p)?;
            write_bool_matrix(out, &matrix, style)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krand_core::Entropy;

    fn render(seed: u64, kind: ScalarKind, shape: (usize, usize)) -> String {
        let mut generator = CollectionGenerator::new(Entropy::from_seed(seed));
        let mut out = Vec::new();
        run(
            &mut generator,
            &mut out,
            kind,
            shape,
            None,
            BoolStyle::Words,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_matrix_lines() {
        let text = render(4, ScalarKind::Long, (3, 4));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.matches(", ").count() == 3));
    }

    #[test]
    fn test_seeded_output_is_stable() {
        assert_eq!(
            render(99, ScalarKind::Int, (3, 4)),
            render(99, ScalarKind::Int, (3, 4))
        );
    }

    #[test]
    fn test_bool_zero_probability() {
        let mut generator = CollectionGenerator::new(Entropy::from_seed(5));
        let mut out = Vec::new();
        run(
            &mut generator,
            &mut out,
            ScalarKind::Boolean,
            (2, 2),
            Some(0.0),
            BoolStyle::Digits,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[0, 0]\n[0, 0]\n");
    }
}
