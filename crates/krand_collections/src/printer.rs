//! Matrix pretty-printing.
//!
//! Every row becomes one line holding a bracketed, comma-separated list:
//!
//! ```text
//! [12, -7, 3]
//! [0, 44, -1]
//! ```
//!
//! Boolean matrices can instead be rendered with `1` and `0`
//! ([`BoolStyle::Digits`]); the brackets and separators stay the same.

use std::fmt;
use std::io::{self, Write};

use tracing::warn;

use crate::matrix::Matrix;

/// Rendering of boolean cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoolStyle {
    /// `true` / `false`
    #[default]
    Words,
    /// `1` / `0`
    Digits,
}

pub(crate) fn format_row<T: fmt::Debug>(row: &[T]) -> String {
    format!("{:?}", row)
}

fn format_bool_row(row: &[bool], style: BoolStyle) -> String {
    match style {
        BoolStyle::Words => format_row(row),
        BoolStyle::Digits => format_row(&row.iter().map(|&b| u8::from(b)).collect::<Vec<_>>()),
    }
}

fn write_lines<W, I>(out: &mut W, lines: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = String>,
{
    for line in lines {
        writeln!(out, "{}", line)?;
        out.flush()?;
    }
    Ok(())
}

/// Writes one line per row of `matrix` to `out`, flushing after each line.
pub fn write_matrix<T, W>(out: &mut W, matrix: &Matrix<T>) -> io::Result<()>
where
    T: fmt::Debug,
    W: Write + ?Sized,
{
    write_lines(out, matrix.iter_rows().map(format_row))
}

/// Writes a boolean matrix to `out` in the given style.
pub fn write_bool_matrix<W>(out: &mut W, matrix: &Matrix<bool>, style: BoolStyle) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write_lines(out, matrix.iter_rows().map(|row| format_bool_row(row, style)))
}

/// Prints `matrix` to standard output.
///
/// Write failures are logged and otherwise ignored.
pub fn print_matrix<T: fmt::Debug>(matrix: &Matrix<T>) {
    if let Err(err) = write_matrix(&mut io::stdout().lock(), matrix) {
        warn!(error = %err, "failed to print matrix");
    }
}

/// Prints a boolean matrix to standard output in the given style.
///
/// Write failures are logged and otherwise ignored.
pub fn print_bool_matrix(matrix: &Matrix<bool>, style: BoolStyle) {
    if let Err(err) = write_bool_matrix(&mut io::stdout().lock(), matrix, style) {
        warn!(error = %err, "failed to print matrix");
    }
}
