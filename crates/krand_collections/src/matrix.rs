//! Immutable row-major matrix snapshots.
//!
//! ```text
//!   cols
//!   _ _ _ _
//! r|_|_|_|_|
//! o|_|_|_|_|
//! w|_|_|_|_|
//! s|_|_|_|_|
//! ```

use std::fmt;
use std::ops::Index;

use crate::printer::format_row;

/// A matrix stored as independent rows.
///
/// Generated matrices are rectangular. [`Matrix::from_rows`] accepts ragged
/// input as well, in which case [`cols`](Matrix::cols) reports the length of
/// the first row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix<T> {
    data: Vec<Vec<T>>,
}

impl<T> Matrix<T> {
    /// Wraps existing rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self { data: rows }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    /// Length of the first row, or 0 for a matrix without rows.
    #[inline]
    pub fn cols(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Returns `true` if the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(Vec::is_empty)
    }

    /// Returns row `i`.
    pub fn row(&self, i: usize) -> Option<&[T]> {
        self.data.get(i).map(Vec::as_slice)
    }

    /// Returns the element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        self.data.get(i)?.get(j)
    }

    /// Iterates over the rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Consumes the matrix, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i][j]
    }
}

impl<T> From<Vec<Vec<T>>> for Matrix<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(rows)
    }
}

/// One bracketed row per line, as written by [`write_matrix`](crate::write_matrix).
impl<T: fmt::Debug> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&format_row(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_access() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m[(1, 2)], 6);
        assert_eq!(m.get(0, 1), Some(&2));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(1), Some(&[4, 5, 6][..]));
        assert!(!m.is_empty());
    }

    #[test]
    fn test_empty_shapes() {
        let none: Matrix<i32> = Matrix::default();
        assert_eq!((none.rows(), none.cols()), (0, 0));
        assert!(none.is_empty());

        let hollow: Matrix<i32> = Matrix::from_rows(vec![vec![], vec![]]);
        assert_eq!((hollow.rows(), hollow.cols()), (2, 0));
        assert!(hollow.is_empty());
    }

    #[test]
    fn test_display() {
        let m = Matrix::from(vec![vec![1, -2], vec![30, 4]]);
        assert_eq!(m.to_string(), "[1, -2]\n[30, 4]");

        let b = Matrix::from(vec![vec![true, false]]);
        assert_eq!(b.to_string(), "[true, false]");
    }

    #[test]
    fn test_into_rows() {
        let rows = vec![vec![0.5_f64], vec![0.25]];
        assert_eq!(Matrix::from_rows(rows.clone()).into_rows(), rows);
    }
}
