//! The `MatrixLike` capability contract.

use crate::error::{MatriksError, Result};
use serde::{Deserialize, Serialize};

/// Physical storage class of a matrix.
///
/// Operations use this as a hint when choosing the representation of their
/// result (see [`crate::ops::Promotion`]). It never changes numeric results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Storage {
    /// Every cell is stored.
    Dense,
    /// Only non-zero cells are stored.
    Sparse,
}

/// Shape and element access shared by every matrix representation.
///
/// Implementors only have to provide [`rows`](MatrixLike::rows),
/// [`cols`](MatrixLike::cols) and [`get`](MatrixLike::get). The iteration
/// methods have defaults that scan every cell; representations that know
/// where their non-zeros are should override them so that sparse-aware
/// algorithms run in time proportional to the stored entries.
///
/// The trait is object safe, so `&dyn MatrixLike` works wherever a generic
/// `A: MatrixLike + ?Sized` is accepted.
///
/// # Examples
///
/// ```
/// use matriks::primitives::{DenseMatrix, MatrixLike, SparseMatrix};
///
/// let dense = DenseMatrix::from_rows(&[vec![1.0, 0.0], vec![0.0, 2.0]]).unwrap();
/// let sparse = SparseMatrix::from_rows(&[vec![1.0, 0.0], vec![0.0, 2.0]]).unwrap();
///
/// for m in [&dense as &dyn MatrixLike, &sparse] {
///     assert_eq!(m.shape(), (2, 2));
///     assert_eq!(m.get(1, 1), 2.0);
///     assert_eq!(m.nnz(), 2);
/// }
/// ```
pub trait MatrixLike: Sync {
    /// Returns the number of rows.
    fn rows(&self) -> usize;

    /// Returns the number of columns.
    fn cols(&self) -> usize;

    /// Gets the element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    fn get(&self, row: usize, col: usize) -> f64;

    /// Returns the shape as (rows, cols).
    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Returns the storage class of this representation.
    fn storage(&self) -> Storage {
        Storage::Dense
    }

    /// Gets the element at (row, col), checking bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::IndexOutOfBounds`] if the coordinate is outside the shape.
    fn try_get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows() || col >= self.cols() {
            return Err(MatriksError::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
            });
        }
        Ok(self.get(row, col))
    }

    /// Returns a copy of one row.
    fn row(&self, row: usize) -> Vec<f64> {
        (0..self.cols()).map(|col| self.get(row, col)).collect()
    }

    /// Returns a copy of one column.
    fn column(&self, col: usize) -> Vec<f64> {
        (0..self.rows()).map(|row| self.get(row, col)).collect()
    }

    /// Iterates the non-zero cells of one row as `(col, value)` in column order.
    fn row_nonzeros(&self, row: usize) -> Box<dyn Iterator<Item = (usize, f64)> + '_> {
        Box::new((0..self.cols()).filter_map(move |col| {
            let value = self.get(row, col);
            (value != 0.0).then_some((col, value))
        }))
    }

    /// Iterates all non-zero cells as `(row, col, value)` in row-major order.
    fn nonzeros(&self) -> Box<dyn Iterator<Item = (usize, usize, f64)> + '_> {
        Box::new(
            (0..self.rows())
                .flat_map(move |row| self.row_nonzeros(row).map(move |(col, v)| (row, col, v))),
        )
    }

    /// Returns the number of non-zero cells.
    fn nnz(&self) -> usize {
        self.nonzeros().count()
    }
}

/// Compares two matrices element-wise, regardless of representation.
///
/// Returns false when the shapes differ.
///
/// # Examples
///
/// ```
/// use matriks::primitives::{approx_eq, DenseMatrix, SparseMatrix};
///
/// let dense = DenseMatrix::identity(3);
/// let sparse = SparseMatrix::identity(3);
/// assert!(approx_eq(&dense, &sparse, 0.0));
/// ```
pub fn approx_eq<A, B>(a: &A, b: &B, tolerance: f64) -> bool
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    if a.shape() != b.shape() {
        return false;
    }
    (0..a.rows()).all(|i| (0..a.cols()).all(|j| (a.get(i, j) - b.get(i, j)).abs() <= tolerance))
}
