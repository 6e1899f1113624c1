//! Tagged result type of matrix operations.

use super::{DenseMatrix, MatrixLike, SparseMatrix, Storage};
use std::fmt;

/// A matrix in either representation.
///
/// Binary operations return `Matrix` because the representation of their
/// result depends on their operands (see [`crate::ops::Promotion`]).
/// `Matrix` is itself [`MatrixLike`], so results feed straight back into
/// further operations.
///
/// # Examples
///
/// ```
/// use matriks::ops;
/// use matriks::primitives::{DenseMatrix, Matrix, MatrixLike, SparseMatrix};
///
/// let a = SparseMatrix::identity(2);
/// let b = DenseMatrix::identity(2);
///
/// let sum = ops::add(&a, &b).unwrap();
/// assert!(matches!(sum, Matrix::Dense(_)));
/// assert_eq!(sum.get(0, 0), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Matrix {
    /// Every cell stored.
    Dense(DenseMatrix),
    /// Only non-zero cells stored.
    Sparse(SparseMatrix),
}

impl Matrix {
    /// Returns true for the sparse variant.
    #[must_use]
    pub fn is_sparse(&self) -> bool {
        matches!(self, Matrix::Sparse(_))
    }

    /// Returns the dense matrix, if this is the dense variant.
    #[must_use]
    pub fn as_dense(&self) -> Option<&DenseMatrix> {
        match self {
            Matrix::Dense(m) => Some(m),
            Matrix::Sparse(_) => None,
        }
    }

    /// Returns the sparse matrix, if this is the sparse variant.
    #[must_use]
    pub fn as_sparse(&self) -> Option<&SparseMatrix> {
        match self {
            Matrix::Dense(_) => None,
            Matrix::Sparse(m) => Some(m),
        }
    }

    /// Converts into dense storage, materializing a sparse matrix if needed.
    #[must_use]
    pub fn into_dense(self) -> DenseMatrix {
        match self {
            Matrix::Dense(m) => m,
            Matrix::Sparse(m) => m.to_dense(),
        }
    }

    fn inner(&self) -> &dyn MatrixLike {
        match self {
            Matrix::Dense(m) => m,
            Matrix::Sparse(m) => m,
        }
    }
}

impl MatrixLike for Matrix {
    fn rows(&self) -> usize {
        self.inner().rows()
    }

    fn cols(&self) -> usize {
        self.inner().cols()
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.inner().get(row, col)
    }

    fn storage(&self) -> Storage {
        self.inner().storage()
    }

    fn row(&self, row: usize) -> Vec<f64> {
        self.inner().row(row)
    }

    fn column(&self, col: usize) -> Vec<f64> {
        self.inner().column(col)
    }

    fn row_nonzeros(&self, row: usize) -> Box<dyn Iterator<Item = (usize, f64)> + '_> {
        self.inner().row_nonzeros(row)
    }

    fn nonzeros(&self) -> Box<dyn Iterator<Item = (usize, usize, f64)> + '_> {
        self.inner().nonzeros()
    }

    fn nnz(&self) -> usize {
        self.inner().nnz()
    }
}

impl From<DenseMatrix> for Matrix {
    fn from(m: DenseMatrix) -> Self {
        Matrix::Dense(m)
    }
}

impl From<SparseMatrix> for Matrix {
    fn from(m: SparseMatrix) -> Self {
        Matrix::Sparse(m)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matrix::Dense(m) => fmt::Display::fmt(m, f),
            Matrix::Sparse(m) => fmt::Display::fmt(m, f),
        }
    }
}
