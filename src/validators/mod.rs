//! Structural predicates over any [`MatrixLike`].
//!
//! Validators never fail and never build new matrices: a non-square input
//! simply answers `false`.

use crate::primitives::MatrixLike;

/// Returns true if the matrix has as many rows as columns.
#[must_use]
pub fn is_square<A: MatrixLike + ?Sized>(a: &A) -> bool {
    a.rows() == a.cols()
}

/// Returns true if the matrix is square with ones on the diagonal and zeros elsewhere.
///
/// Stops at the first cell that violates the pattern.
///
/// # Examples
///
/// ```
/// use matriks::primitives::{DenseMatrix, SparseMatrix};
/// use matriks::validators::is_identity;
///
/// assert!(is_identity(&SparseMatrix::identity(4)));
/// assert!(!is_identity(&DenseMatrix::zeros(2, 3)));
/// ```
#[must_use]
pub fn is_identity<A: MatrixLike + ?Sized>(a: &A) -> bool {
    if !is_square(a) {
        return false;
    }
    (0..a.rows()).all(|i| {
        (0..a.cols()).all(|j| {
            let expected = if i == j { 1.0 } else { 0.0 };
            a.get(i, j) == expected
        })
    })
}

/// Returns true if the matrix is square and equal to its transpose.
///
/// Only the strict upper triangle is compared against the lower one.
///
/// # Examples
///
/// ```
/// use matriks::primitives::DenseMatrix;
/// use matriks::validators::is_symmetric;
///
/// let sym = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 1.0]]).unwrap();
/// let asym = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 1.0]]).unwrap();
/// assert!(is_symmetric(&sym));
/// assert!(!is_symmetric(&asym));
/// ```
#[must_use]
pub fn is_symmetric<A: MatrixLike + ?Sized>(a: &A) -> bool {
    if !is_square(a) {
        return false;
    }
    let n = a.rows();
    (0..n).all(|i| (i + 1..n).all(|j| a.get(i, j) == a.get(j, i)))
}
