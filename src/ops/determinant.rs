//! Determinant by cofactor expansion.

use crate::error::{MatriksError, Result};
use crate::primitives::{DenseMatrix, MatrixLike};
use tracing::warn;

/// Size above which [`determinant`] logs a warning.
///
/// Cofactor expansion is O(n!) in the worst case; matrices of tens of rows
/// are the practical ceiling. Larger inputs are still computed.
pub const DETERMINANT_SIZE_HINT: usize = 10;

/// Computes the determinant of a square matrix.
///
/// Uses recursive cofactor expansion along the first row: for each column
/// `c`, `(-1)^c * A[0][c] * det(minor(0, c))`. The 1x1 and 2x2 cases are
/// computed directly. A 0x0 matrix has determinant 1.
///
/// This is a reference algorithm, not a fast one. Its cost grows
/// factorially with the size (first-row zeros are skipped, which helps
/// sparse inputs), so bounding the input size is the caller's job.
///
/// A skipped zero in the first row drops its whole cofactor term, so a
/// minor holding infinity or NaN does not turn the result into NaN.
///
/// # Errors
///
/// Returns [`MatriksError::NotSquare`] if `rows != cols`.
///
/// # Examples
///
/// ```
/// use matriks::ops::determinant;
/// use matriks::primitives::DenseMatrix;
///
/// let m = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(determinant(&m).unwrap(), -2.0);
/// ```
pub fn determinant<A: MatrixLike + ?Sized>(a: &A) -> Result<f64> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(MatriksError::NotSquare { rows, cols });
    }
    if rows > DETERMINANT_SIZE_HINT {
        warn!(
            size = rows,
            limit = DETERMINANT_SIZE_HINT,
            "cofactor determinant on a large matrix may not finish in reasonable time"
        );
    }
    Ok(cofactor_expansion(&DenseMatrix::from_matrix_like(a)))
}

fn cofactor_expansion(m: &DenseMatrix) -> f64 {
    match m.rows() {
        0 => 1.0,
        1 => m.get(0, 0),
        2 => m.get(0, 0) * m.get(1, 1) - m.get(0, 1) * m.get(1, 0),
        n => (0..n)
            .filter(|&c| m.get(0, c) != 0.0)
            .map(|c| {
                let sign = if c % 2 == 0 { 1.0 } else { -1.0 };
                sign * m.get(0, c) * cofactor_expansion(&minor(m, 0, c))
            })
            .sum(),
    }
}

/// The matrix without row `skip_row` and column `skip_col`.
fn minor(m: &DenseMatrix, skip_row: usize, skip_col: usize) -> DenseMatrix {
    let n = m.rows() - 1;
    DenseMatrix::from_fn(n, n, |i, j| {
        let src_i = if i >= skip_row { i + 1 } else { i };
        let src_j = if j >= skip_col { j + 1 } else { j };
        m.get(src_i, src_j)
    })
}
