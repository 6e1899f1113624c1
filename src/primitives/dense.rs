//! Dense matrix representation (row-major storage).

use super::MatrixLike;
use crate::error::{MatriksError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D matrix of `f64` values with every cell stored (row-major).
///
/// Immutable after construction: operations in [`crate::ops`] return new
/// matrices and never modify their operands.
///
/// # Examples
///
/// ```
/// use matriks::primitives::{DenseMatrix, MatrixLike};
///
/// let m = DenseMatrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDense")]
pub struct DenseMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Unchecked wire form, validated through [`DenseMatrix::from_vec`].
#[derive(Deserialize)]
struct RawDense {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TryFrom<RawDense> for DenseMatrix {
    type Error = MatriksError;

    fn try_from(raw: RawDense) -> Result<Self> {
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl DenseMatrix {
    /// Creates a matrix from a vector of row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::ShapeError`] if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatriksError::shape_error(format!(
                "data length {} does not equal {rows} * {cols}",
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a sequence of rows.
    ///
    /// An empty slice yields a 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::ShapeError`] if the rows have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriks::primitives::DenseMatrix;
    ///
    /// assert!(DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatriksError::shape_error(format!(
                    "row {i} has {} columns, expected {cols}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Creates a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Copies any matrix into dense storage.
    ///
    /// Only the non-zero cells of `other` are visited.
    pub fn from_matrix_like<M: MatrixLike + ?Sized>(other: &M) -> Self {
        let (rows, cols) = other.shape();
        let mut data = vec![0.0; rows * cols];
        for (i, j, value) in other.nonzeros() {
            data[i * cols + j] = value;
        }
        Self { data, rows, cols }
    }

    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an n x n identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Creates an n x 1 column vector.
    #[must_use]
    pub fn column_vector(values: &[f64]) -> Self {
        Self {
            data: values.to_vec(),
            rows: values.len(),
            cols: 1,
        }
    }

    /// Returns a new matrix with `f` applied to every cell.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major data.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Returns the rows as nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|i| self.row_slice(i).to_vec()).collect()
    }
}

impl MatrixLike for DenseMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    fn row(&self, row: usize) -> Vec<f64> {
        self.row_slice(row).to_vec()
    }

    fn row_nonzeros(&self, row: usize) -> Box<dyn Iterator<Item = (usize, f64)> + '_> {
        Box::new(
            self.row_slice(row)
                .iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0.0)
                .map(|(j, &v)| (j, v)),
        )
    }
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self)
    }
}

/// Writes one bracketed row per line.
pub(crate) fn write_rows<M: MatrixLike + ?Sized>(f: &mut fmt::Formatter<'_>, m: &M) -> fmt::Result {
    for i in 0..m.rows() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "[")?;
        for j in 0..m.cols() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", m.get(i, j))?;
        }
        write!(f, "]")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "dense_tests.rs"]
mod tests;
