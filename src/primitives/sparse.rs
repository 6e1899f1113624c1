//! Sparse matrix representation (coordinate map of non-zero cells).

use super::dense::write_rows;
use super::{DenseMatrix, MatrixLike, Storage};
use crate::error::{MatriksError, Result};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A matrix that stores only its non-zero cells.
///
/// Cells are kept in a hash map keyed by `(row, col)`, so [`get`](MatrixLike::get)
/// is an O(1) lookup that returns zero for absent keys. A per-row column
/// index makes [`row_nonzeros`](MatrixLike::row_nonzeros) and
/// [`nonzeros`](MatrixLike::nonzeros) cost O(nnz) instead of O(rows * cols),
/// which is what keeps sparse multiplication cheap.
///
/// No stored entry is ever zero: constructors drop zeros on the way in.
///
/// # Examples
///
/// ```
/// use matriks::primitives::{MatrixLike, SparseMatrix};
///
/// let m = SparseMatrix::from_triplets(1000, 1000, [(0, 0, 1.0), (999, 999, 1.0)]).unwrap();
/// assert_eq!(m.nnz(), 2);
/// assert_eq!(m.get(500, 500), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    entries: HashMap<(usize, usize), f64>,
    row_index: BTreeMap<usize, Vec<usize>>,
    rows: usize,
    cols: usize,
}

impl SparseMatrix {
    /// Builds a matrix from a coordinate map, dropping zero values.
    pub(crate) fn from_entries(
        rows: usize,
        cols: usize,
        mut entries: HashMap<(usize, usize), f64>,
    ) -> Self {
        entries.retain(|_, v| *v != 0.0);
        let mut row_index: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for &(i, j) in entries.keys() {
            row_index.entry(i).or_default().push(j);
        }
        for cols_in_row in row_index.values_mut() {
            cols_in_row.sort_unstable();
        }
        Self {
            entries,
            row_index,
            rows,
            cols,
        }
    }

    /// Creates a matrix from a sequence of rows, keeping only non-zero cells.
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::ShapeError`] if the rows have different lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut entries = HashMap::new();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatriksError::shape_error(format!(
                    "row {i} has {} columns, expected {cols}",
                    row.len()
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                if value != 0.0 {
                    entries.insert((i, j), value);
                }
            }
        }
        Ok(Self::from_entries(rows.len(), cols, entries))
    }

    /// Creates a matrix from `(row, col, value)` triplets.
    ///
    /// Duplicate coordinates are summed; entries that end up zero are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::IndexOutOfBounds`] if a coordinate lies outside the shape.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut entries = HashMap::new();
        for (i, j, value) in triplets {
            if i >= rows || j >= cols {
                return Err(MatriksError::IndexOutOfBounds {
                    row: i,
                    col: j,
                    shape: (rows, cols),
                });
            }
            *entries.entry((i, j)).or_insert(0.0) += value;
        }
        Ok(Self::from_entries(rows, cols, entries))
    }

    /// Copies the non-zero cells of any matrix into sparse storage.
    pub fn from_matrix_like<M: MatrixLike + ?Sized>(other: &M) -> Self {
        let entries = other.nonzeros().map(|(i, j, v)| ((i, j), v)).collect();
        Self::from_entries(other.rows(), other.cols(), entries)
    }

    /// Creates an all-zero matrix (no stored entries).
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_entries(rows, cols, HashMap::new())
    }

    /// Creates an n x n identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::from_entries(n, n, (0..n).map(|i| ((i, i), 1.0)).collect())
    }

    /// Fraction of cells that are stored (0.0 for an empty shape).
    #[must_use]
    pub fn density(&self) -> f64 {
        let cells = self.rows * self.cols;
        if cells == 0 {
            0.0
        } else {
            self.entries.len() as f64 / cells as f64
        }
    }

    /// Materializes the matrix in dense storage.
    #[must_use]
    pub fn to_dense(&self) -> DenseMatrix {
        DenseMatrix::from_matrix_like(self)
    }
}

impl MatrixLike for SparseMatrix {
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
        self.entries.get(&(row, col)).copied().unwrap_or(0.0)
    }

    fn storage(&self) -> Storage {
        Storage::Sparse
    }

    fn row_nonzeros(&self, row: usize) -> Box<dyn Iterator<Item = (usize, f64)> + '_> {
        match self.row_index.get(&row) {
            Some(cols) => Box::new(
                cols.iter()
                    .filter_map(move |&j| self.entries.get(&(row, j)).map(|&v| (j, v))),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn nonzeros(&self) -> Box<dyn Iterator<Item = (usize, usize, f64)> + '_> {
        Box::new(self.row_index.iter().flat_map(move |(&i, cols)| {
            cols.iter()
                .filter_map(move |&j| self.entries.get(&(i, j)).map(|&v| (i, j, v)))
        }))
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self)
    }
}

#[cfg(test)]
#[path = "sparse_tests.rs"]
mod tests;
