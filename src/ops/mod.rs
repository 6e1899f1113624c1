//! Matrix operations written once against [`MatrixLike`].
//!
//! None of these functions look at the concrete type of their operands.
//! They read shape, cells and non-zero iterators through the contract and
//! pick the representation of their result from the operands' [`Storage`]
//! tags according to a [`Promotion`] policy.
//!
//! # Example
//!
//! ```
//! use matriks::ops;
//! use matriks::primitives::{DenseMatrix, MatrixLike, SparseMatrix};
//!
//! let dense = DenseMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]]).unwrap();
//! let sparse = SparseMatrix::from_rows(&[vec![1.0, 0.0, 0.0], vec![0.0, 5.0, 0.0], vec![7.0, 0.0, 9.0]]).unwrap();
//!
//! let sum = ops::add(&dense, &sparse).unwrap();
//! assert_eq!(sum.row(2), vec![14.0, 8.0, 18.0]);
//! ```

mod determinant;

pub use determinant::{determinant, DETERMINANT_SIZE_HINT};

use crate::error::{MatriksError, Result};
use crate::primitives::{DenseMatrix, Matrix, MatrixLike, SparseMatrix, Storage};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Rule for choosing the representation of a binary operation's result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Promotion {
    /// Sparse when both operands are sparse, dense otherwise.
    ///
    /// A dense operand already forces full materialization, so there is no
    /// space to save by sparsifying its result.
    #[default]
    PreserveSparse,
    /// Always materialize a dense result.
    AlwaysDense,
}

impl Promotion {
    /// Storage of the result for operands with the given storage.
    #[must_use]
    pub fn result_storage(self, left: Storage, right: Storage) -> Storage {
        match (self, left, right) {
            (Promotion::PreserveSparse, Storage::Sparse, Storage::Sparse) => Storage::Sparse,
            _ => Storage::Dense,
        }
    }
}

/// Element-wise sum `A + B`.
///
/// # Errors
///
/// Returns [`MatriksError::ShapeMismatch`] if the shapes differ.
pub fn add<A, B>(a: &A, b: &B) -> Result<Matrix>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    add_with(a, b, Promotion::default())
}

/// Element-wise sum with an explicit result [`Promotion`].
///
/// # Errors
///
/// Returns [`MatriksError::ShapeMismatch`] if the shapes differ.
pub fn add_with<A, B>(a: &A, b: &B, promotion: Promotion) -> Result<Matrix>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    elementwise("add", a, b, promotion, |x, y| x + y)
}

/// Element-wise difference `A - B`.
///
/// # Errors
///
/// Returns [`MatriksError::ShapeMismatch`] if the shapes differ.
pub fn subtract<A, B>(a: &A, b: &B) -> Result<Matrix>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    subtract_with(a, b, Promotion::default())
}

/// Element-wise difference with an explicit result [`Promotion`].
///
/// # Errors
///
/// Returns [`MatriksError::ShapeMismatch`] if the shapes differ.
pub fn subtract_with<A, B>(a: &A, b: &B, promotion: Promotion) -> Result<Matrix>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    elementwise("subtract", a, b, promotion, |x, y| x - y)
}

/// Shared body of add/subtract. `f(0, 0)` must be zero.
fn elementwise<A, B>(
    op: &'static str,
    a: &A,
    b: &B,
    promotion: Promotion,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Matrix>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    if a.shape() != b.shape() {
        return Err(MatriksError::shape_mismatch(op, a.shape(), b.shape()));
    }
    let (rows, cols) = a.shape();

    match promotion.result_storage(a.storage(), b.storage()) {
        Storage::Sparse => {
            // Only coordinates stored on either side can be non-zero.
            let coords: HashSet<(usize, usize)> = a
                .nonzeros()
                .chain(b.nonzeros())
                .map(|(i, j, _)| (i, j))
                .collect();
            let entries: HashMap<(usize, usize), f64> = coords
                .into_iter()
                .map(|(i, j)| ((i, j), f(a.get(i, j), b.get(i, j))))
                .collect();
            Ok(SparseMatrix::from_entries(rows, cols, entries).into())
        }
        Storage::Dense => {
            Ok(DenseMatrix::from_fn(rows, cols, |i, j| f(a.get(i, j), b.get(i, j))).into())
        }
    }
}

/// Matrix product `A · B`.
///
/// Iterates the non-zeros of `A` and, for each `(i, k)`, the non-zeros of
/// row `k` of `B`. Dense operands cost the classical O(n·m·p); sparse
/// operands cost time proportional to the products of matching non-zeros.
///
/// Zero cells never enter a product, so a stored infinity or NaN met by a
/// zero contributes 0 where IEEE arithmetic would give NaN. The result is
/// the same for every representation.
///
/// # Errors
///
/// Returns [`MatriksError::ShapeMismatch`] if `A.cols() != B.rows()`.
///
/// # Examples
///
/// ```
/// use matriks::ops;
/// use matriks::primitives::{MatrixLike, SparseMatrix};
///
/// let a = SparseMatrix::from_triplets(1000, 1000, [(0, 0, 1.0), (999, 999, 1.0)]).unwrap();
/// let product = ops::multiply(&a, &a).unwrap();
/// assert!(product.is_sparse());
/// assert_eq!(product.nnz(), 2);
/// ```
pub fn multiply<A, B>(a: &A, b: &B) -> Result<Matrix>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    multiply_with(a, b, Promotion::default())
}

/// Matrix product with an explicit result [`Promotion`].
///
/// # Errors
///
/// Returns [`MatriksError::ShapeMismatch`] if `A.cols() != B.rows()`.
pub fn multiply_with<A, B>(a: &A, b: &B, promotion: Promotion) -> Result<Matrix>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    if a.cols() != b.rows() {
        return Err(MatriksError::shape_mismatch("multiply", a.shape(), b.shape()));
    }
    let (rows, cols) = (a.rows(), b.cols());

    match promotion.result_storage(a.storage(), b.storage()) {
        Storage::Sparse => {
            let mut acc: HashMap<(usize, usize), f64> = HashMap::new();
            let mut products = 0usize;
            for (i, k, av) in a.nonzeros() {
                for (j, bv) in b.row_nonzeros(k) {
                    *acc.entry((i, j)).or_insert(0.0) += av * bv;
                    products += 1;
                }
            }
            debug!(rows, cols, products, stored = acc.len(), "sparse multiply");
            Ok(SparseMatrix::from_entries(rows, cols, acc).into())
        }
        Storage::Dense => Ok(dense_product(a, b)?.into()),
    }
}

fn dense_product<A, B>(a: &A, b: &B) -> Result<DenseMatrix>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    let (rows, cols) = (a.rows(), b.cols());
    if rows == 0 || cols == 0 {
        return Ok(DenseMatrix::zeros(rows, cols));
    }
    let mut data = vec![0.0; rows * cols];

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        data.par_chunks_mut(cols)
            .enumerate()
            .for_each(|(i, out)| accumulate_row(a, b, i, out));
    }

    #[cfg(not(feature = "parallel"))]
    for (i, out) in data.chunks_mut(cols).enumerate() {
        accumulate_row(a, b, i, out);
    }

    DenseMatrix::from_vec(rows, cols, data)
}

/// Writes row `i` of `A · B` into `out`.
fn accumulate_row<A, B>(a: &A, b: &B, i: usize, out: &mut [f64])
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
{
    for (k, av) in a.row_nonzeros(i) {
        for (j, bv) in b.row_nonzeros(k) {
            out[j] += av * bv;
        }
    }
}

/// Transpose `Aᵀ`, keeping the operand's representation.
pub fn transpose<A: MatrixLike + ?Sized>(a: &A) -> Matrix {
    let (rows, cols) = a.shape();
    match a.storage() {
        Storage::Sparse => {
            let entries = a.nonzeros().map(|(i, j, v)| ((j, i), v)).collect();
            SparseMatrix::from_entries(cols, rows, entries).into()
        }
        Storage::Dense => DenseMatrix::from_fn(cols, rows, |i, j| a.get(j, i)).into(),
    }
}

/// Multiplies every cell by `factor`, keeping the operand's representation.
pub fn scale<A: MatrixLike + ?Sized>(a: &A, factor: f64) -> Matrix {
    let (rows, cols) = a.shape();
    match a.storage() {
        Storage::Sparse => {
            let entries = a.nonzeros().map(|(i, j, v)| ((i, j), v * factor)).collect();
            SparseMatrix::from_entries(rows, cols, entries).into()
        }
        Storage::Dense => DenseMatrix::from_fn(rows, cols, |i, j| a.get(i, j) * factor).into(),
    }
}

/// Element-wise negation `-A`.
pub fn negate<A: MatrixLike + ?Sized>(a: &A) -> Matrix {
    scale(a, -1.0)
}
