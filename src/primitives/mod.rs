//! Matrix representations behind one capability contract.
//!
//! [`MatrixLike`] exposes shape, element access and non-zero iteration.
//! [`DenseMatrix`] stores every cell, [`SparseMatrix`] stores only non-zero
//! cells. Every algorithm in [`crate::ops`], [`crate::validators`] and
//! [`crate::linear_model`] is written against the contract alone, so a new
//! representation plugs in without touching them.

mod dense;
mod like;
mod matrix;
mod sparse;

pub use dense::DenseMatrix;
pub use like::{approx_eq, MatrixLike, Storage};
pub use matrix::Matrix;
pub use sparse::SparseMatrix;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
