//! Matriks: dense and sparse matrices with a gradient descent regressor.
//!
//! Operations are written once against the [`MatrixLike`] contract and work
//! on any representation. A sparse operand keeps the cost of an operation
//! proportional to its non-zeros, and the linear regression trainer runs
//! every product of its training loop through the same operations.
//!
//! # Quick Start
//!
//! ```
//! use matriks::prelude::*;
//!
//! // Create training data (y = 2*x + 1)
//! let x = DenseMatrix::from_vec(4, 1, vec![
//!     1.0,
//!     2.0,
//!     3.0,
//!     4.0,
//! ]).unwrap();
//! let y = [3.0, 5.0, 7.0, 9.0];
//!
//! // Train linear regression
//! let mut model = LinearRegression::new().with_learning_rate(0.1);
//! model.fit(&x, &y).unwrap();
//!
//! // Evaluate
//! let metrics = model.evaluate(&x, Some(&y[..])).unwrap();
//! assert!(metrics.r2 > 0.99);
//!
//! // Sparse and dense operands mix freely
//! let sparse = SparseMatrix::identity(4);
//! let product = ops::multiply(&sparse, &x).unwrap();
//! assert_eq!(product.column(0), vec![1.0, 2.0, 3.0, 4.0]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: `MatrixLike` contract, dense and sparse matrices
//! - [`ops`]: add, subtract, multiply, transpose, determinant
//! - [`validators`]: square, identity and symmetry checks
//! - [`data`]: DataFrame for named columns
//! - [`linear_model`]: Linear regression by batch gradient descent
//! - [`metrics`]: Regression metrics and plot data
//! - [`preprocessing`]: Feature standardization

pub mod data;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod ops;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod traits;
pub mod validators;

pub use error::{MatriksError, Result};
pub use primitives::{DenseMatrix, Matrix, MatrixLike, SparseMatrix};
pub use traits::{Estimator, Transformer};
