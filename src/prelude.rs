//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriks::prelude::*;
//! ```

pub use crate::data::DataFrame;
pub use crate::error::MatriksError;
pub use crate::linear_model::{LinearRegression, LinearRegressionConfig};
pub use crate::metrics::{mae, mse, r_squared, rmse, RegressionMetrics};
pub use crate::ops;
pub use crate::primitives::{DenseMatrix, Matrix, MatrixLike, SparseMatrix};
pub use crate::traits::{Estimator, Transformer};
pub use crate::validators::{is_identity, is_square, is_symmetric};
