//! Core traits for estimators and transformers.
//!
//! Both traits take their inputs as `&dyn MatrixLike`, so callers can hand
//! in a dense table, a sparse one, or an operation result without
//! converting first.

use crate::error::Result;
use crate::primitives::{DenseMatrix, MatrixLike};

/// Primary trait for supervised learning estimators.
///
/// Estimators implement fit/predict/score following sklearn conventions.
///
/// # Examples
///
/// ```
/// use matriks::prelude::*;
///
/// // y = 2x + 1
/// let x = DenseMatrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let y = [3.0, 5.0, 7.0, 9.0];
///
/// let mut model = LinearRegression::new().with_learning_rate(0.1).with_iterations(2000);
/// model.fit(&x, &y).unwrap();
///
/// let score = model.score(&x, &y).unwrap();
/// assert!(score > 0.999);
/// ```
pub trait Estimator {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (shape mismatch, empty input, divergence, ...).
    fn fit(&mut self, x: &dyn MatrixLike, y: &[f64]) -> Result<()>;

    /// Predicts target values for input data.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the feature count differs.
    fn predict(&self, x: &dyn MatrixLike) -> Result<Vec<f64>>;

    /// Computes the R² score of the predictions for `x` against `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if prediction fails or `y` does not match `x`.
    fn score(&self, x: &dyn MatrixLike, y: &[f64]) -> Result<f64>;
}

/// Trait for data transformers (scalers).
pub trait Transformer {
    /// Fits the transformer to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit(&mut self, x: &dyn MatrixLike) -> Result<()>;

    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformer is not fitted or the feature count differs.
    fn transform(&self, x: &dyn MatrixLike) -> Result<DenseMatrix>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting or transforming fails.
    fn fit_transform(&mut self, x: &dyn MatrixLike) -> Result<DenseMatrix> {
        self.fit(x)?;
        self.transform(x)
    }
}
