//! Linear models for regression.
//!
//! [`LinearRegression`] is trained with full-batch gradient descent on the
//! mean squared error. Every matrix product in the training loop goes
//! through [`crate::ops`], so the trainer works unchanged on dense, sparse
//! or caller-defined [`MatrixLike`] feature tables.

mod config;
mod summary;

pub use config::LinearRegressionConfig;
pub use summary::{EvaluationReport, ModelSummary};

use crate::data::TrainingData;
use crate::error::{MatriksError, Result};
use crate::metrics::{r_squared, PlotData, RegressionMetrics};
use crate::ops;
use crate::preprocessing::StandardScaler;
use crate::primitives::{DenseMatrix, Matrix, MatrixLike, Storage};
use crate::traits::{Estimator, Transformer};
use tracing::{debug, info, trace};

/// Linear regression trained by batch gradient descent.
///
/// Each iteration computes `h = X·w + b`, the residual `e = h - y`, the mean
/// gradient `Xᵀ·e / n` and `mean(e)`, then steps both parameters against
/// their gradients. The loss `mean(e²)` of every iteration is kept in
/// [`loss_history`](Self::loss_history).
///
/// With `normalize` enabled (the default) features are standardized with
/// statistics computed on the training data. Those statistics are frozen
/// and reapplied by `predict`, and recomputed from scratch by every `fit`.
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
/// let mut model = LinearRegression::new().with_learning_rate(0.1);
/// model.fit(&x, &y).unwrap();
///
/// let prediction = model.predict(&DenseMatrix::column_vector(&[5.0])).unwrap();
/// assert!((prediction[0] - 11.0).abs() < 1e-6);
/// ```
///
/// # Performance
///
/// - Time complexity: O(iterations · nnz(X))
/// - Space complexity: O(nnz(X) + n + p)
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    config: LinearRegressionConfig,
    /// Learned weights, one per feature.
    weights: Vec<f64>,
    bias: f64,
    loss_history: Vec<f64>,
    /// Frozen normalization statistics, present when trained with `normalize`.
    scaler: Option<StandardScaler>,
    feature_names: Option<Vec<String>>,
    target_name: Option<String>,
    trained: bool,
}

/// Parameters produced by one gradient descent run.
struct Descent {
    weights: Vec<f64>,
    bias: f64,
    loss_history: Vec<f64>,
}

impl LinearRegression {
    /// Creates an untrained model with default hyperparameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an untrained model from a configuration.
    #[must_use]
    pub fn from_config(config: LinearRegressionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Sets the gradient descent step size.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    /// Sets the number of full-batch iterations.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Sets whether features are standardized.
    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.config.normalize = normalize;
        self
    }

    /// Hyperparameters used by the next `fit`.
    #[must_use]
    pub fn config(&self) -> &LinearRegressionConfig {
        &self.config
    }

    /// Learned weights. Empty before `fit`.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Learned intercept. Zero before `fit`.
    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Loss of each iteration of the last `fit`, in order.
    #[must_use]
    pub fn loss_history(&self) -> &[f64] {
        &self.loss_history
    }

    /// Frozen `(mean, std)` per feature, when trained with normalization.
    #[must_use]
    pub fn normalization(&self) -> Option<(&[f64], &[f64])> {
        let scaler = self.scaler.as_ref()?;
        Some((scaler.mean()?, scaler.std()?))
    }

    /// Returns true once `fit` has completed.
    #[must_use]
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// Weights and bias expressed on the original feature scale.
    ///
    /// For a model trained with normalization, `w_j / std_j` and
    /// `b - Σ w_j·mean_j / std_j`. Otherwise the learned parameters as is.
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::NotTrained`] before `fit`.
    pub fn unscaled_coefficients(&self) -> Result<(Vec<f64>, f64)> {
        self.ensure_trained()?;
        match self.normalization() {
            Some((mean, std)) => {
                let weights: Vec<f64> = self.weights.iter().zip(std).map(|(w, s)| w / s).collect();
                let shift: f64 = weights.iter().zip(mean).map(|(w, m)| w * m).sum();
                Ok((weights, self.bias - shift))
            }
            None => Ok((self.weights.clone(), self.bias)),
        }
    }

    /// Fits on a selected table, recording its feature and target names.
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::MissingTarget`] if `data` has no target, or
    /// any error of [`Estimator::fit`].
    pub fn fit_data(&mut self, data: &TrainingData) -> Result<()> {
        let y = data.y.as_deref().ok_or(MatriksError::MissingTarget)?;
        self.fit(&data.x, y)?;
        self.feature_names = Some(data.feature_names.clone());
        self.target_name = data.target_name.clone();
        Ok(())
    }

    /// Computes R², MSE, RMSE and MAE of the predictions for `x`.
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::NotTrained`] before `fit`, then
    /// [`MatriksError::MissingTarget`] if `y` is `None`, then
    /// [`MatriksError::ShapeMismatch`] if `y` does not have one value per row.
    pub fn evaluate(&self, x: &dyn MatrixLike, y: Option<&[f64]>) -> Result<RegressionMetrics> {
        let (y_pred, y_true) = self.predict_against(x, y)?;
        RegressionMetrics::compute(&y_pred, y_true)
    }

    /// Like [`evaluate`](Self::evaluate), also returning the plot series.
    ///
    /// # Errors
    ///
    /// Same as [`evaluate`](Self::evaluate).
    pub fn report(&self, x: &dyn MatrixLike, y: Option<&[f64]>) -> Result<EvaluationReport> {
        let (y_pred, y_true) = self.predict_against(x, y)?;
        Ok(EvaluationReport {
            metrics: RegressionMetrics::compute(&y_pred, y_true)?,
            plot: PlotData::new(&y_pred, y_true, &self.loss_history)?,
        })
    }

    /// Hyperparameters, named coefficients and final loss.
    ///
    /// Feature names come from [`fit_data`](Self::fit_data), otherwise they
    /// default to `x0`, `x1`, ...
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::NotTrained`] before `fit`.
    pub fn summary(&self) -> Result<ModelSummary> {
        self.ensure_trained()?;
        let names: Vec<String> = match &self.feature_names {
            Some(names) => names.clone(),
            None => (0..self.weights.len()).map(|j| format!("x{j}")).collect(),
        };
        Ok(ModelSummary {
            config: self.config,
            coefficients: names.into_iter().zip(self.weights.iter().copied()).collect(),
            bias: self.bias,
            target_name: self.target_name.clone(),
            final_loss: self.loss_history.last().copied().unwrap_or(f64::NAN),
        })
    }

    fn ensure_trained(&self) -> Result<()> {
        if self.trained {
            Ok(())
        } else {
            Err(MatriksError::NotTrained)
        }
    }

    /// Shared checks of evaluate/report, in their documented order.
    fn predict_against<'y>(
        &self,
        x: &dyn MatrixLike,
        y: Option<&'y [f64]>,
    ) -> Result<(Vec<f64>, &'y [f64])> {
        self.ensure_trained()?;
        let y = y.ok_or(MatriksError::MissingTarget)?;
        if y.len() != x.rows() {
            return Err(MatriksError::shape_mismatch(
                "evaluate",
                x.shape(),
                (y.len(), 1),
            ));
        }
        Ok((self.predict(x)?, y))
    }

    fn reset(&mut self) {
        self.weights.clear();
        self.bias = 0.0;
        self.loss_history.clear();
        self.scaler = None;
        self.feature_names = None;
        self.target_name = None;
        self.trained = false;
    }
}

/// `X·w + b` as a column, through the generic operations.
fn forward<M: MatrixLike + ?Sized>(x: &M, weights: &DenseMatrix, bias: f64) -> Result<Matrix> {
    let xw = ops::multiply(x, weights)?;
    let bias_column = DenseMatrix::from_fn(x.rows(), 1, |_, _| bias);
    ops::add(&xw, &bias_column)
}

/// Runs `config.iterations` full-batch gradient descent steps from zero.
fn gradient_descent<M: MatrixLike + ?Sized>(
    x: &M,
    y: &[f64],
    config: &LinearRegressionConfig,
) -> Result<Descent> {
    let n = x.rows() as f64;
    let lr = config.learning_rate;
    let xt = ops::transpose(x);
    let target = DenseMatrix::column_vector(y);

    let mut weights = DenseMatrix::zeros(x.cols(), 1);
    let mut bias = 0.0;
    let mut loss_history = Vec::with_capacity(config.iterations);

    for iteration in 0..config.iterations {
        let h = forward(x, &weights, bias)?;
        let error = ops::subtract(&h, &target)?;
        let grad = ops::scale(&ops::multiply(&xt, &error)?, 1.0 / n);

        let residuals = error.column(0);
        let bias_grad = residuals.iter().sum::<f64>() / n;
        let loss = residuals.iter().map(|e| e * e).sum::<f64>() / n;
        if !loss.is_finite() {
            return Err(MatriksError::NonFiniteLoss { iteration });
        }

        weights = ops::subtract(&weights, &ops::scale(&grad, lr))?.into_dense();
        bias -= lr * bias_grad;
        loss_history.push(loss);
        trace!(iteration, loss, bias, "gradient step");
    }

    Ok(Descent {
        weights: weights.into_vec(),
        bias,
        loss_history,
    })
}

impl Estimator for LinearRegression {
    /// Trains from zero weights for the configured number of iterations.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Hyperparameters are invalid
    /// - `x` has no rows or no columns
    /// - `y` does not have one value per row
    /// - The loss becomes non-finite (the model is left untrained)
    fn fit(&mut self, x: &dyn MatrixLike, y: &[f64]) -> Result<()> {
        self.config.validate()?;

        let (n_samples, n_features) = x.shape();
        if n_samples == 0 || n_features == 0 {
            return Err(MatriksError::empty_input(
                "fit requires at least one sample and one feature",
            ));
        }
        if y.len() != n_samples {
            return Err(MatriksError::shape_mismatch("fit", x.shape(), (y.len(), 1)));
        }

        debug!(
            samples = n_samples,
            features = n_features,
            learning_rate = self.config.learning_rate,
            iterations = self.config.iterations,
            normalize = self.config.normalize,
            sparse = x.storage() == Storage::Sparse,
            "fitting linear regression"
        );

        self.reset();

        let outcome = if self.config.normalize {
            let mut scaler = StandardScaler::new();
            let scaled = scaler.fit_transform(x)?;
            gradient_descent(&scaled, y, &self.config).map(|d| (d, Some(scaler)))
        } else {
            gradient_descent(x, y, &self.config).map(|d| (d, None))
        };
        let (descent, scaler) = outcome?;

        info!(
            iterations = descent.loss_history.len(),
            final_loss = descent.loss_history.last().copied(),
            bias = descent.bias,
            "linear regression fitted"
        );

        self.weights = descent.weights;
        self.bias = descent.bias;
        self.loss_history = descent.loss_history;
        self.scaler = scaler;
        self.trained = true;
        Ok(())
    }

    /// Predicts `X·w + b`, reapplying the frozen normalization if any.
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::NotTrained`] before `fit` and
    /// [`MatriksError::FeatureCountMismatch`] for a different feature count.
    fn predict(&self, x: &dyn MatrixLike) -> Result<Vec<f64>> {
        self.ensure_trained()?;
        if x.cols() != self.weights.len() {
            return Err(MatriksError::FeatureCountMismatch {
                expected: self.weights.len(),
                actual: x.cols(),
            });
        }

        let weights = DenseMatrix::column_vector(&self.weights);
        let h = match &self.scaler {
            Some(scaler) => forward(&scaler.transform(x)?, &weights, self.bias)?,
            None => forward(x, &weights, self.bias)?,
        };
        Ok(h.column(0))
    }

    /// Coefficient of determination of the predictions for `x`.
    ///
    /// # Errors
    ///
    /// Same as [`evaluate`](LinearRegression::evaluate) with a target.
    fn score(&self, x: &dyn MatrixLike, y: &[f64]) -> Result<f64> {
        let (y_pred, y_true) = self.predict_against(x, Some(y))?;
        r_squared(&y_pred, y_true)
    }
}
