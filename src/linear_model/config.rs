//! Hyperparameters for the gradient descent trainer.

use crate::error::{MatriksError, Result};
use serde::{Deserialize, Serialize};

/// Hyperparameters for [`LinearRegression`](super::LinearRegression).
///
/// Missing keys take their defaults when deserializing, so a partial object
/// such as `{"iterations": 500}` is valid.
///
/// # Examples
///
/// ```
/// use matriks::linear_model::LinearRegressionConfig;
///
/// let config: LinearRegressionConfig = serde_json::from_str(r#"{"learning_rate": 0.05}"#).unwrap();
/// assert_eq!(config.learning_rate, 0.05);
/// assert_eq!(config.iterations, 1000);
/// assert!(config.normalize);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearRegressionConfig {
    /// Step size applied to each gradient update. Must be finite and positive.
    pub learning_rate: f64,
    /// Number of full-batch passes. Must be at least 1.
    pub iterations: usize,
    /// Standardize features before training and prediction.
    pub normalize: bool,
}

impl Default for LinearRegressionConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            iterations: 1000,
            normalize: true,
        }
    }
}

impl LinearRegressionConfig {
    /// Checks the hyperparameter constraints.
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::InvalidHyperparameter`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(MatriksError::InvalidHyperparameter {
                param: "learning_rate".to_string(),
                value: self.learning_rate.to_string(),
                constraint: "a finite value > 0".to_string(),
            });
        }
        if self.iterations == 0 {
            return Err(MatriksError::InvalidHyperparameter {
                param: "iterations".to_string(),
                value: self.iterations.to_string(),
                constraint: "at least 1".to_string(),
            });
        }
        Ok(())
    }
}
