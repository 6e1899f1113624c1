//! Read-only views of a trained model and of an evaluation run.

use super::LinearRegressionConfig;
use crate::metrics::{PlotData, RegressionMetrics};
use serde::Serialize;
use std::fmt;

/// Hyperparameters and learned parameters of a trained model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    /// Hyperparameters the model was trained with.
    pub config: LinearRegressionConfig,
    /// `(feature name, weight)` in feature order. Weights are in the
    /// standardized space when `config.normalize` is set.
    pub coefficients: Vec<(String, f64)>,
    /// Learned intercept, in the same space as the weights.
    pub bias: f64,
    /// Target column name, when trained from a [`crate::data::DataFrame`].
    pub target_name: Option<String>,
    /// Loss of the last iteration.
    pub final_loss: f64,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Linear regression (batch gradient descent)")?;
        writeln!(f, "  learning rate: {}", self.config.learning_rate)?;
        writeln!(f, "  iterations:    {}", self.config.iterations)?;
        writeln!(f, "  normalize:     {}", self.config.normalize)?;
        if let Some(target) = &self.target_name {
            writeln!(f, "  target:        {target}")?;
        }
        writeln!(f, "  coefficients:")?;
        for (name, weight) in &self.coefficients {
            writeln!(f, "    {name}: {weight:.6}")?;
        }
        writeln!(f, "  bias:          {:.6}", self.bias)?;
        write!(f, "  final loss:    {:.6}", self.final_loss)
    }
}

/// Metrics and plot series from one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// R², MSE, RMSE and MAE of the predictions.
    pub metrics: RegressionMetrics,
    /// Scatter, reference line and loss curve for charting.
    pub plot: PlotData,
}
