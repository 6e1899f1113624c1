//! Regression metrics and plot data for evaluating trained models.
//!
//! All functions take predictions first and ground truth second, matching
//! the `(y_pred, y_true)` order used throughout the crate.

use crate::error::{MatriksError, Result};
use serde::{Deserialize, Serialize};

fn check_lengths(op: &'static str, y_pred: &[f64], y_true: &[f64]) -> Result<()> {
    if y_pred.len() != y_true.len() {
        return Err(MatriksError::shape_mismatch(
            op,
            (y_pred.len(), 1),
            (y_true.len(), 1),
        ));
    }
    if y_true.is_empty() {
        return Err(MatriksError::empty_input(op));
    }
    Ok(())
}

/// Computes the coefficient of determination (R²).
///
/// R² = 1 - (`SS_res` / `SS_tot`)
///
/// where `SS_res` is the residual sum of squares and `SS_tot` is the total
/// sum of squares. A constant target (`SS_tot == 0`) yields 0.0.
///
/// # Examples
///
/// ```
/// use matriks::metrics::r_squared;
///
/// let y_true = [3.0, -0.5, 2.0, 7.0];
/// let y_pred = [2.5, 0.0, 2.0, 8.0];
/// let r2 = r_squared(&y_pred, &y_true).unwrap();
/// assert!(r2 > 0.9);
/// ```
///
/// # Errors
///
/// Returns an error if the slices differ in length or are empty.
pub fn r_squared(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    check_lengths("r_squared", y_pred, y_true)?;

    let y_mean = y_true.iter().sum::<f64>() / y_true.len() as f64;

    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    let ss_tot: f64 = y_true.iter().map(|t| (t - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Ok(0.0);
    }

    Ok(1.0 - (ss_res / ss_tot))
}

/// Computes the Mean Squared Error (MSE).
///
/// MSE = (1/n) * `Σ(y_true` - `y_pred)²`
///
/// # Errors
///
/// Returns an error if the slices differ in length or are empty.
pub fn mse(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    check_lengths("mse", y_pred, y_true)?;

    let sum_sq_error: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    Ok(sum_sq_error / y_true.len() as f64)
}

/// Computes the Root Mean Squared Error (RMSE).
///
/// # Errors
///
/// Returns an error if the slices differ in length or are empty.
pub fn rmse(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    mse(y_pred, y_true).map(f64::sqrt)
}

/// Computes the Mean Absolute Error (MAE).
///
/// MAE = (1/n) * `Σ|y_true` - `y_pred`|
///
/// # Errors
///
/// Returns an error if the slices differ in length or are empty.
pub fn mae(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    check_lengths("mae", y_pred, y_true)?;

    let sum_abs_error: f64 = y_true.iter().zip(y_pred).map(|(t, p)| (t - p).abs()).sum();

    Ok(sum_abs_error / y_true.len() as f64)
}

/// The four regression metrics reported after evaluation.
///
/// Serializes with the upper-case keys (`R2`, `MSE`, `RMSE`, `MAE`) a
/// presentation layer displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    #[serde(rename = "R2")]
    pub r2: f64,
    #[serde(rename = "MSE")]
    pub mse: f64,
    #[serde(rename = "RMSE")]
    pub rmse: f64,
    #[serde(rename = "MAE")]
    pub mae: f64,
}

impl RegressionMetrics {
    /// Computes all four metrics for the same pair of inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices differ in length or are empty.
    pub fn compute(y_pred: &[f64], y_true: &[f64]) -> Result<Self> {
        let mse = mse(y_pred, y_true)?;
        Ok(Self {
            r2: r_squared(y_pred, y_true)?,
            mse,
            rmse: mse.sqrt(),
            mae: mae(y_pred, y_true)?,
        })
    }
}

impl std::fmt::Display for RegressionMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "R2: {:.4}, MSE: {:.4}, RMSE: {:.4}, MAE: {:.4}",
            self.r2, self.mse, self.rmse, self.mae
        )
    }
}

/// Data for the evaluation plots. Rendering is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    /// `(actual, predicted)` pairs, one per sample.
    pub scatter: Vec<(f64, f64)>,
    /// The `y = x` diagonal spanning the range of the actual values.
    pub reference_line: [(f64, f64); 2],
    /// `(iteration, loss)` pairs from training.
    pub loss_curve: Vec<(usize, f64)>,
}

impl PlotData {
    /// Builds the plot series from predictions, targets and a loss history.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices differ in length or are empty.
    pub fn new(y_pred: &[f64], y_true: &[f64], loss_history: &[f64]) -> Result<Self> {
        check_lengths("plot_data", y_pred, y_true)?;

        let (lo, hi) = y_true
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        Ok(Self {
            scatter: y_true.iter().copied().zip(y_pred.iter().copied()).collect(),
            reference_line: [(lo, lo), (hi, hi)],
            loss_curve: loss_history.iter().copied().enumerate().collect(),
        })
    }
}

#[cfg(test)]
#[path = "tests_regression_contract.rs"]
mod tests_regression_contract;
