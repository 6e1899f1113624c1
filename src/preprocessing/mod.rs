//! Preprocessing transformers for feature standardization.
//!
//! # Example
//!
//! ```
//! use matriks::prelude::*;
//! use matriks::preprocessing::StandardScaler;
//!
//! // Features on very different scales
//! let data = DenseMatrix::from_vec(4, 2, vec![
//!     1.0, 100.0,
//!     2.0, 200.0,
//!     3.0, 300.0,
//!     4.0, 400.0,
//! ]).expect("valid matrix dimensions");
//!
//! let mut scaler = StandardScaler::new();
//! let scaled = scaler.fit_transform(&data).expect("fit_transform should succeed");
//!
//! // Both columns now have the same spread
//! assert!((scaled.get(0, 0) - scaled.get(0, 1)).abs() < 1e-12);
//! ```

use crate::error::{MatriksError, Result};
use crate::primitives::{DenseMatrix, MatrixLike};
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Standardizes features by removing the mean and scaling to unit variance.
///
/// The standard score of a sample x is: z = (x - mean) / std, with the
/// population standard deviation (divide by n).
///
/// A feature whose standard deviation is zero (a constant column) is given a
/// standard deviation of 1.0 instead, so it is only centered. This is logged
/// at `warn` level and is not an error.
///
/// Statistics are recomputed from scratch on every `fit` and stay frozen
/// until the next one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Mean of each feature (computed during fit).
    mean: Option<Vec<f64>>,
    /// Standard deviation of each feature, zero spread replaced by 1.0.
    std: Option<Vec<f64>>,
}

impl StandardScaler {
    /// Creates an unfitted scaler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mean of each feature, or `None` before `fit`.
    #[must_use]
    pub fn mean(&self) -> Option<&[f64]> {
        self.mean.as_deref()
    }

    /// Returns the standard deviation of each feature, or `None` before `fit`.
    #[must_use]
    pub fn std(&self) -> Option<&[f64]> {
        self.std.as_deref()
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.mean.is_some()
    }

    /// Number of features seen during `fit`.
    #[must_use]
    pub fn n_features(&self) -> Option<usize> {
        self.mean.as_ref().map(Vec::len)
    }

    fn stats(&self) -> Result<(&[f64], &[f64])> {
        match (&self.mean, &self.std) {
            (Some(mean), Some(std)) => Ok((mean, std)),
            _ => Err(MatriksError::NotTrained),
        }
    }
}

impl Transformer for StandardScaler {
    /// Computes the mean and standard deviation of each feature.
    fn fit(&mut self, x: &dyn MatrixLike) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if n_samples == 0 {
            return Err(MatriksError::empty_input("cannot fit scaler with zero samples"));
        }
        if n_features == 0 {
            return Err(MatriksError::empty_input("cannot fit scaler with zero features"));
        }

        let n = n_samples as f64;
        let mut mean = vec![0.0; n_features];
        for (_, j, v) in x.nonzeros() {
            mean[j] += v;
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut std = Vec::with_capacity(n_features);
        for (j, &m) in mean.iter().enumerate() {
            let column = x.column(j);
            let sum_sq: f64 = column
                .iter()
                .map(|&v| {
                    let diff = v - m;
                    diff * diff
                })
                .sum();
            let s = (sum_sq / n).sqrt();
            // A constant column can leave rounding noise in `s`
            let constant = column.iter().all(|&v| v == column[0]);
            if constant || s == 0.0 {
                warn!(feature = j, mean = m, "zero-variance feature, using unit std");
                std.push(1.0);
            } else {
                std.push(s);
            }
        }

        self.mean = Some(mean);
        self.std = Some(std);

        Ok(())
    }

    /// Standardizes the data using the fitted mean and std.
    fn transform(&self, x: &dyn MatrixLike) -> Result<DenseMatrix> {
        let (mean, std) = self.stats()?;

        if x.cols() != mean.len() {
            return Err(MatriksError::FeatureCountMismatch {
                expected: mean.len(),
                actual: x.cols(),
            });
        }

        Ok(DenseMatrix::from_fn(x.rows(), x.cols(), |i, j| {
            (x.get(i, j) - mean[j]) / std[j]
        }))
    }
}
