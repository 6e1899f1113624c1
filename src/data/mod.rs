//! `DataFrame` module for named column containers.
//!
//! A minimal named-column table plus the feature/target selection step that
//! turns it into training input. Parsing files into columns is the caller's
//! job.

use crate::error::{MatriksError, Result};
use crate::primitives::DenseMatrix;

/// A minimal `DataFrame` with named, equal-length `f64` columns.
///
/// # Examples
///
/// ```
/// use matriks::data::DataFrame;
///
/// let columns = vec![
///     ("x".to_string(), vec![1.0, 2.0, 3.0]),
///     ("y".to_string(), vec![4.0, 5.0, 6.0]),
/// ];
/// let df = DataFrame::new(columns).expect("DataFrame creation should succeed with valid columns");
/// assert_eq!(df.shape(), (3, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    columns: Vec<(String, Vec<f64>)>,
    n_rows: usize,
}

impl DataFrame {
    /// Creates a new `DataFrame` from named columns.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no columns, columns have different
    /// lengths, a name is empty or a name repeats.
    pub fn new(columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let Some((_, first)) = columns.first() else {
            return Err(MatriksError::empty_input("DataFrame must have at least one column"));
        };
        let n_rows = first.len();

        for (name, col) in &columns {
            if name.is_empty() {
                return Err(MatriksError::shape_error("column names cannot be empty"));
            }
            if col.len() != n_rows {
                return Err(MatriksError::shape_error(format!(
                    "column '{name}' has {} rows, expected {n_rows}",
                    col.len()
                )));
            }
        }

        let mut names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|w| w[0] == w[1]) {
            return Err(MatriksError::DuplicateColumn {
                name: pair[0].to_string(),
            });
        }

        Ok(Self { columns, n_rows })
    }

    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns a column by name.
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::UnknownColumn`] if the column doesn't exist.
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
            .ok_or_else(|| MatriksError::UnknownColumn {
                name: name.to_string(),
            })
    }

    /// Converts the whole `DataFrame` to a row-major `DenseMatrix` of shape
    /// (`n_rows`, `n_cols`).
    #[must_use]
    pub fn to_matrix(&self) -> DenseMatrix {
        DenseMatrix::from_fn(self.n_rows, self.columns.len(), |i, j| self.columns[j].1[i])
    }

    /// Splits the table into a feature matrix and an optional target.
    ///
    /// With `features == None` every column except `target` becomes a
    /// feature, in table order. A `target` naming a column that does not
    /// exist yields `y == None`, which is the shape of a prediction-only
    /// table. Feature names must all exist.
    ///
    /// # Errors
    ///
    /// Returns [`MatriksError::UnknownColumn`] for a missing feature,
    /// [`MatriksError::DuplicateColumn`] if a feature is listed twice and
    /// [`MatriksError::EmptyInput`] if no feature columns remain.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriks::data::DataFrame;
    /// use matriks::primitives::MatrixLike;
    ///
    /// let df = DataFrame::new(vec![
    ///     ("size".to_string(), vec![50.0, 80.0]),
    ///     ("rooms".to_string(), vec![2.0, 3.0]),
    ///     ("price".to_string(), vec![100.0, 150.0]),
    /// ]).unwrap();
    ///
    /// let data = df.select(None, Some("price")).unwrap();
    /// assert_eq!(data.feature_names, vec!["size", "rooms"]);
    /// assert_eq!(data.x.shape(), (2, 2));
    /// assert_eq!(data.y, Some(vec![100.0, 150.0]));
    /// ```
    pub fn select(&self, features: Option<&[&str]>, target: Option<&str>) -> Result<TrainingData> {
        let feature_names: Vec<String> = match features {
            Some(names) => {
                let mut seen: Vec<&str> = Vec::with_capacity(names.len());
                for &name in names {
                    if seen.contains(&name) {
                        return Err(MatriksError::DuplicateColumn {
                            name: name.to_string(),
                        });
                    }
                    seen.push(name);
                }
                names.iter().map(|n| (*n).to_string()).collect()
            }
            None => self
                .columns
                .iter()
                .map(|(n, _)| n.as_str())
                .filter(|n| Some(*n) != target)
                .map(str::to_string)
                .collect(),
        };

        if feature_names.is_empty() {
            return Err(MatriksError::empty_input("no feature columns selected"));
        }

        let cols = feature_names
            .iter()
            .map(|name| self.column(name))
            .collect::<Result<Vec<_>>>()?;
        let x = DenseMatrix::from_fn(self.n_rows, cols.len(), |i, j| cols[j][i]);

        let y = target.and_then(|t| self.column(t).ok()).map(<[f64]>::to_vec);

        Ok(TrainingData {
            x,
            target_name: target.map(str::to_string),
            y,
            feature_names,
        })
    }
}

/// Features and optional target picked out of a [`DataFrame`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingData {
    /// Feature matrix, one column per entry of `feature_names`.
    pub x: DenseMatrix,
    /// Target values, `None` when the table had no target column.
    pub y: Option<Vec<f64>>,
    /// Names of the selected feature columns, in matrix column order.
    pub feature_names: Vec<String>,
    /// Requested target name, kept even when the column was absent.
    pub target_name: Option<String>,
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
