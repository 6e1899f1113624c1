//! Error types for matriks operations.
//!
//! Every fallible operation in the crate reports one of these variants to
//! its immediate caller. Nothing is retried and nothing is swallowed.

use thiserror::Error;

/// Main error type for matriks operations.
///
/// # Examples
///
/// ```
/// use matriks::error::MatriksError;
///
/// let err = MatriksError::ShapeMismatch {
///     op: "add",
///     left: (2, 3),
///     right: (4, 2),
/// };
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatriksError {
    /// Construction input is not rectangular or its length disagrees with the shape.
    #[error("invalid matrix shape: {reason}")]
    ShapeError {
        /// What was wrong with the input
        reason: String,
    },

    /// Operand dimensions are incompatible for the operation.
    #[error("shape mismatch in {op}: left is {}x{}, right is {}x{}", left.0, left.1, right.0, right.1)]
    ShapeMismatch {
        /// Operation that rejected the operands
        op: &'static str,
        /// Shape of the left operand (rows, cols)
        left: (usize, usize),
        /// Shape of the right operand (rows, cols)
        right: (usize, usize),
    },

    /// Operation requires a square matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Model used before `fit` was called.
    #[error("model is not trained: call fit() first")]
    NotTrained,

    /// Evaluation requested without a target vector.
    #[error("target column (y) is required for evaluation")]
    MissingTarget,

    /// Input with no samples or no features.
    #[error("empty input: {context}")]
    EmptyInput {
        /// Which input was empty
        context: String,
    },

    /// Prediction input has a different feature count than the training data.
    #[error("feature count mismatch: model was fitted on {expected} features, got {actual}")]
    FeatureCountMismatch {
        /// Feature count seen during fit
        expected: usize,
        /// Feature count supplied
        actual: usize,
    },

    /// Invalid hyperparameter value provided.
    #[error("invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Coordinate outside the matrix shape.
    #[error("index ({row}, {col}) out of bounds for {}x{} matrix", shape.0, shape.1)]
    IndexOutOfBounds {
        /// Row index
        row: usize,
        /// Column index
        col: usize,
        /// Matrix shape (rows, cols)
        shape: (usize, usize),
    },

    /// Requested column does not exist in the table.
    #[error("unknown column '{name}'")]
    UnknownColumn {
        /// Column name
        name: String,
    },

    /// Column name repeated in a table or in a feature selection.
    #[error("duplicate column '{name}'")]
    DuplicateColumn {
        /// Column name
        name: String,
    },

    /// Gradient descent produced a NaN or infinite loss.
    #[error("training diverged at iteration {iteration}: loss is not finite (try a smaller learning rate)")]
    NonFiniteLoss {
        /// Zero-based iteration index
        iteration: usize,
    },
}

impl MatriksError {
    /// Create a shape mismatch error for a binary operation.
    #[must_use]
    pub fn shape_mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        Self::ShapeMismatch { op, left, right }
    }

    /// Create an invalid shape error.
    #[must_use]
    pub fn shape_error(reason: impl Into<String>) -> Self {
        Self::ShapeError {
            reason: reason.into(),
        }
    }

    /// Create an empty input error.
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatriksError>;
