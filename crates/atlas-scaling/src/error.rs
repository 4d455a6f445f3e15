use std::error::Error;
use std::fmt;

use crate::config::DataKind;

/// Errors raised while configuring a scaler or feeding it data.
#[derive(Debug)]
pub enum ScalingError {
    /// Scaling mode name outside `standardization`, `normalization`, `identity`.
    UnsupportedScalingType(String),
    /// Array is not two-dimensional.
    InvalidShape { expected: String, got: String },
    /// Column count does not match the fitted statistics.
    FeatureMismatch {
        kind: DataKind,
        expected: usize,
        got: usize,
    },
    /// A task's params and values are not row-aligned.
    RowMismatch {
        params_rows: usize,
        values_rows: usize,
    },
    EmptyData(String),
    InvalidParameter(String),
    Serialization(String),
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScalingError::UnsupportedScalingType(name) => write!(
                f,
                "Unsupported scaling type: {}. Expected one of standardization, normalization, identity",
                name
            ),
            ScalingError::InvalidShape { expected, got } => {
                write!(f, "Invalid shape: expected {}, got {}", expected, got)
            }
            ScalingError::FeatureMismatch {
                kind,
                expected,
                got,
            } => write!(
                f,
                "Feature mismatch for {}: expected {} columns, got {}",
                kind, expected, got
            ),
            ScalingError::RowMismatch {
                params_rows,
                values_rows,
            } => write!(
                f,
                "Task params have {} rows but values have {} rows",
                params_rows, values_rows
            ),
            ScalingError::EmptyData(msg) => write!(f, "Empty data: {}", msg),
            ScalingError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            ScalingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for ScalingError {}

impl From<ndarray::ShapeError> for ScalingError {
    fn from(err: ndarray::ShapeError) -> Self {
        ScalingError::InvalidShape {
            expected: "compatible array shapes".to_string(),
            got: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ScalingError {
    fn from(err: serde_json::Error) -> Self {
        ScalingError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScalingError>;
