//! Forecast error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during forecasting operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Fewer samples than the strategy needs
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Series without usable variation
    #[error("Degenerate series: {0}")]
    DegenerateSeries(String),
}

impl ForecastError {
    /// Shorthand for [`ForecastError::InvalidParameter`]
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Serializable tag for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::DegenerateSeries(_) => ErrorKind::DegenerateSeries,
        }
    }
}

/// Error category reported on a failed [`ForecastResult`](crate::ForecastResult)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InsufficientData,
    DegenerateSeries,
    InvalidParameter,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InsufficientData => write!(f, "InsufficientData"),
            ErrorKind::DegenerateSeries => write!(f, "DegenerateSeries"),
            ErrorKind::InvalidParameter => write!(f, "InvalidParameter"),
        }
    }
}
