//! Forecast result model

use crate::error::{ErrorKind, ForecastError};
use crate::model::StrategyKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One projected step with its confidence band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Projected instant
    pub timestamp: DateTime<Utc>,
    /// Point estimate
    #[serde(rename = "value")]
    pub point_estimate: f64,
    /// Lower bound of the confidence band
    pub lower_bound: f64,
    /// Upper bound of the confidence band
    pub upper_bound: f64,
    /// Steps beyond the last observation, starting at 1
    pub horizon_step: usize,
}

impl ForecastPoint {
    /// Width of the confidence band
    pub fn interval_width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

/// In-sample fit quality
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FitMetrics {
    pub mse: f64,
    pub mae: f64,
    pub rmse: f64,
    /// Mean absolute percentage error as a fraction (0.05 = 5%)
    pub mape: f64,
}

/// Outcome of a forecast call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastStatus {
    Success,
    Error,
}

impl std::fmt::Display for ForecastStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastStatus::Success => write!(f, "Success"),
            ForecastStatus::Error => write!(f, "Error"),
        }
    }
}

/// Result record returned by every forecast call
///
/// Serializes to a flat document:
/// `{strategyUsed, forecasts[], metrics{mse,mae,rmse,mape}, status, message, confidenceScore}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    /// Strategy that produced the forecasts, when one was resolved
    pub strategy_used: Option<StrategyKind>,
    /// Projected points, `horizon_step` contiguous from 1
    pub forecasts: Vec<ForecastPoint>,
    /// Fit quality against the observed history
    #[serde(rename = "metrics")]
    pub in_sample_metrics: FitMetrics,
    pub status: ForecastStatus,
    /// Human-readable summary or failure reason
    pub message: String,
    /// Trust signal in `[0, 1]`
    pub confidence_score: f64,
    /// Error category when `status` is `Error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl ForecastResult {
    /// Build an error result from a failure.
    pub fn failure(strategy_used: Option<StrategyKind>, error: &ForecastError) -> Self {
        Self {
            strategy_used,
            forecasts: Vec::new(),
            in_sample_metrics: FitMetrics::default(),
            status: ForecastStatus::Error,
            message: error.to_string(),
            confidence_score: 0.0,
            error_kind: Some(error.kind()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ForecastStatus::Success
    }

    /// Point estimates in horizon order
    pub fn point_estimates(&self) -> Vec<f64> {
        self.forecasts.iter().map(|p| p.point_estimate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_result() -> ForecastResult {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        ForecastResult {
            strategy_used: Some(StrategyKind::Differencing),
            forecasts: vec![ForecastPoint {
                timestamp: t,
                point_estimate: 10.0,
                lower_bound: 8.0,
                upper_bound: 12.0,
                horizon_step: 1,
            }],
            in_sample_metrics: FitMetrics {
                mse: 4.0,
                mae: 2.0,
                rmse: 2.0,
                mape: 0.1,
            },
            status: ForecastStatus::Success,
            message: "ok".to_string(),
            confidence_score: 0.5,
            error_kind: None,
        }
    }

    #[test]
    fn test_flat_document_field_names() {
        let value = serde_json::to_value(sample_result()).unwrap();
        assert_eq!(value["strategyUsed"], "Differencing");
        assert_eq!(value["status"], "Success");
        assert_eq!(value["metrics"]["rmse"], 2.0);
        assert_eq!(value["confidenceScore"], 0.5);
        let point = &value["forecasts"][0];
        assert_eq!(point["value"], 10.0);
        assert_eq!(point["lowerBound"], 8.0);
        assert_eq!(point["upperBound"], 12.0);
        assert_eq!(point["horizonStep"], 1);
        assert!(value.get("errorKind").is_none());
    }

    #[test]
    fn test_failure_result() {
        let error = ForecastError::InsufficientData {
            required: 10,
            actual: 4,
        };
        let result = ForecastResult::failure(None, &error);
        assert!(!result.is_success());
        assert!(result.forecasts.is_empty());
        assert_eq!(result.confidence_score, 0.0);
        assert_eq!(result.error_kind, Some(ErrorKind::InsufficientData));
        assert!(result.message.contains("Insufficient data"));

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "Error");
        assert_eq!(value["errorKind"], "InsufficientData");
    }

    #[test]
    fn test_interval_width() {
        let result = sample_result();
        assert_eq!(result.forecasts[0].interval_width(), 4.0);
        assert_eq!(result.point_estimates(), vec![10.0]);
    }
}
