//! Observed metric sample

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped observation of a performance metric.
///
/// Callers supply samples sorted ascending by timestamp with non-numeric
/// readings already filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesSample {
    /// Observation instant
    pub timestamp: DateTime<Utc>,
    /// Observed value
    pub value: f64,
}

impl TimeSeriesSample {
    /// Create a new sample.
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Extract the value column of a sample slice.
    pub fn values(samples: &[TimeSeriesSample]) -> Vec<f64> {
        samples.iter().map(|s| s.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_values_extraction() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let samples = vec![
            TimeSeriesSample::new(t0, 1.5),
            TimeSeriesSample::new(t0 + chrono::Duration::hours(1), 2.5),
        ];
        assert_eq!(TimeSeriesSample::values(&samples), vec![1.5, 2.5]);
    }

    #[test]
    fn test_sample_serialization() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let json = serde_json::to_string(&TimeSeriesSample::new(t0, 3.0)).unwrap();
        assert!(json.contains("2024-01-01T00:00:00Z"));
        assert!(json.contains("\"value\":3.0"));
    }
}
