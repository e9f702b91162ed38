//! Seasonality diagnostic report

use serde::{Deserialize, Serialize};

/// A lag whose autocorrelation cleared the detection threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalCandidate {
    /// Lag in samples
    pub period: usize,
    /// Pearson correlation between the series and itself shifted by `period`
    pub correlation: f64,
}

impl SeasonalCandidate {
    pub fn strength(&self) -> f64 {
        self.correlation.abs()
    }
}

/// Result of an autocorrelation scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalityReport {
    /// Retained lags, strongest first
    pub candidate_periods: Vec<SeasonalCandidate>,
    /// Strongest lag, if any qualified
    pub dominant_period: Option<usize>,
    /// `|r|` of the dominant lag, 0 when none
    pub dominant_strength: f64,
    pub has_seasonality: bool,
}

impl SeasonalityReport {
    /// Build a report from candidates already ordered strongest first.
    pub fn from_candidates(candidate_periods: Vec<SeasonalCandidate>) -> Self {
        let dominant = candidate_periods.first().copied();
        Self {
            dominant_period: dominant.map(|c| c.period),
            dominant_strength: dominant.map(|c| c.strength()).unwrap_or(0.0),
            has_seasonality: dominant.is_some(),
            candidate_periods,
        }
    }

    /// Dominant period usable for seasonal modelling: the strongest
    /// positively-correlated lag.
    pub fn usable_period(&self) -> Option<usize> {
        self.candidate_periods
            .iter()
            .find(|c| c.correlation > 0.0)
            .map(|c| c.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = SeasonalityReport::from_candidates(Vec::new());
        assert!(!report.has_seasonality);
        assert_eq!(report.dominant_period, None);
        assert_eq!(report.dominant_strength, 0.0);
        assert_eq!(report.usable_period(), None);
    }

    #[test]
    fn test_dominant_and_usable() {
        let report = SeasonalityReport::from_candidates(vec![
            SeasonalCandidate {
                period: 6,
                correlation: -0.9,
            },
            SeasonalCandidate {
                period: 12,
                correlation: 0.8,
            },
        ]);
        assert!(report.has_seasonality);
        assert_eq!(report.dominant_period, Some(6));
        assert!((report.dominant_strength - 0.9).abs() < 1e-12);
        assert_eq!(report.usable_period(), Some(12));
    }
}
