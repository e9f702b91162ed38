//! Seasonality diagnostics
//!
//! Scans candidate lags for autocorrelation: the Pearson correlation between
//! the series and itself shifted by `L` samples.

use crate::stats::pearson;
use perfcast_spi::{SeasonalCandidate, SeasonalityDetector, SeasonalityReport};
use std::cmp::Reverse;

/// Resolution at which correlation strengths are considered tied
const STRENGTH_RESOLUTION: f64 = 1e6;

/// Autocorrelation-based seasonality analyzer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalityAnalyzer {
    /// Minimum |r| for a lag to be retained
    threshold: f64,
    /// Number of candidates kept in the report
    max_candidates: usize,
    /// Overlapping points required to evaluate a lag
    min_overlap: usize,
}

impl SeasonalityAnalyzer {
    pub fn new() -> Self {
        Self {
            threshold: 0.3,
            max_candidates: 5,
            min_overlap: 5,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates.max(1);
        self
    }

    pub fn with_min_overlap(mut self, min_overlap: usize) -> Self {
        self.min_overlap = min_overlap.max(2);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for SeasonalityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SeasonalityDetector for SeasonalityAnalyzer {
    fn analyze(&self, data: &[f64], max_period: usize) -> SeasonalityReport {
        let n = data.len();
        let upper = max_period.min(n / 2);

        let mut candidates: Vec<SeasonalCandidate> = (2..=upper)
            .filter(|&lag| n - lag >= self.min_overlap)
            .map(|lag| SeasonalCandidate {
                period: lag,
                correlation: pearson(&data[..n - lag], &data[lag..]),
            })
            .filter(|c| c.strength() > self.threshold)
            .collect();

        // Strongest first; among equal strengths prefer positive correlation,
        // then the shorter lag.
        candidates.sort_by_key(|c| {
            (
                Reverse((c.strength() * STRENGTH_RESOLUTION).round() as i64),
                c.correlation < 0.0,
                c.period,
            )
        });
        candidates.truncate(self.max_candidates);

        SeasonalityReport::from_candidates(candidates)
    }
}

/// Scan with default settings and `max_period = n / 2`
pub fn analyze_seasonality(data: &[f64]) -> SeasonalityReport {
    SeasonalityAnalyzer::new().analyze(data, data.len() / 2)
}
