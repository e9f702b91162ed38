//! Trend diagnostics

use crate::stats::linear_fit;
use perfcast_spi::{TrendDetector, TrendReport};

/// Default strength above which a trend is reported
pub const DEFAULT_TREND_THRESHOLD: f64 = 0.1;

/// Least-squares trend analyzer
///
/// `strength = sqrt(R²)` of the index regression; a series with no variance
/// has strength 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendAnalyzer {
    threshold: f64,
}

impl TrendAnalyzer {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_TREND_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendDetector for TrendAnalyzer {
    fn analyze(&self, data: &[f64]) -> TrendReport {
        if data.len() < 2 {
            return TrendReport::flat(data.first().copied().unwrap_or(0.0));
        }

        let fit = linear_fit(data);
        let strength = fit.r_squared.sqrt();

        TrendReport {
            slope: fit.slope,
            intercept: fit.intercept,
            strength,
            has_trend: strength > self.threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfcast_spi::TrendDirection;

    #[test]
    fn test_linear_trend() {
        let data: Vec<f64> = (0..20).map(|i| 10.0 + 0.5 * i as f64).collect();
        let report = TrendAnalyzer::new().analyze(&data);
        assert!((report.slope - 0.5).abs() < 1e-10);
        assert!((report.intercept - 10.0).abs() < 1e-10);
        assert!((report.strength - 1.0).abs() < 1e-10);
        assert!(report.has_trend);
        assert_eq!(report.direction(), TrendDirection::Up);
    }

    #[test]
    fn test_constant_series_has_no_trend() {
        let report = TrendAnalyzer::new().analyze(&[50.0; 20]);
        assert_eq!(report.strength, 0.0);
        assert!(!report.has_trend);
        assert_eq!(report.intercept, 50.0);
    }

    #[test]
    fn test_short_input() {
        assert_eq!(TrendAnalyzer::new().analyze(&[]), TrendReport::flat(0.0));
        assert_eq!(TrendAnalyzer::new().analyze(&[3.0]), TrendReport::flat(3.0));
    }

    #[test]
    fn test_periodic_series_is_weak() {
        let data: Vec<f64> = (0..48)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin())
            .collect();
        let report = TrendAnalyzer::new().analyze(&data);
        assert!(report.strength < 0.3);
        assert!((0.0..=1.0).contains(&report.strength));
    }

    #[test]
    fn test_custom_threshold() {
        let data = vec![1.0, 3.0, 2.0, 4.0, 3.0, 5.0];
        let lenient = TrendAnalyzer::with_threshold(0.0).analyze(&data);
        let strict = TrendAnalyzer::with_threshold(0.99).analyze(&data);
        assert!(lenient.has_trend);
        assert!(!strict.has_trend);
    }
}
