//! Trait for seasonality detection

use crate::model::SeasonalityReport;

/// Trait for seasonality detection
pub trait SeasonalityDetector: Send + Sync {
    /// Scan lags up to `max_period` for repeating cycles
    fn analyze(&self, data: &[f64], max_period: usize) -> SeasonalityReport;

    /// Strongest positively correlated period, the one a forecast can
    /// model. The report's `dominant_period` may instead be an anti-phase lag.
    fn detect(&self, data: &[f64], max_period: usize) -> Option<usize> {
        self.analyze(data, max_period).usable_period()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SeasonalCandidate;

    /// Mock implementation: Fixed period detector (always returns a fixed period)
    struct FixedPeriodDetector {
        period: usize,
    }

    impl SeasonalityDetector for FixedPeriodDetector {
        fn analyze(&self, data: &[f64], max_period: usize) -> SeasonalityReport {
            if data.len() < self.period * 2 || self.period > max_period {
                SeasonalityReport::default()
            } else {
                SeasonalityReport::from_candidates(vec![SeasonalCandidate {
                    period: self.period,
                    correlation: 1.0,
                }])
            }
        }
    }

    /// Mock implementation: No seasonality detector (always returns nothing)
    struct NoSeasonalityDetector;

    impl SeasonalityDetector for NoSeasonalityDetector {
        fn analyze(&self, _data: &[f64], _max_period: usize) -> SeasonalityReport {
            SeasonalityReport::default()
        }
    }

    #[test]
    fn test_fixed_period_detector() {
        let detector = FixedPeriodDetector { period: 4 };
        let data = vec![0.0; 20];
        assert_eq!(detector.detect(&data, 10), Some(4));
        assert_eq!(detector.detect(&data, 3), None);
        assert_eq!(detector.detect(&data[..6], 10), None);
    }

    #[test]
    fn test_no_seasonality_detector() {
        let detector = NoSeasonalityDetector;
        let report = detector.analyze(&[1.0, 2.0, 3.0], 10);
        assert!(!report.has_seasonality);
        assert_eq!(detector.detect(&[1.0, 2.0, 3.0], 10), None);
    }

    /// Mock implementation: strongest lag is anti-correlated
    struct AntiPhaseDetector;

    impl SeasonalityDetector for AntiPhaseDetector {
        fn analyze(&self, _data: &[f64], _max_period: usize) -> SeasonalityReport {
            SeasonalityReport::from_candidates(vec![
                SeasonalCandidate {
                    period: 3,
                    correlation: -0.9,
                },
                SeasonalCandidate {
                    period: 6,
                    correlation: 0.8,
                },
            ])
        }
    }

    #[test]
    fn test_detect_skips_anti_phase_lag() {
        let detector = AntiPhaseDetector;
        let report = detector.analyze(&[0.0; 20], 10);
        assert_eq!(report.dominant_period, Some(3));
        assert_eq!(detector.detect(&[0.0; 20], 10), Some(6));
    }

    #[test]
    fn test_trait_object_usage() {
        let detectors: Vec<Box<dyn SeasonalityDetector>> = vec![
            Box::new(FixedPeriodDetector { period: 2 }),
            Box::new(NoSeasonalityDetector),
        ];
        let data = vec![1.0; 10];
        let results: Vec<Option<usize>> = detectors.iter().map(|d| d.detect(&data, 5)).collect();
        assert_eq!(results, vec![Some(2), None]);
    }
}
