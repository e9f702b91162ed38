//! Trait for automatic strategy selection

use crate::model::{SeriesProfile, StrategyKind};

/// Picks a forecasting strategy from series statistics
pub trait StrategySelector: Send + Sync {
    /// Summary statistics the decision is based on
    fn profile(&self, values: &[f64]) -> SeriesProfile;

    /// Strategy for the given profile
    fn decide(&self, profile: &SeriesProfile) -> StrategyKind;

    /// Profile the series and decide
    fn select(&self, values: &[f64]) -> StrategyKind {
        self.decide(&self.profile(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock implementation: always differencing above a mean cutoff
    struct CutoffSelector(f64);

    impl StrategySelector for CutoffSelector {
        fn profile(&self, values: &[f64]) -> SeriesProfile {
            let mean = values.iter().sum::<f64>() / values.len().max(1) as f64;
            SeriesProfile {
                mean,
                ..Default::default()
            }
        }

        fn decide(&self, profile: &SeriesProfile) -> StrategyKind {
            if profile.mean > self.0 {
                StrategyKind::Differencing
            } else {
                StrategyKind::HoltWinters
            }
        }
    }

    #[test]
    fn test_select_uses_profile() {
        let selector = CutoffSelector(5.0);
        assert_eq!(selector.select(&[10.0, 10.0]), StrategyKind::Differencing);
        assert_eq!(selector.select(&[1.0, 2.0]), StrategyKind::HoltWinters);
    }
}
