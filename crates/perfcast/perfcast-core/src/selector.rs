//! Heuristic strategy selection
//!
//! Chooses a strategy from volatility and a two-halves trend measure. The
//! thresholds are a placeholder policy, not fitted against held-out data.

use crate::stats::{mean, safe_ratio, std_dev};
use perfcast_spi::{SeriesProfile, StrategyKind, StrategySelector};
use serde::{Deserialize, Serialize};

/// Decision thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorThresholds {
    /// Trend strength above which a trend counts as dominant
    pub trend: f64,
    /// Volatility at or above which the series counts as noisy
    pub volatility: f64,
}

impl Default for SelectorThresholds {
    fn default() -> Self {
        Self {
            trend: 0.2,
            volatility: 0.5,
        }
    }
}

/// Rule-based [`StrategySelector`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlgorithmSelector {
    thresholds: SelectorThresholds,
}

impl AlgorithmSelector {
    pub fn new(thresholds: SelectorThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> SelectorThresholds {
        self.thresholds
    }
}

impl StrategySelector for AlgorithmSelector {
    fn profile(&self, values: &[f64]) -> SeriesProfile {
        let avg = mean(values);
        let spread = std_dev(values);
        let (first, second) = values.split_at(values.len() / 2);
        let first_mean = mean(first);

        SeriesProfile {
            mean: avg,
            std_dev: spread,
            volatility: safe_ratio(spread, avg.abs()),
            trend_strength: safe_ratio((mean(second) - first_mean).abs(), first_mean.abs()),
        }
    }

    fn decide(&self, profile: &SeriesProfile) -> StrategyKind {
        if profile.trend_strength > self.thresholds.trend
            && profile.volatility < self.thresholds.volatility
        {
            // dominant deterministic trend under controlled noise
            StrategyKind::Differencing
        } else {
            // noisy series and the default fallback both go to adaptive smoothing
            StrategyKind::HoltWinters
        }
    }
}
