//! Confidence interval construction
//!
//! Turns a strategy's [`ModelFit`] into per-step half-widths around the point
//! forecast.

use crate::stats::{finite_or_zero, std_dev};
use perfcast_spi::ModelFit;
use serde::{Deserialize, Serialize};

/// Error-growth model applied to every strategy's forecast band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntervalPolicy {
    /// `z · σ_resid · sqrt(h)` with `σ_resid` the standard deviation of the
    /// strategy's in-sample one-step residuals
    #[default]
    ResidualGrowth,
    /// Each strategy's own standard error: magnitude-proportional for
    /// HoltWinters, random-walk growth for Differencing and SlidingWindow,
    /// constant for TrendSeasonal
    StrategyNative,
}

/// Half-widths of the confidence band for steps `1..=H`.
///
/// Always finite and non-negative.
pub fn half_widths(fit: &ModelFit, policy: IntervalPolicy, confidence_level: f64) -> Vec<f64> {
    let z = z_score(confidence_level);
    let horizon = fit.horizon();

    let raw: Vec<f64> = match policy {
        IntervalPolicy::ResidualGrowth => {
            let sigma = std_dev(&fit.residuals());
            (1..=horizon)
                .map(|h| z * sigma * (h as f64).sqrt())
                .collect()
        }
        IntervalPolicy::StrategyNative => (0..horizon)
            .map(|i| z * fit.native_std_errors.get(i).copied().unwrap_or(0.0))
            .collect(),
    };

    raw.into_iter()
        .map(|w| finite_or_zero(w).abs())
        .collect()
}

/// Get z-score for a given confidence level
pub fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        x if x >= 0.80 => 1.282,
        _ => 1.96, // default to 95%
    }
}
