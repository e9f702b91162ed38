//! Recent-window drift extrapolation
//!
//! Keeps a short memory of the latest observations and projects their average
//! step forward. In-sample quality is measured walk-forward: each position is
//! predicted from the window immediately preceding it.

use super::check_inputs;
use crate::stats::{lagged_differences, mean, std_dev};
use perfcast_spi::{ForecastModel, ModelFit, Result, StrategyKind};

/// Upper bound on the memory length
const MAX_MEMORY: usize = 10;

/// Sliding-window memory forecasting strategy
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlidingWindowStrategy;

impl SlidingWindowStrategy {
    pub fn new() -> Self {
        Self
    }

    /// `min(10, floor(n / 2))`
    pub fn memory_length(n: usize) -> usize {
        MAX_MEMORY.min(n / 2)
    }
}

impl ForecastModel for SlidingWindowStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SlidingWindow
    }

    fn fit_forecast(
        &self,
        values: &[f64],
        horizon: usize,
        period: Option<usize>,
    ) -> Result<ModelFit> {
        check_inputs(self, values, horizon, period)?;

        let n = values.len();
        let memory = Self::memory_length(n);
        let window_diffs = lagged_differences(&values[n - memory..], 1);
        let avg_diff = mean(&window_diffs);
        let diff_std = std_dev(&window_diffs);
        let last = values[n - 1];

        let mut point = vec![0.0; horizon];
        let mut native_std_errors = vec![0.0; horizon];
        for h in 1..=horizon {
            point[h - 1] = last + h as f64 * avg_diff;
            native_std_errors[h - 1] = diff_std * (h as f64).sqrt();
        }

        let mut actual = vec![0.0; n - memory];
        let mut fitted = vec![0.0; n - memory];
        for i in memory..n {
            let window = &values[i - memory..i];
            let step = mean(&lagged_differences(window, 1));
            actual[i - memory] = values[i];
            fitted[i - memory] = window[memory - 1] + step;
        }

        Ok(ModelFit {
            point,
            native_std_errors,
            actual,
            fitted,
        })
    }
}
