//! Triple exponential smoothing (Holt-Winters, additive)
//!
//! Level, trend and seasonal components are updated once per observation:
//!
//! - `level = α(y_t − s) + (1 − α)(level + trend)`
//! - `trend = β(level_new − level_old) + (1 − β)trend`
//! - `season[t mod P] = γ(y_t − level_new) + (1 − γ)s`
//!
//! Without a seasonal period the seasonal term stays at zero, which reduces
//! the recursion to Holt's linear method.

use super::check_inputs;
use perfcast_spi::{ForecastError, ForecastModel, ModelFit, Result, StrategyKind};
use serde::{Deserialize, Serialize};

/// Proportion of the point forecast used as the native standard error
const MAGNITUDE_ERROR_RATIO: f64 = 0.1;

/// Smoothing constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoltWintersParams {
    /// Level smoothing
    pub alpha: f64,
    /// Trend smoothing
    pub beta: f64,
    /// Seasonal smoothing
    pub gamma: f64,
}

impl Default for HoltWintersParams {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            beta: 0.1,
            gamma: 0.1,
        }
    }
}

impl HoltWintersParams {
    /// Create validated smoothing constants, each in `(0, 1)`
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        for (name, value) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !(0.0 < value && value < 1.0) {
                return Err(ForecastError::invalid(
                    name,
                    "must be between 0 and 1 (exclusive)",
                ));
            }
        }
        Ok(Self { alpha, beta, gamma })
    }
}

/// Final smoothing state after a pass over the history
#[derive(Debug, Clone, PartialEq)]
struct SmoothingState {
    level: f64,
    trend: f64,
    seasonal: Vec<f64>,
    fitted: Vec<f64>,
}

/// Holt-Winters forecasting strategy
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoltWintersStrategy {
    params: HoltWintersParams,
}

impl HoltWintersStrategy {
    pub fn new(params: HoltWintersParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> HoltWintersParams {
        self.params
    }

    fn smooth(&self, values: &[f64], period: usize) -> SmoothingState {
        let HoltWintersParams { alpha, beta, gamma } = self.params;
        let n = values.len();
        let seasonal_enabled = period >= 2;
        let p = period.max(1);

        let mut level = values[0];
        let mut trend = 0.0;
        let mut seasonal = vec![0.0; p];
        if seasonal_enabled {
            for (i, s) in seasonal.iter_mut().enumerate().take(n.min(p)) {
                *s = values[i] - values[0];
            }
        }

        // One-step-ahead predictions for t = 1..n-1
        let mut fitted = vec![0.0; n - 1];

        for t in 1..n {
            let s = if seasonal_enabled && t >= p {
                seasonal[(t - p) % p]
            } else {
                0.0
            };

            fitted[t - 1] = level + trend + s;

            let prev_level = level;
            level = alpha * (values[t] - s) + (1.0 - alpha) * (level + trend);
            trend = beta * (level - prev_level) + (1.0 - beta) * trend;
            if seasonal_enabled {
                seasonal[t % p] = gamma * (values[t] - level) + (1.0 - gamma) * s;
            }
        }

        SmoothingState {
            level,
            trend,
            seasonal,
            fitted,
        }
    }
}

impl ForecastModel for HoltWintersStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::HoltWinters
    }

    fn fit_forecast(
        &self,
        values: &[f64],
        horizon: usize,
        period: Option<usize>,
    ) -> Result<ModelFit> {
        check_inputs(self, values, horizon, period)?;

        let n = values.len();
        let p = period.unwrap_or(1);
        let state = self.smooth(values, p);

        let mut point = vec![0.0; horizon];
        let mut native_std_errors = vec![0.0; horizon];
        for h in 1..=horizon {
            let seasonal = if p >= 2 {
                state.seasonal[(n + h - 1) % p]
            } else {
                0.0
            };
            let value = state.level + h as f64 * state.trend + seasonal;
            point[h - 1] = value;
            native_std_errors[h - 1] = MAGNITUDE_ERROR_RATIO * value.abs();
        }

        Ok(ModelFit {
            point,
            native_std_errors,
            actual: values[1..].to_vec(),
            fitted: state.fitted,
        })
    }
}
