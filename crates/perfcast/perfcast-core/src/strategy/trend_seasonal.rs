//! Trend plus seasonal-effect decomposition
//!
//! Fits an ordinary least squares line over sample index, then averages the
//! detrended residuals per seasonal phase. Forecasts extend the line and add
//! the phase effect.

use super::check_inputs;
use crate::stats::{linear_fit, std_dev, LinearFit};
use perfcast_spi::{ForecastModel, ModelFit, Result, StrategyKind};

/// Fitted trend line and per-phase seasonal effects
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeasonalComponents {
    pub trend: LinearFit,
    /// Mean detrended residual per phase `t mod P`; a single zero without
    /// seasonality
    pub seasonal_effect: Vec<f64>,
}

impl TrendSeasonalComponents {
    /// Model value at index `t`
    pub fn value_at(&self, t: usize) -> f64 {
        let effect = self.seasonal_effect[t % self.seasonal_effect.len()];
        self.trend.value_at(t as f64) + effect
    }
}

/// Trend/seasonal decomposition forecasting strategy
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrendSeasonalStrategy;

impl TrendSeasonalStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Decompose the history into a trend line and seasonal effects
    pub fn decompose(values: &[f64], period: Option<usize>) -> TrendSeasonalComponents {
        let trend = linear_fit(values);
        let p = period.filter(|&p| p >= 2).unwrap_or(1);

        let mut sums = vec![0.0; p];
        let mut counts = vec![0usize; p];
        if p > 1 {
            for (t, &y) in values.iter().enumerate() {
                sums[t % p] += y - trend.value_at(t as f64);
                counts[t % p] += 1;
            }
        }

        let seasonal_effect = sums
            .iter()
            .zip(counts.iter())
            .map(|(&sum, &count)| if count > 0 { sum / count as f64 } else { 0.0 })
            .collect();

        TrendSeasonalComponents {
            trend,
            seasonal_effect,
        }
    }
}

impl ForecastModel for TrendSeasonalStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TrendSeasonal
    }

    fn fit_forecast(
        &self,
        values: &[f64],
        horizon: usize,
        period: Option<usize>,
    ) -> Result<ModelFit> {
        check_inputs(self, values, horizon, period)?;

        let n = values.len();
        let components = Self::decompose(values, period);

        let fitted: Vec<f64> = (0..n).map(|t| components.value_at(t)).collect();
        let residuals: Vec<f64> = values
            .iter()
            .zip(fitted.iter())
            .map(|(y, f)| y - f)
            .collect();
        let residual_std = std_dev(&residuals);

        let point = (1..=horizon)
            .map(|h| components.value_at(n - 1 + h))
            .collect();

        Ok(ModelFit {
            point,
            native_std_errors: vec![residual_std; horizon],
            actual: values.to_vec(),
            fitted,
        })
    }
}
