//! Forecast request parameters

use crate::model::StrategyChoice;
use serde::{Deserialize, Serialize};

/// How the seasonal period is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeasonalPeriod {
    /// Model without seasonality
    #[default]
    None,
    /// Samples per cycle, e.g. 24 for hourly data with a daily cycle
    Fixed(usize),
    /// Use the dominant autocorrelation lag, if any
    Detect,
}

impl From<Option<usize>> for SeasonalPeriod {
    fn from(period: Option<usize>) -> Self {
        match period {
            Some(p) => SeasonalPeriod::Fixed(p),
            None => SeasonalPeriod::None,
        }
    }
}

/// Scalar parameters of a forecast call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    /// Steps to project beyond the last sample
    pub horizon: usize,
    #[serde(default)]
    pub seasonal_period: SeasonalPeriod,
    #[serde(default)]
    pub strategy: StrategyChoice,
}

impl ForecastRequest {
    /// Auto-selected, non-seasonal request for `horizon` steps
    pub fn new(horizon: usize) -> Self {
        Self {
            horizon,
            seasonal_period: SeasonalPeriod::None,
            strategy: StrategyChoice::Auto,
        }
    }

    pub fn seasonal_period(mut self, period: usize) -> Self {
        self.seasonal_period = SeasonalPeriod::Fixed(period);
        self
    }

    pub fn detect_seasonality(mut self) -> Self {
        self.seasonal_period = SeasonalPeriod::Detect;
        self
    }

    pub fn strategy(mut self, strategy: impl Into<StrategyChoice>) -> Self {
        self.strategy = strategy.into();
        self
    }
}
