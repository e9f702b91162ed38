//! Forecasting strategies
//!
//! Four techniques share the [`ForecastModel`] contract:
//!
//! - [`HoltWintersStrategy`]: triple exponential smoothing
//! - [`DifferencingStrategy`]: ARIMA-style differencing with drift
//! - [`TrendSeasonalStrategy`]: OLS trend plus per-phase seasonal effect
//! - [`SlidingWindowStrategy`]: recent-window drift extrapolation
//!
//! [`Strategy`] is the tagged variant the engine dispatches on.

pub mod differencing;
pub mod holt_winters;
pub mod sliding_window;
pub mod trend_seasonal;

pub use differencing::{DifferenceOrder, DifferencingStrategy};
pub use holt_winters::{HoltWintersParams, HoltWintersStrategy};
pub use sliding_window::SlidingWindowStrategy;
pub use trend_seasonal::{TrendSeasonalComponents, TrendSeasonalStrategy};

use perfcast_spi::{ForecastError, ForecastModel, ModelFit, Result, StrategyKind, MIN_SAMPLES};

/// One of the four strategies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    HoltWinters(HoltWintersStrategy),
    Differencing(DifferencingStrategy),
    TrendSeasonal(TrendSeasonalStrategy),
    SlidingWindow(SlidingWindowStrategy),
}

impl Strategy {
    /// Strategy for `kind`, with HoltWinters using `params`
    pub fn from_kind(kind: StrategyKind, params: HoltWintersParams) -> Self {
        match kind {
            StrategyKind::HoltWinters => Strategy::HoltWinters(HoltWintersStrategy::new(params)),
            StrategyKind::Differencing => Strategy::Differencing(DifferencingStrategy::new()),
            StrategyKind::TrendSeasonal => Strategy::TrendSeasonal(TrendSeasonalStrategy::new()),
            StrategyKind::SlidingWindow => Strategy::SlidingWindow(SlidingWindowStrategy::new()),
        }
    }

    /// Enable seasonal anchoring when this is the Differencing strategy
    pub fn with_seasonal_anchor(self, enabled: bool) -> Self {
        match self {
            Strategy::Differencing(m) => Strategy::Differencing(m.with_seasonal_anchor(enabled)),
            other => other,
        }
    }

    fn model(&self) -> &dyn ForecastModel {
        match self {
            Strategy::HoltWinters(m) => m,
            Strategy::Differencing(m) => m,
            Strategy::TrendSeasonal(m) => m,
            Strategy::SlidingWindow(m) => m,
        }
    }
}

impl ForecastModel for Strategy {
    fn kind(&self) -> StrategyKind {
        self.model().kind()
    }

    fn min_samples(&self, period: Option<usize>) -> usize {
        self.model().min_samples(period)
    }

    fn fit_forecast(
        &self,
        values: &[f64],
        horizon: usize,
        period: Option<usize>,
    ) -> Result<ModelFit> {
        self.model().fit_forecast(values, horizon, period)
    }
}

/// Shared argument validation for every strategy
pub(crate) fn check_inputs<M: ForecastModel + ?Sized>(
    model: &M,
    values: &[f64],
    horizon: usize,
    period: Option<usize>,
) -> Result<()> {
    let n = values.len();
    if n < MIN_SAMPLES {
        return Err(ForecastError::InsufficientData {
            required: MIN_SAMPLES,
            actual: n,
        });
    }
    if horizon < 1 {
        return Err(ForecastError::invalid("horizon", "must be at least 1"));
    }
    if let Some(p) = period {
        if p < 2 || p > n / 2 {
            return Err(ForecastError::invalid(
                "seasonal_period",
                format!("must be between 2 and {} for {} samples, got {}", n / 2, n, p),
            ));
        }
    }
    let required = model.min_samples(period);
    if n < required {
        return Err(ForecastError::InsufficientData {
            required,
            actual: n,
        });
    }
    Ok(())
}
