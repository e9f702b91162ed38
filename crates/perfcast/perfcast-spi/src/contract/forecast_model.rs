//! Trait for forecasting strategies

use crate::error::Result;
use crate::model::{ModelFit, StrategyKind};

/// Minimum samples any strategy accepts
pub const MIN_SAMPLES: usize = 10;

/// A forecasting technique: a pure function of
/// `values × horizon × seasonal period`.
///
/// Implementations hold only configuration; every call allocates its own
/// working state, so a single instance can serve concurrent callers.
///
/// # Example
///
/// ```rust,ignore
/// use perfcast_spi::ForecastModel;
///
/// fn project<M: ForecastModel>(model: &M, values: &[f64]) -> perfcast_spi::Result<Vec<f64>> {
///     Ok(model.fit_forecast(values, 3, None)?.point)
/// }
/// ```
pub trait ForecastModel: Send + Sync {
    /// Which strategy this is
    fn kind(&self) -> StrategyKind;

    /// Smallest series this strategy accepts for the given period
    fn min_samples(&self, period: Option<usize>) -> usize {
        match period {
            Some(p) => MIN_SAMPLES.max(2 * p),
            None => MIN_SAMPLES,
        }
    }

    /// Fit the history and project `horizon` steps ahead.
    ///
    /// Returns the point forecast, the strategy's own per-step standard
    /// errors and the in-sample (actual, fitted) pairs.
    fn fit_forecast(&self, values: &[f64], horizon: usize, period: Option<usize>)
        -> Result<ModelFit>;
}
