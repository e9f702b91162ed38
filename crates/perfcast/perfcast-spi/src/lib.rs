//! Forecast Service Provider Interface
//!
//! Defines the data model, error taxonomy and contracts shared by every
//! forecasting strategy and diagnostic:
//!
//! - [`ForecastModel`]: a strategy that fits a series and projects it forward
//! - [`StrategySelector`]: picks a strategy from series statistics
//! - [`TrendDetector`] / [`SeasonalityDetector`]: standalone diagnostics
//! - [`ForecastError`]: standardized error type for all forecast operations

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{
    ForecastModel, SeasonalityDetector, StrategySelector, TrendDetector, MIN_SAMPLES,
};
pub use error::{ErrorKind, ForecastError, Result};
pub use model::{
    FitMetrics, ForecastPoint, ForecastRequest, ForecastResult, ForecastStatus, ModelFit,
    SeasonalCandidate, SeasonalPeriod, SeasonalityReport, SeriesProfile, StrategyChoice,
    StrategyKind, TimeSeriesSample, TrendDirection, TrendReport,
};
