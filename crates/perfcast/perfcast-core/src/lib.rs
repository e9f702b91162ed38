//! Perfcast Core
//!
//! Forecasting strategies, automatic algorithm selection, trend and
//! seasonality diagnostics, and the [`ForecastEngine`] that ties them
//! together.

pub mod confidence;
pub mod engine;
pub mod metrics;
pub mod seasonality;
pub mod selector;
pub mod stats;
pub mod strategy;
pub mod trend;

// Re-export SPI types for implementations
pub use perfcast_spi::{
    ErrorKind, FitMetrics, ForecastError, ForecastModel, ForecastPoint, ForecastRequest,
    ForecastResult, ForecastStatus, ModelFit, Result, SeasonalCandidate, SeasonalPeriod,
    SeasonalityDetector, SeasonalityReport, SeriesProfile, StrategyChoice, StrategyKind,
    StrategySelector, TimeSeriesSample, TrendDetector, TrendDirection, TrendReport, MIN_SAMPLES,
};

// Re-export main types
pub use confidence::{half_widths, z_score, IntervalPolicy};
pub use engine::{ForecastEngine, MAX_HORIZON};
pub use metrics::fit_metrics;
pub use seasonality::{analyze_seasonality, SeasonalityAnalyzer};
pub use selector::{AlgorithmSelector, SelectorThresholds};
pub use strategy::{
    DifferencingStrategy, HoltWintersParams, HoltWintersStrategy, SlidingWindowStrategy, Strategy,
    TrendSeasonalStrategy,
};
pub use trend::TrendAnalyzer;
