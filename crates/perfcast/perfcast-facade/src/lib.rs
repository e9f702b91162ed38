//! Perfcast Facade
//!
//! High-level API for forecasting performance metrics. Re-exports all public
//! types from the perfcast stack for convenient usage.
//!
//! ```no_run
//! use perfcast_facade::prelude::*;
//!
//! # fn samples() -> Vec<TimeSeriesSample> { Vec::new() }
//! let engine = ForecastEngine::new();
//! let request = ForecastRequest::new(12).detect_seasonality();
//! let result = engine.run(&samples(), &request);
//! println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
//! ```

// Re-export everything from API (which includes SPI types and config)
pub use perfcast_api::*;

// Explicit re-exports for documentation
pub use perfcast_api::prelude;

// Re-export core modules for direct access
pub use perfcast_core::{confidence, engine, metrics, seasonality, selector, stats, strategy, trend};

// Re-export core types at root
pub use perfcast_core::{
    analyze_seasonality, fit_metrics, AlgorithmSelector, ForecastEngine, HoltWintersParams,
    SeasonalityAnalyzer, SelectorThresholds, Strategy, TrendAnalyzer, MAX_HORIZON,
};

// Re-export SPI contracts and diagnostics
pub use perfcast_spi::{
    FitMetrics, ForecastModel, ModelFit, SeasonalCandidate, SeasonalityDetector,
    SeasonalityReport, SeriesProfile, StrategySelector, TrendDetector, TrendDirection,
    TrendReport, MIN_SAMPLES,
};
