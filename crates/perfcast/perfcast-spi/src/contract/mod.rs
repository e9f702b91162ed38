//! Contract module containing trait definitions for forecast operations

mod forecast_model;
mod seasonality_detector;
mod strategy_selector;
mod trend_detector;

pub use forecast_model::{ForecastModel, MIN_SAMPLES};
pub use seasonality_detector::SeasonalityDetector;
pub use strategy_selector::StrategySelector;
pub use trend_detector::TrendDetector;
