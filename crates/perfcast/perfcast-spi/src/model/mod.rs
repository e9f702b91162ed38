//! Model module containing data structures

mod forecast_result;
mod model_fit;
mod request;
mod sample;
mod seasonality_report;
mod series_profile;
mod strategy;
mod trend_report;

pub use forecast_result::{FitMetrics, ForecastPoint, ForecastResult, ForecastStatus};
pub use model_fit::ModelFit;
pub use request::{ForecastRequest, SeasonalPeriod};
pub use sample::TimeSeriesSample;
pub use seasonality_report::{SeasonalCandidate, SeasonalityReport};
pub use series_profile::SeriesProfile;
pub use strategy::{StrategyChoice, StrategyKind};
pub use trend_report::{TrendDirection, TrendReport};
