//! Perfcast Consumer API
//!
//! Configuration types for consumers of the forecast engine. Every section
//! deserializes with defaults for missing fields, so a partial JSON document
//! is a valid configuration.

use perfcast_core::{
    AlgorithmSelector, ForecastEngine, HoltWintersParams, SeasonalityAnalyzer,
    SelectorThresholds, TrendAnalyzer,
};
use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use perfcast_spi::{
    ErrorKind, ForecastError, ForecastPoint, ForecastRequest, ForecastResult, ForecastStatus,
    Result, SeasonalPeriod, StrategyChoice, StrategyKind, TimeSeriesSample,
};

pub use perfcast_core::IntervalPolicy;

/// Smoothing constants for the HoltWinters strategy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HoltWintersConfig {
    /// Level smoothing
    pub alpha: f64,
    /// Trend smoothing
    pub beta: f64,
    /// Seasonal smoothing
    pub gamma: f64,
}

impl Default for HoltWintersConfig {
    fn default() -> Self {
        let params = HoltWintersParams::default();
        Self {
            alpha: params.alpha,
            beta: params.beta,
            gamma: params.gamma,
        }
    }
}

impl HoltWintersConfig {
    /// Validate into engine parameters
    pub fn to_params(&self) -> Result<HoltWintersParams> {
        HoltWintersParams::new(self.alpha, self.beta, self.gamma)
    }
}

/// Differencing strategy settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DifferencingConfig {
    /// Project seasonal differences from the matching phase of the last
    /// cycle instead of the last observation
    pub seasonal_anchor: bool,
}

/// Thresholds for automatic strategy selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectorConfig {
    /// Trend strength above which Differencing is considered
    pub trend_threshold: f64,
    /// Volatility below which Differencing is considered
    pub volatility_threshold: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        let thresholds = SelectorThresholds::default();
        Self {
            trend_threshold: thresholds.trend,
            volatility_threshold: thresholds.volatility,
        }
    }
}

impl SelectorConfig {
    /// Set the trend threshold
    pub fn trend_threshold(mut self, threshold: f64) -> Self {
        self.trend_threshold = threshold.max(0.0);
        self
    }

    /// Set the volatility threshold
    pub fn volatility_threshold(mut self, threshold: f64) -> Self {
        self.volatility_threshold = threshold.max(0.0);
        self
    }

    fn thresholds(&self) -> Result<SelectorThresholds> {
        for (name, value) in [
            ("trend_threshold", self.trend_threshold),
            ("volatility_threshold", self.volatility_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ForecastError::invalid(name, "must be a non-negative number"));
            }
        }
        Ok(SelectorThresholds {
            trend: self.trend_threshold,
            volatility: self.volatility_threshold,
        })
    }
}

/// Confidence band settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Nominal coverage of the band
    pub level: f64,
    /// Error-growth model for the band width
    pub policy: IntervalPolicy,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            level: 0.95,
            policy: IntervalPolicy::ResidualGrowth,
        }
    }
}

impl ConfidenceConfig {
    /// Set the confidence level
    pub fn level(mut self, level: f64) -> Self {
        self.level = level.clamp(0.5, 0.999);
        self
    }

    /// Set the interval policy
    pub fn policy(mut self, policy: IntervalPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Seasonality and trend diagnostics settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeasonalityConfig {
    /// Minimum |autocorrelation| for a lag to count as seasonal
    pub threshold: f64,
    /// Number of candidate periods reported
    pub max_candidates: usize,
    /// Overlapping points required to evaluate a lag
    pub min_overlap: usize,
    /// Trend strength above which a trend is reported
    pub trend_threshold: f64,
}

impl Default for SeasonalityConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            max_candidates: 5,
            min_overlap: 5,
            trend_threshold: perfcast_core::trend::DEFAULT_TREND_THRESHOLD,
        }
    }
}

impl SeasonalityConfig {
    /// Set the autocorrelation threshold
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Set the number of reported candidates
    pub fn max_candidates(mut self, count: usize) -> Self {
        self.max_candidates = count.max(1);
        self
    }

    /// Set the minimum lag overlap
    pub fn min_overlap(mut self, overlap: usize) -> Self {
        self.min_overlap = overlap.max(2);
        self
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ForecastConfig {
    pub holt_winters: HoltWintersConfig,
    pub differencing: DifferencingConfig,
    pub selector: SelectorConfig,
    pub confidence: ConfidenceConfig,
    pub seasonality: SeasonalityConfig,
}

impl ForecastConfig {
    /// Create a configuration with the specified interval policy
    pub fn with_policy(policy: IntervalPolicy) -> Self {
        Self {
            confidence: ConfidenceConfig::default().policy(policy),
            ..Default::default()
        }
    }

    /// Set the HoltWinters smoothing constants
    pub fn smoothing(mut self, alpha: f64, beta: f64, gamma: f64) -> Self {
        self.holt_winters = HoltWintersConfig { alpha, beta, gamma };
        self
    }

    /// Toggle seasonal anchoring for Differencing
    pub fn seasonal_anchor(mut self, enabled: bool) -> Self {
        self.differencing.seasonal_anchor = enabled;
        self
    }

    /// Set the selector thresholds
    pub fn selector(mut self, selector: SelectorConfig) -> Self {
        self.selector = selector;
        self
    }

    /// Set the confidence level
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.confidence = self.confidence.level(level);
        self
    }

    /// Set the seasonality settings
    pub fn seasonality(mut self, seasonality: SeasonalityConfig) -> Self {
        self.seasonality = seasonality;
        self
    }

    /// Validate the configuration and build an engine from it
    pub fn build_engine(&self) -> Result<ForecastEngine> {
        let params = self.holt_winters.to_params()?;
        let thresholds = self.selector.thresholds()?;

        let level = self.confidence.level;
        if !(level.is_finite() && 0.0 < level && level < 1.0) {
            return Err(ForecastError::invalid(
                "confidence.level",
                "must be between 0 and 1 (exclusive)",
            ));
        }

        let seasonality = SeasonalityAnalyzer::new()
            .with_threshold(self.seasonality.threshold)
            .with_max_candidates(self.seasonality.max_candidates)
            .with_min_overlap(self.seasonality.min_overlap);

        Ok(ForecastEngine::new()
            .with_holt_winters(params)
            .with_selector(AlgorithmSelector::new(thresholds))
            .with_seasonality_analyzer(seasonality)
            .with_trend_analyzer(TrendAnalyzer::with_threshold(
                self.seasonality.trend_threshold,
            ))
            .with_seasonal_anchor(self.differencing.seasonal_anchor)
            .with_interval_policy(self.confidence.policy)
            .with_confidence_level(level))
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ConfidenceConfig, DifferencingConfig, ForecastConfig, HoltWintersConfig,
        SeasonalityConfig, SelectorConfig,
    };
    pub use perfcast_core::{ForecastEngine, IntervalPolicy};
    pub use perfcast_spi::{
        ErrorKind, ForecastError, ForecastPoint, ForecastRequest, ForecastResult, ForecastStatus,
        Result, SeasonalPeriod, StrategyChoice, StrategyKind, TimeSeriesSample,
    };
}
