//! Forecast orchestration
//!
//! [`ForecastEngine`] validates input, resolves the seasonal period and the
//! strategy, runs it, and assembles the [`ForecastResult`] with confidence
//! bands, in-sample metrics and a confidence score. The engine holds only
//! configuration; every call is a pure function of its arguments.

use crate::confidence::{half_widths, IntervalPolicy};
use crate::metrics::fit_metrics;
use crate::seasonality::SeasonalityAnalyzer;
use crate::selector::AlgorithmSelector;
use crate::stats::std_dev;
use crate::strategy::{HoltWintersParams, Strategy};
use crate::trend::TrendAnalyzer;
use chrono::{DateTime, Duration, Utc};
use perfcast_spi::{
    FitMetrics, ForecastError, ForecastModel, ForecastPoint, ForecastRequest, ForecastResult,
    ForecastStatus, Result, SeasonalPeriod, SeasonalityDetector, SeasonalityReport,
    StrategyChoice, StrategyKind, StrategySelector, TimeSeriesSample, TrendDetector, TrendReport,
    MIN_SAMPLES,
};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Largest horizon a single request may ask for
pub const MAX_HORIZON: usize = 100_000;

/// Score multiplier applied when a numeric fallback was needed
const DEGRADED_PENALTY: f64 = 0.5;

/// Interval assumed when consecutive timestamps do not advance
fn fallback_interval() -> Duration {
    Duration::hours(1)
}

/// Stateless forecasting orchestrator
#[derive(Debug, Clone, Copy)]
pub struct ForecastEngine {
    holt_winters: HoltWintersParams,
    selector: AlgorithmSelector,
    seasonality: SeasonalityAnalyzer,
    trend: TrendAnalyzer,
    interval_policy: IntervalPolicy,
    confidence_level: f64,
    seasonal_anchor: bool,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastEngine {
    pub fn new() -> Self {
        Self {
            holt_winters: HoltWintersParams::default(),
            selector: AlgorithmSelector::default(),
            seasonality: SeasonalityAnalyzer::default(),
            trend: TrendAnalyzer::default(),
            interval_policy: IntervalPolicy::default(),
            confidence_level: 0.95,
            seasonal_anchor: false,
        }
    }

    pub fn with_holt_winters(mut self, params: HoltWintersParams) -> Self {
        self.holt_winters = params;
        self
    }

    pub fn with_selector(mut self, selector: AlgorithmSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_seasonality_analyzer(mut self, analyzer: SeasonalityAnalyzer) -> Self {
        self.seasonality = analyzer;
        self
    }

    pub fn with_trend_analyzer(mut self, analyzer: TrendAnalyzer) -> Self {
        self.trend = analyzer;
        self
    }

    /// Project seasonal differences from the matching phase of the last cycle
    pub fn with_seasonal_anchor(mut self, enabled: bool) -> Self {
        self.seasonal_anchor = enabled;
        self
    }

    pub fn with_interval_policy(mut self, policy: IntervalPolicy) -> Self {
        self.interval_policy = policy;
        self
    }

    /// Nominal coverage of the bands, clamped to `[0.5, 0.999]`
    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = if level.is_finite() {
            level.clamp(0.5, 0.999)
        } else {
            0.95
        };
        self
    }

    pub fn interval_policy(&self) -> IntervalPolicy {
        self.interval_policy
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn seasonal_anchor(&self) -> bool {
        self.seasonal_anchor
    }

    /// Forecast `horizon` steps beyond the last sample.
    ///
    /// Never fails: invalid or insufficient input yields a result with
    /// `status = Error`, the error category and an explanatory message.
    pub fn forecast(
        &self,
        series: &[TimeSeriesSample],
        horizon: usize,
        seasonal_period: SeasonalPeriod,
        strategy: StrategyChoice,
    ) -> ForecastResult {
        match self.try_forecast(series, horizon, seasonal_period, strategy) {
            Ok(result) => result,
            Err(error) => {
                warn!(
                    samples = series.len(),
                    horizon,
                    strategy = %strategy,
                    error = %error,
                    "forecast rejected"
                );
                let requested = match strategy {
                    StrategyChoice::Explicit(kind) => Some(kind),
                    StrategyChoice::Auto => None,
                };
                ForecastResult::failure(requested, &error)
            }
        }
    }

    /// [`forecast`](Self::forecast) driven by a request record
    pub fn run(&self, series: &[TimeSeriesSample], request: &ForecastRequest) -> ForecastResult {
        self.forecast(
            series,
            request.horizon,
            request.seasonal_period,
            request.strategy,
        )
    }

    /// Run independent requests in parallel; results keep input order.
    pub fn forecast_batch(
        &self,
        jobs: &[(&[TimeSeriesSample], ForecastRequest)],
    ) -> Vec<ForecastResult> {
        jobs.par_iter()
            .map(|(series, request)| self.run(series, request))
            .collect()
    }

    /// Propagating variant of [`forecast`](Self::forecast)
    pub fn try_forecast(
        &self,
        series: &[TimeSeriesSample],
        horizon: usize,
        seasonal_period: SeasonalPeriod,
        strategy: StrategyChoice,
    ) -> Result<ForecastResult> {
        validate_series(series)?;
        if horizon < 1 {
            return Err(ForecastError::invalid("horizon", "must be at least 1"));
        }
        if horizon > MAX_HORIZON {
            return Err(ForecastError::invalid(
                "horizon",
                format!("must be at most {}, got {}", MAX_HORIZON, horizon),
            ));
        }

        let values = TimeSeriesSample::values(series);
        let period = self.resolve_period(&values, seasonal_period)?;

        let mut degradations: Vec<ForecastError> = Vec::new();
        if std_dev(&values) == 0.0 {
            degradations.push(ForecastError::DegenerateSeries(
                "series has zero variance".to_string(),
            ));
        }

        let interval = sampling_interval(series).unwrap_or_else(|| {
            degradations.push(ForecastError::DegenerateSeries(
                "timestamps do not advance, assuming hourly sampling".to_string(),
            ));
            fallback_interval()
        });
        let last = series[series.len() - 1];
        project_timestamp(last.timestamp, interval, horizon)?;

        let kind = self.resolve_strategy(&values, strategy);
        debug!(strategy = %kind, samples = values.len(), horizon, ?period, "strategy resolved");

        let model = Strategy::from_kind(kind, self.holt_winters)
            .with_seasonal_anchor(self.seasonal_anchor);
        let fit = model.fit_forecast(&values, horizon, period)?;
        let widths = half_widths(&fit, self.interval_policy, self.confidence_level);

        let mut forecasts = Vec::with_capacity(horizon);
        let mut replaced_points = 0usize;
        for (i, (&raw, &width)) in fit.point.iter().zip(widths.iter()).enumerate() {
            let step = i + 1;
            let point_estimate = if raw.is_finite() {
                raw
            } else {
                replaced_points += 1;
                last.value
            };
            forecasts.push(ForecastPoint {
                timestamp: project_timestamp(last.timestamp, interval, step)?,
                point_estimate,
                lower_bound: point_estimate - width,
                upper_bound: point_estimate + width,
                horizon_step: step,
            });
        }
        if replaced_points > 0 {
            degradations.push(ForecastError::DegenerateSeries(format!(
                "{} non-finite projections replaced by the last observation",
                replaced_points
            )));
        }

        let in_sample_metrics = fit_metrics(&fit.actual, &fit.fitted);
        let degraded = !degradations.is_empty();
        let confidence_score = confidence_score(&in_sample_metrics, values.len(), degraded);

        let mut message = format!(
            "Forecast generated with {} for {} step{}",
            kind,
            horizon,
            if horizon == 1 { "" } else { "s" }
        );
        for note in &degradations {
            message.push_str("; ");
            message.push_str(&note.to_string());
        }

        if degraded {
            warn!(strategy = %kind, samples = values.len(), %message, "forecast degraded");
        }
        debug!(
            strategy = %kind,
            samples = values.len(),
            horizon,
            rmse = in_sample_metrics.rmse,
            confidence_score,
            "forecast complete"
        );

        Ok(ForecastResult {
            strategy_used: Some(kind),
            forecasts,
            in_sample_metrics,
            status: ForecastStatus::Success,
            message,
            confidence_score,
            error_kind: None,
        })
    }

    /// Strategy that `choice` resolves to for this series
    pub fn resolve_strategy(&self, values: &[f64], choice: StrategyChoice) -> StrategyKind {
        match choice {
            StrategyChoice::Explicit(kind) => kind,
            StrategyChoice::Auto => {
                let profile = self.selector.profile(values);
                let kind = self.selector.decide(&profile);
                debug!(
                    strategy = %kind,
                    mean = profile.mean,
                    volatility = profile.volatility,
                    trend_strength = profile.trend_strength,
                    "auto selection"
                );
                kind
            }
        }
    }

    /// Concrete seasonal period for this series, validated against its length
    pub fn resolve_period(
        &self,
        values: &[f64],
        seasonal_period: SeasonalPeriod,
    ) -> Result<Option<usize>> {
        let n = values.len();
        match seasonal_period {
            SeasonalPeriod::None => Ok(None),
            SeasonalPeriod::Fixed(p) if p < 2 || p > n / 2 => Err(ForecastError::invalid(
                "seasonal_period",
                format!("must be between 2 and {} for {} samples, got {}", n / 2, n, p),
            )),
            SeasonalPeriod::Fixed(p) => Ok(Some(p)),
            SeasonalPeriod::Detect => {
                let period = self.seasonality.analyze(values, n / 2).usable_period();
                debug!(?period, samples = n, "seasonal period detected");
                Ok(period)
            }
        }
    }

    /// Trend diagnostics for a sample series
    pub fn trend_report(&self, series: &[TimeSeriesSample]) -> TrendReport {
        self.trend.analyze(&TimeSeriesSample::values(series))
    }

    /// Seasonality diagnostics for a sample series
    pub fn seasonality_report(
        &self,
        series: &[TimeSeriesSample],
        max_period: usize,
    ) -> SeasonalityReport {
        self.seasonality
            .analyze(&TimeSeriesSample::values(series), max_period)
    }
}

fn validate_series(series: &[TimeSeriesSample]) -> Result<()> {
    if series.len() < MIN_SAMPLES {
        return Err(ForecastError::InsufficientData {
            required: MIN_SAMPLES,
            actual: series.len(),
        });
    }
    if let Some(i) = series.iter().position(|s| !s.value.is_finite()) {
        return Err(ForecastError::invalid(
            "series",
            format!("value at index {} is not finite", i),
        ));
    }
    if let Some(i) = series
        .windows(2)
        .position(|w| w[1].timestamp < w[0].timestamp)
    {
        return Err(ForecastError::invalid(
            "series",
            format!("timestamps must be ascending, index {} goes backwards", i + 1),
        ));
    }
    Ok(())
}

/// Delta between the last two samples, or `None` if it is not positive
fn sampling_interval(series: &[TimeSeriesSample]) -> Option<Duration> {
    match series {
        [.., previous, last] => {
            let delta = last.timestamp - previous.timestamp;
            (delta > Duration::zero()).then_some(delta)
        }
        _ => Some(fallback_interval()),
    }
}

fn project_timestamp(
    last: DateTime<Utc>,
    interval: Duration,
    step: usize,
) -> Result<DateTime<Utc>> {
    i32::try_from(step)
        .ok()
        .and_then(|step| interval.checked_mul(step))
        .and_then(|offset| last.checked_add_signed(offset))
        .ok_or_else(|| {
            ForecastError::invalid("horizon", "projected timestamps exceed the supported range")
        })
}

/// Trust signal in `[0, 1]`: fit quality scaled by history length, halved for
/// degraded runs.
fn confidence_score(metrics: &FitMetrics, samples: usize, degraded: bool) -> f64 {
    let fit_quality = 1.0 - metrics.mape.clamp(0.0, 1.0);
    let history = (0.5 + samples as f64 * 0.01).min(0.95);
    let penalty = if degraded { DEGRADED_PENALTY } else { 1.0 };
    (fit_quality * history * penalty).clamp(0.0, 1.0)
}
