//! Basic example forecasting a request-latency series
//!
//! Run with: RUST_LOG=perfcast_core=debug cargo run --example basic -p perfcast-facade

use chrono::{Duration, TimeZone, Utc};
use perfcast_facade::prelude::*;
use perfcast_facade::{SeasonalityDetector, SeasonalityAnalyzer, TrendDetector, TrendAnalyzer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "perfcast_core=info".into()),
        )
        .init();

    // Three days of hourly p95 latency with a daily cycle and slow growth
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let series: Vec<TimeSeriesSample> = (0..72)
        .map(|i| {
            let t = i as f64;
            let daily = 15.0 * (2.0 * std::f64::consts::PI * t / 24.0).sin();
            TimeSeriesSample::new(start + Duration::hours(i), 120.0 + 0.2 * t + daily)
        })
        .collect();
    let values = TimeSeriesSample::values(&series);

    println!("=== perfcast Examples ===\n");

    let trend = TrendAnalyzer::new().analyze(&values);
    println!(
        "Trend: slope={:.3} strength={:.3} direction={:?}",
        trend.slope,
        trend.strength,
        trend.direction()
    );
    let seasonality = SeasonalityAnalyzer::new().analyze(&values, values.len() / 2);
    println!(
        "Seasonality: dominant={:?} strength={:.3}\n",
        seasonality.dominant_period, seasonality.dominant_strength
    );

    let config: ForecastConfig =
        serde_json::from_str(r#"{"confidence": {"level": 0.9}}"#)?;
    let engine = config.build_engine()?;

    for kind in StrategyKind::ALL {
        let request = ForecastRequest::new(6).detect_seasonality().strategy(kind);
        let result = engine.run(&series, &request);
        println!(
            "{:<14} rmse={:>7.3} score={:.2} next={:?}",
            kind.name(),
            result.in_sample_metrics.rmse,
            result.confidence_score,
            result
                .point_estimates()
                .iter()
                .map(|v| (v * 10.0).round() / 10.0)
                .collect::<Vec<_>>()
        );
    }

    println!("\nAuto-selected forecast as JSON:");
    let result = engine.run(&series, &ForecastRequest::new(3).seasonal_period(24));
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
