//! Unit tests for perfcast crate
//!
//! Exercises the building blocks exposed through the facade.

use perfcast_facade::{
    analyze_seasonality, confidence::z_score, fit_metrics, AlgorithmSelector, ErrorKind,
    ForecastError, SelectorThresholds, SeriesProfile, StrategyChoice, StrategyKind,
    StrategySelector, TrendAnalyzer, TrendDetector, TrendDirection,
};

// ============================================================================
// Metrics Tests
// ============================================================================

#[test]
fn test_fit_metrics() {
    let metrics = fit_metrics(&[1.0, 2.0, 4.0], &[1.0, 3.0, 3.0]);
    assert!((metrics.mse - 2.0 / 3.0).abs() < 1e-12);
    assert!((metrics.mae - 2.0 / 3.0).abs() < 1e-12);
    assert!((metrics.rmse - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    assert!((metrics.mape - 0.25).abs() < 1e-12);
}

#[test]
fn test_fit_metrics_empty() {
    let metrics = fit_metrics(&[], &[]);
    assert_eq!(metrics.mse, 0.0);
    assert_eq!(metrics.mape, 0.0);
}

#[test]
fn test_z_scores() {
    assert_eq!(z_score(0.95), 1.96);
    assert_eq!(z_score(0.99), 2.576);
    assert_eq!(z_score(0.80), 1.282);
}

// ============================================================================
// Selector Tests
// ============================================================================

fn profile(trend_strength: f64, volatility: f64) -> SeriesProfile {
    SeriesProfile {
        mean: 100.0,
        std_dev: volatility * 100.0,
        volatility,
        trend_strength,
    }
}

#[test]
fn test_selector_rules() {
    let selector = AlgorithmSelector::default();
    assert_eq!(selector.decide(&profile(0.3, 0.1)), StrategyKind::Differencing);
    assert_eq!(selector.decide(&profile(0.3, 0.6)), StrategyKind::HoltWinters);
    assert_eq!(selector.decide(&profile(0.1, 0.1)), StrategyKind::HoltWinters);
}

#[test]
fn test_selector_custom_thresholds() {
    let selector = AlgorithmSelector::new(SelectorThresholds {
        trend: 0.05,
        volatility: 0.5,
    });
    assert_eq!(selector.decide(&profile(0.1, 0.1)), StrategyKind::Differencing);
}

#[test]
fn test_selector_on_drifting_series() {
    let values = [10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0, 14.0, 16.0];
    let selector = AlgorithmSelector::default();
    let profile = selector.profile(&values);
    assert!(profile.trend_strength > 0.2);
    assert!(profile.volatility < 0.5);
    assert_eq!(selector.select(&values), StrategyKind::Differencing);
}

// ============================================================================
// Diagnostics Tests
// ============================================================================

#[test]
fn test_trend_constant_series() {
    let report = TrendAnalyzer::new().analyze(&[50.0; 20]);
    assert!(!report.has_trend);
    assert_eq!(report.slope, 0.0);
    assert_eq!(report.direction(), TrendDirection::Flat);
}

#[test]
fn test_trend_rising_series() {
    let data: Vec<f64> = (0..20).map(|i| 3.0 + 2.0 * i as f64).collect();
    let report = TrendAnalyzer::new().analyze(&data);
    assert!(report.has_trend);
    assert!((report.slope - 2.0).abs() < 1e-9);
    assert!((report.intercept - 3.0).abs() < 1e-9);
    assert!((report.strength - 1.0).abs() < 1e-9);
    assert_eq!(report.direction(), TrendDirection::Up);
}

#[test]
fn test_seasonality_sinusoid() {
    let data: Vec<f64> = (0..48)
        .map(|i| 100.0 + 10.0 * (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin())
        .collect();
    let report = analyze_seasonality(&data);
    assert!(report.has_seasonality);
    assert_eq!(report.dominant_period, Some(12));
    assert!(report.dominant_strength > 0.3);
}

#[test]
fn test_seasonality_short_series() {
    let report = analyze_seasonality(&[1.0, 2.0, 3.0]);
    assert!(!report.has_seasonality);
    assert!(report.candidate_periods.is_empty());
    assert_eq!(report.dominant_period, None);
}

// ============================================================================
// Strategy Naming Tests
// ============================================================================

#[test]
fn test_strategy_choice_parsing() {
    assert_eq!("auto".parse::<StrategyChoice>().unwrap(), StrategyChoice::Auto);
    assert_eq!(
        " holtwinters ".parse::<StrategyChoice>().unwrap(),
        StrategyChoice::Explicit(StrategyKind::HoltWinters)
    );
    let err: ForecastError = "Arima".parse::<StrategyKind>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}
