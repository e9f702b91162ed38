//! In-sample accuracy metrics

use crate::stats::{finite_or_zero, safe_ratio};
use perfcast_spi::FitMetrics;

/// Actual values closer to zero than this are skipped by MAPE
const MAPE_EPSILON: f64 = 1e-10;

/// Compute MSE, MAE, RMSE and MAPE between observed and fitted values.
///
/// Empty or mismatched input yields zeroed metrics. MAPE is a fraction and
/// averages only over non-zero actuals.
pub fn fit_metrics(actual: &[f64], fitted: &[f64]) -> FitMetrics {
    if actual.len() != fitted.len() || actual.is_empty() {
        return FitMetrics::default();
    }

    let n = actual.len() as f64;
    let mut sse = 0.0;
    let mut sae = 0.0;
    let mut sape = 0.0;
    let mut mape_count = 0usize;

    for (a, f) in actual.iter().zip(fitted.iter()) {
        let error = a - f;
        sse += error * error;
        sae += error.abs();
        if a.abs() > MAPE_EPSILON {
            sape += (error / a).abs();
            mape_count += 1;
        }
    }

    let mse = finite_or_zero(sse / n);
    FitMetrics {
        mse,
        mae: finite_or_zero(sae / n),
        rmse: mse.sqrt(),
        mape: safe_ratio(sape, mape_count as f64),
    }
}
