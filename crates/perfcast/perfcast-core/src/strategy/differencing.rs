//! ARIMA-style differencing with drift
//!
//! The series is made stationary by first-order differencing, or by seasonal
//! differencing when that yields the lower spread. The recent average
//! difference is then carried forward from the last observation as drift.
//! With seasonal anchoring enabled, seasonal differences instead project from
//! the same phase of the last observed cycle.

use super::check_inputs;
use crate::stats::{lagged_differences, mean, std_dev};
use perfcast_spi::{ForecastModel, ModelFit, Result, StrategyKind};

/// Number of most recent differences averaged into the drift
const DRIFT_WINDOW: usize = 5;

/// Which differencing won the stationarity comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferenceOrder {
    /// `y[t] - y[t-1]`
    First,
    /// `y[t] - y[t-P]`
    Seasonal(usize),
}

impl DifferenceOrder {
    fn lag(&self) -> usize {
        match self {
            DifferenceOrder::First => 1,
            DifferenceOrder::Seasonal(p) => *p,
        }
    }
}

/// Differencing forecasting strategy
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DifferencingStrategy {
    seasonal_anchor: bool,
}

impl DifferencingStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor seasonal-difference forecasts on the matching phase of the last
    /// cycle instead of the last value. Off by default.
    pub fn with_seasonal_anchor(mut self, enabled: bool) -> Self {
        self.seasonal_anchor = enabled;
        self
    }

    pub fn seasonal_anchor(&self) -> bool {
        self.seasonal_anchor
    }

    /// How many observations back each projection starts from
    fn base(&self, order: DifferenceOrder) -> usize {
        match order {
            DifferenceOrder::Seasonal(p) if self.seasonal_anchor => p,
            _ => 1,
        }
    }

    /// Pick the differencing with the lower standard deviation. Ties keep
    /// first-order differences.
    pub fn choose_order(values: &[f64], period: Option<usize>) -> DifferenceOrder {
        match period {
            Some(p) if p > 1 && values.len() > p => {
                let first = std_dev(&lagged_differences(values, 1));
                let seasonal = std_dev(&lagged_differences(values, p));
                if seasonal < first {
                    DifferenceOrder::Seasonal(p)
                } else {
                    DifferenceOrder::First
                }
            }
            _ => DifferenceOrder::First,
        }
    }
}

/// Mean of up to `DRIFT_WINDOW` differences ending just before `end`
fn trailing_drift(differences: &[f64], end: usize) -> f64 {
    let start = end.saturating_sub(DRIFT_WINDOW);
    mean(&differences[start..end])
}

impl ForecastModel for DifferencingStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Differencing
    }

    fn fit_forecast(
        &self,
        values: &[f64],
        horizon: usize,
        period: Option<usize>,
    ) -> Result<ModelFit> {
        check_inputs(self, values, horizon, period)?;

        let n = values.len();
        let order = Self::choose_order(values, period);
        let lag = order.lag();
        let differences = lagged_differences(values, lag);
        let drift = trailing_drift(&differences, differences.len());
        let spread = std_dev(&differences);

        let back = self.base(order);

        let mut point = vec![0.0; horizon];
        let mut native_std_errors = vec![0.0; horizon];
        for h in 1..=horizon {
            point[h - 1] = if back == 1 {
                values[n - 1] + h as f64 * drift
            } else {
                // Same phase of the last observed cycle, plus one drift per
                // elapsed cycle
                let anchor = values[n - back + (h - 1) % back];
                let cycles = (h - 1) / back + 1;
                anchor + cycles as f64 * drift
            };
            native_std_errors[h - 1] = spread * (h as f64).sqrt();
        }

        // differences[j] = values[j + lag] - values[j], so position t uses the
        // differences j < t - lag
        let mut actual = vec![0.0; n - lag];
        let mut fitted = vec![0.0; n - lag];
        for t in lag..n {
            let j = t - lag;
            actual[j] = values[t];
            fitted[j] = values[t - back] + trailing_drift(&differences, j);
        }

        Ok(ModelFit {
            point,
            native_std_errors,
            actual,
            fitted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_continuation() {
        let data: Vec<f64> = (0..15).map(|i| 10.0 + 3.0 * i as f64).collect();
        let fit = DifferencingStrategy::new().fit_forecast(&data, 3, None).unwrap();
        assert!((fit.point[0] - 55.0).abs() < 1e-9);
        assert!((fit.point[1] - 58.0).abs() < 1e-9);
        assert!((fit.point[2] - 61.0).abs() < 1e-9);
        assert!(fit.native_std_errors.iter().all(|se| se.abs() < 1e-12));
    }

    #[test]
    fn test_alternating_drift() {
        let data = vec![10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0, 14.0, 16.0];
        let fit = DifferencingStrategy::new().fit_forecast(&data, 3, None).unwrap();
        // last five differences are 2, -1, 2, -1, 2
        assert!((fit.point[0] - 16.8).abs() < 1e-9);
        assert!((fit.point[2] - 18.4).abs() < 1e-9);
    }

    #[test]
    fn test_in_sample_uses_only_past_differences() {
        let data: Vec<f64> = (0..10).map(|i| i as f64 * 2.0).collect();
        let fit = DifferencingStrategy::new().fit_forecast(&data, 1, None).unwrap();
        assert_eq!(fit.actual.len(), 9);
        // first position has no prior difference, so it predicts no change
        assert_eq!(fit.fitted[0], 0.0);
        assert!((fit.fitted[1] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_seasonal_order_selected() {
        let pattern = [10.0, 30.0, 20.0, 40.0];
        let data: Vec<f64> = (0..24).map(|i| pattern[i % 4] + i as f64 * 0.1).collect();
        assert_eq!(
            DifferencingStrategy::choose_order(&data, Some(4)),
            DifferenceOrder::Seasonal(4)
        );
        assert_eq!(
            DifferencingStrategy::choose_order(&data, None),
            DifferenceOrder::First
        );

    }

    #[test]
    fn test_seasonal_differences_drift_from_last_value() {
        let pattern = [10.0, 30.0, 20.0, 40.0];
        let data: Vec<f64> = (0..24).map(|i| pattern[i % 4] + i as f64 * 0.1).collect();
        let fit = DifferencingStrategy::new().fit_forecast(&data, 4, Some(4)).unwrap();

        let seasonal_diffs = lagged_differences(&data, 4);
        let drift = mean(&seasonal_diffs[seasonal_diffs.len() - 5..]);
        for h in 1..=4 {
            let expected = data[23] + h as f64 * drift;
            assert!((fit.point[h - 1] - expected).abs() < 1e-9);
        }
        assert!((fit.point[0] - 42.7).abs() < 1e-9);
        assert!((fit.point[1] - 43.1).abs() < 1e-9);

        // in-sample one-step fits project from the previous value
        assert_eq!(fit.actual.len(), 20);
        assert!((fit.fitted[5] - (data[8] + drift)).abs() < 1e-9);
    }

    #[test]
    fn test_seasonal_anchor_opt_in() {
        let pattern = [10.0, 30.0, 20.0, 40.0];
        let data: Vec<f64> = (0..24).map(|i| pattern[i % 4] + i as f64 * 0.1).collect();
        let strategy = DifferencingStrategy::new().with_seasonal_anchor(true);
        assert!(strategy.seasonal_anchor());
        assert!(!DifferencingStrategy::new().seasonal_anchor());

        let fit = strategy.fit_forecast(&data, 4, Some(4)).unwrap();
        // n = 24, so the next step is phase 0
        assert!((fit.point[0] - (10.0 + 2.4)).abs() < 1e-9);
        assert!((fit.point[1] - (30.0 + 2.5)).abs() < 1e-9);
        assert!(fit.point[3] > fit.point[2]);

        // in-sample fits project from one cycle back
        assert!((fit.fitted[5] - (data[5] + 0.4)).abs() < 1e-9);
    }

    #[test]
    fn test_anchor_ignored_for_first_differences() {
        let data: Vec<f64> = (0..15).map(|i| 10.0 + 3.0 * i as f64).collect();
        let plain = DifferencingStrategy::new().fit_forecast(&data, 3, None).unwrap();
        let anchored = DifferencingStrategy::new()
            .with_seasonal_anchor(true)
            .fit_forecast(&data, 3, None)
            .unwrap();
        assert_eq!(plain, anchored);
    }

    #[test]
    fn test_native_errors_grow_with_sqrt_h() {
        let data = vec![1.0, 3.0, 2.0, 5.0, 4.0, 6.0, 5.0, 9.0, 7.0, 8.0, 10.0];
        let fit = DifferencingStrategy::new().fit_forecast(&data, 4, None).unwrap();
        let base = fit.native_std_errors[0];
        assert!(base > 0.0);
        assert!((fit.native_std_errors[3] - base * 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_series() {
        let fit = DifferencingStrategy::new()
            .fit_forecast(&[50.0; 20], 5, Some(4))
            .unwrap();
        assert!(fit.point.iter().all(|v| (v - 50.0).abs() < 1e-12));
    }
}
