//! Raw strategy output

/// What a strategy produces before the engine attaches timestamps, bounds and
/// metrics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelFit {
    /// Point forecast for steps `1..=H`
    pub point: Vec<f64>,
    /// Per-step standard error under the strategy's own error model
    pub native_std_errors: Vec<f64>,
    /// Observed values the model was re-evaluated against
    pub actual: Vec<f64>,
    /// Model predictions for the same positions as `actual`
    pub fitted: Vec<f64>,
}

impl ModelFit {
    /// One-step in-sample residuals (`actual - fitted`)
    pub fn residuals(&self) -> Vec<f64> {
        self.actual
            .iter()
            .zip(self.fitted.iter())
            .map(|(a, f)| a - f)
            .collect()
    }

    /// Forecast horizon covered by this fit
    pub fn horizon(&self) -> usize {
        self.point.len()
    }
}
