//! Numeric helpers shared by strategies and diagnostics
//!
//! Every helper returns a neutral value (0) instead of NaN/Inf when its input
//! is empty or has no variation.

/// Arithmetic mean, 0 for an empty slice
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation, 0 for fewer than two values
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let variance = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64;
    finite_or_zero(variance.sqrt())
}

/// `numerator / denominator`, 0 when the denominator is 0 or the quotient is
/// not finite
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    finite_or_zero(numerator / denominator)
}

/// `value` itself when finite, otherwise 0
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// First-order differences `data[i] - data[i - lag]`
pub fn lagged_differences(data: &[f64], lag: usize) -> Vec<f64> {
    if lag == 0 || data.len() <= lag {
        return Vec::new();
    }
    data.iter()
        .skip(lag)
        .zip(data.iter())
        .map(|(current, previous)| current - previous)
        .collect()
}

/// Ordinary least squares line over index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, clamped to `[0, 1]`; 0 for a flat series
    pub r_squared: f64,
}

impl LinearFit {
    pub fn value_at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }
}

/// Fit `value ≈ intercept + slope·t` over `t = 0..n-1`
pub fn linear_fit(data: &[f64]) -> LinearFit {
    let n = data.len();
    if n == 0 {
        return LinearFit {
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
        };
    }

    let t_mean = (n - 1) as f64 / 2.0;
    let y_mean = mean(data);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (t, &y) in data.iter().enumerate() {
        let dt = t as f64 - t_mean;
        sxy += dt * (y - y_mean);
        sxx += dt * dt;
    }

    let slope = safe_ratio(sxy, sxx);
    let intercept = y_mean - slope * t_mean;

    let ss_total: f64 = data.iter().map(|y| (y - y_mean).powi(2)).sum();
    let ss_residual: f64 = data
        .iter()
        .enumerate()
        .map(|(t, y)| (y - (intercept + slope * t as f64)).powi(2))
        .sum();
    let r_squared = if ss_total > 0.0 {
        (1.0 - ss_residual / ss_total).clamp(0.0, 1.0)
    } else {
        0.0
    };

    LinearFit {
        slope,
        intercept,
        r_squared: finite_or_zero(r_squared),
    }
}

/// Pearson correlation of two equal-length slices, 0 when either side is
/// constant
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n < 2 {
        return 0.0;
    }
    let (a, b) = (&a[..n], &b[..n]);
    let mean_a = mean(a);
    let mean_b = mean(b);

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    safe_ratio(cov, (var_a * var_b).sqrt()).clamp(-1.0, 1.0)
}
