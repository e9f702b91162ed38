//! Trait for trend detection

use crate::model::TrendReport;

/// Trait for trend detection
pub trait TrendDetector: Send + Sync {
    /// Fit a trend over sample index and report its strength
    fn analyze(&self, data: &[f64]) -> TrendReport;
}
