//! Summary statistics used for strategy selection

use serde::{Deserialize, Serialize};

/// Statistics the selector decides on
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesProfile {
    pub mean: f64,
    pub std_dev: f64,
    /// `std_dev / |mean|`, 0 when the mean is 0
    pub volatility: f64,
    /// Relative shift between the means of the two halves, 0 when the first
    /// half averages 0
    pub trend_strength: f64,
}
