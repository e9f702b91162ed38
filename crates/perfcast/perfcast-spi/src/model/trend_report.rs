//! Trend diagnostic report

use serde::{Deserialize, Serialize};

/// Direction of a fitted trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Least-squares trend over sample index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    /// Change per sample
    pub slope: f64,
    /// Fitted value at index 0
    pub intercept: f64,
    /// `sqrt(R²)`, within `[0, 1]`
    pub strength: f64,
    pub has_trend: bool,
}

impl TrendReport {
    /// Report for a series with no usable variation
    pub fn flat(level: f64) -> Self {
        Self {
            slope: 0.0,
            intercept: level,
            strength: 0.0,
            has_trend: false,
        }
    }

    pub fn direction(&self) -> TrendDirection {
        if !self.has_trend || self.slope == 0.0 {
            TrendDirection::Flat
        } else if self.slope > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }
}
