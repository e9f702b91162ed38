//! Strategy identifiers

use crate::error::ForecastError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The four forecasting techniques the engine can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Triple exponential smoothing
    HoltWinters,
    /// ARIMA-style differencing with drift
    Differencing,
    /// Linear trend plus per-phase seasonal effect
    TrendSeasonal,
    /// Recent-window drift extrapolation
    SlidingWindow,
}

impl StrategyKind {
    /// All strategies in a stable order
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::HoltWinters,
        StrategyKind::Differencing,
        StrategyKind::TrendSeasonal,
        StrategyKind::SlidingWindow,
    ];

    /// Canonical name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::HoltWinters => "HoltWinters",
            StrategyKind::Differencing => "Differencing",
            StrategyKind::TrendSeasonal => "TrendSeasonal",
            StrategyKind::SlidingWindow => "SlidingWindow",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ForecastError::invalid(
                    "strategy",
                    format!(
                        "unknown strategy '{}', expected one of auto, HoltWinters, Differencing, TrendSeasonal, SlidingWindow",
                        s
                    ),
                )
            })
    }
}

/// Caller's strategy request: let the selector decide or force one
///
/// Serialized as its name: `"auto"`, `"HoltWinters"`, `"Differencing"`,
/// `"TrendSeasonal"` or `"SlidingWindow"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrategyChoice {
    #[default]
    Auto,
    Explicit(StrategyKind),
}

impl std::fmt::Display for StrategyChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyChoice::Auto => write!(f, "auto"),
            StrategyChoice::Explicit(kind) => write!(f, "{}", kind),
        }
    }
}

impl From<StrategyKind> for StrategyChoice {
    fn from(kind: StrategyKind) -> Self {
        StrategyChoice::Explicit(kind)
    }
}

impl FromStr for StrategyChoice {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(StrategyChoice::Auto)
        } else {
            s.parse().map(StrategyChoice::Explicit)
        }
    }
}

impl TryFrom<String> for StrategyChoice {
    type Error = ForecastError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StrategyChoice> for String {
    fn from(choice: StrategyChoice) -> Self {
        choice.to_string()
    }
}
