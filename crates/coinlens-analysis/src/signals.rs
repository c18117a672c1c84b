//! Indicator zones and trend labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// MACD and signal lines closer than this are treated as equal.
pub const MACD_NEUTRAL_TOLERANCE: f64 = 0.001;

/// Overbought/oversold levels for RSI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiThresholds {
    /// Overbought above this level
    pub overbought: f64,
    /// Oversold below this level
    pub oversold: f64,
}

impl Default for RsiThresholds {
    fn default() -> Self {
        Self {
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

/// Where an RSI reading sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    /// Classify with the default 70/30 levels.
    pub fn classify(rsi: f64) -> Self {
        Self::classify_with(rsi, RsiThresholds::default())
    }

    /// Classify with custom levels. Both bounds are exclusive.
    pub fn classify_with(rsi: f64, thresholds: RsiThresholds) -> Self {
        if rsi > thresholds.overbought {
            RsiZone::Overbought
        } else if rsi < thresholds.oversold {
            RsiZone::Oversold
        } else {
            RsiZone::Neutral
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            RsiZone::Overbought => "Overbought. Consider caution.",
            RsiZone::Oversold => "Oversold. Might be a buying opportunity.",
            RsiZone::Neutral => "Neutral. Hold position.",
        }
    }
}

impl fmt::Display for RsiZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RsiZone::Overbought => write!(f, "Overbought"),
            RsiZone::Oversold => write!(f, "Oversold"),
            RsiZone::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Direction of MACD relative to its signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacdBias {
    Bullish,
    Bearish,
    Neutral,
}

impl MacdBias {
    /// Classify with the default tolerance.
    pub fn classify(macd: f64, signal: f64) -> Self {
        Self::classify_with(macd, signal, MACD_NEUTRAL_TOLERANCE)
    }

    /// Classify: lines within `tolerance` of each other are neutral.
    pub fn classify_with(macd: f64, signal: f64, tolerance: f64) -> Self {
        let diff = macd - signal;
        if diff.abs() < tolerance {
            MacdBias::Neutral
        } else if diff > 0.0 {
            MacdBias::Bullish
        } else {
            MacdBias::Bearish
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            MacdBias::Bullish => "MACD is above the signal line: bullish momentum.",
            MacdBias::Bearish => "MACD is below the signal line: bearish momentum.",
            MacdBias::Neutral => "MACD and signal are almost equal.",
        }
    }
}

impl fmt::Display for MacdBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacdBias::Bullish => write!(f, "Bullish"),
            MacdBias::Bearish => write!(f, "Bearish"),
            MacdBias::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Where a stochastic %K reading sits (80/20 levels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StochasticZone {
    Overbought,
    Oversold,
    Neutral,
}

impl StochasticZone {
    pub fn classify(k: f64) -> Self {
        if k > 80.0 {
            StochasticZone::Overbought
        } else if k < 20.0 {
            StochasticZone::Oversold
        } else {
            StochasticZone::Neutral
        }
    }
}

impl fmt::Display for StochasticZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StochasticZone::Overbought => write!(f, "Overbought"),
            StochasticZone::Oversold => write!(f, "Oversold"),
            StochasticZone::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Short label for a 24h percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendLabel {
    Increase,
    Decrease,
    Stable,
}

impl TrendLabel {
    /// Moves beyond ±1.5% count as a trend.
    pub fn from_change(change_pct: f64) -> Self {
        if change_pct > 1.5 {
            TrendLabel::Increase
        } else if change_pct < -1.5 {
            TrendLabel::Decrease
        } else {
            TrendLabel::Stable
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendLabel::Increase => write!(f, "Increase"),
            TrendLabel::Decrease => write!(f, "Decrease"),
            TrendLabel::Stable => write!(f, "Stable"),
        }
    }
}

/// Percentage change over the last `samples` prices.
///
/// Compares the final price against `prices[len - samples]`, so
/// `samples = 10` spans the last ten observations. Returns `None` when the
/// series is shorter than `samples`, `samples` is zero, or the base price
/// is zero.
pub fn percent_change(prices: &[f64], samples: usize) -> Option<f64> {
    if samples == 0 || prices.len() < samples {
        return None;
    }
    let base = prices[prices.len() - samples];
    let last = *prices.last()?;
    if base == 0.0 {
        return None;
    }
    Some((last - base) / base * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rsi_zone() {
        assert_eq!(RsiZone::classify(75.0), RsiZone::Overbought);
        assert_eq!(RsiZone::classify(70.0), RsiZone::Neutral);
        assert_eq!(RsiZone::classify(29.9), RsiZone::Oversold);
        assert_eq!(RsiZone::classify(50.0), RsiZone::Neutral);

        let strict = RsiThresholds {
            overbought: 80.0,
            oversold: 20.0,
        };
        assert_eq!(RsiZone::classify_with(75.0, strict), RsiZone::Neutral);
    }

    #[test]
    fn test_macd_bias() {
        assert_eq!(MacdBias::classify(1.0, 0.5), MacdBias::Bullish);
        assert_eq!(MacdBias::classify(0.5, 1.0), MacdBias::Bearish);
        assert_eq!(MacdBias::classify(1.0, 1.0005), MacdBias::Neutral);
    }

    #[test]
    fn test_stochastic_zone() {
        assert_eq!(StochasticZone::classify(85.0), StochasticZone::Overbought);
        assert_eq!(StochasticZone::classify(15.0), StochasticZone::Oversold);
        assert_eq!(StochasticZone::classify(80.0), StochasticZone::Neutral);
    }

    #[test]
    fn test_trend_label() {
        assert_eq!(TrendLabel::from_change(2.0), TrendLabel::Increase);
        assert_eq!(TrendLabel::from_change(-3.1), TrendLabel::Decrease);
        assert_eq!(TrendLabel::from_change(1.5), TrendLabel::Stable);
        assert_eq!(TrendLabel::from_change(0.0), TrendLabel::Stable);
    }

    #[test]
    fn test_percent_change() {
        let prices: Vec<f64> = (1..=10).map(|i| i as f64 * 10.0).collect();
        // 10 -> 100 over the full ten samples
        assert_relative_eq!(percent_change(&prices, 10).unwrap(), 900.0);
        // 90 -> 100
        assert_relative_eq!(percent_change(&prices, 2).unwrap(), 100.0 / 9.0, epsilon = 1e-12);
        assert_eq!(percent_change(&prices, 1), Some(0.0));
        assert_eq!(percent_change(&prices, 11), None);
        assert_eq!(percent_change(&prices, 0), None);
        assert_eq!(percent_change(&[0.0, 1.0], 2), None);
    }
}
