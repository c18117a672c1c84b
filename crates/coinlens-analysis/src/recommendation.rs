//! Buy/hold/sell recommendations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::signals::{RsiThresholds, MACD_NEUTRAL_TOLERANCE};

/// Suggested action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Buy,
    Hold,
    Sell,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Buy => write!(f, "Buy"),
            Action::Hold => write!(f, "Hold"),
            Action::Sell => write!(f, "Sell"),
        }
    }
}

/// Recommendation derived from RSI and MACD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalRecommendation {
    pub action: Action,
    pub reason: String,
}

impl TechnicalRecommendation {
    /// Derive a recommendation from the latest RSI and MACD - signal gap.
    ///
    /// Rules are checked in order and the first match wins: overbought RSI
    /// sells, oversold RSI buys, then MACD above/below its signal line by
    /// more than the neutral tolerance buys/sells. Anything else holds.
    /// Undefined inputs skip their rules.
    pub fn from_signals(rsi: Option<f64>, macd_diff: Option<f64>) -> Self {
        Self::from_signals_with(rsi, macd_diff, RsiThresholds::default())
    }

    /// Same as [`from_signals`](Self::from_signals) with custom RSI levels.
    pub fn from_signals_with(
        rsi: Option<f64>,
        macd_diff: Option<f64>,
        thresholds: RsiThresholds,
    ) -> Self {
        if let Some(rsi) = rsi {
            if rsi > thresholds.overbought {
                return Self::new(
                    Action::Sell,
                    format!("RSI is {:.2} (overbought), a pullback is likely.", rsi),
                );
            }
            if rsi < thresholds.oversold {
                return Self::new(
                    Action::Buy,
                    format!("RSI is {:.2} (oversold), may rebound soon.", rsi),
                );
            }
        }

        match macd_diff {
            Some(diff) if diff > MACD_NEUTRAL_TOLERANCE => {
                Self::new(Action::Buy, "MACD is above the signal line: bullish trend.")
            }
            Some(diff) if diff < -MACD_NEUTRAL_TOLERANCE => {
                Self::new(Action::Sell, "MACD is below the signal line: bearish trend.")
            }
            _ => Self::new(Action::Hold, "RSI and MACD suggest a neutral state."),
        }
    }

    fn new(action: Action, reason: impl Into<String>) -> Self {
        Self {
            action,
            reason: reason.into(),
        }
    }
}

/// Outcome of combining two independent recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalRecommendation {
    /// Both sources suggest the same action
    Agree(Action),
    /// The sources disagree
    Mixed,
}

impl FinalRecommendation {
    pub fn combine(technical: Action, other: Action) -> Self {
        if technical == other {
            FinalRecommendation::Agree(technical)
        } else {
            FinalRecommendation::Mixed
        }
    }
}

impl fmt::Display for FinalRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinalRecommendation::Agree(action) => write!(f, "Both sources agree: {}", action),
            FinalRecommendation::Mixed => {
                write!(f, "Mixed signals. Consider waiting or using additional indicators.")
            }
        }
    }
}
