//! Side-by-side comparison of two coins.

use serde::{Deserialize, Serialize};

use crate::snapshot::IndicatorSnapshot;

/// A snapshot tagged with the coin it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSnapshot {
    pub label: String,
    pub snapshot: IndicatorSnapshot,
}

impl LabeledSnapshot {
    pub fn new(label: impl Into<String>, snapshot: IndicatorSnapshot) -> Self {
        Self {
            label: label.into(),
            snapshot,
        }
    }
}

/// Two coins compared on RSI, MACD and recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinComparison {
    pub first: LabeledSnapshot,
    pub second: LabeledSnapshot,
}

impl CoinComparison {
    pub fn new(first: LabeledSnapshot, second: LabeledSnapshot) -> Self {
        Self { first, second }
    }

    /// Label of the coin with the higher RSI; `None` on a tie or if either
    /// RSI is undefined.
    pub fn higher_rsi(&self) -> Option<&str> {
        self.pick_higher(|s| s.rsi)
    }

    /// Label of the coin with the higher MACD line.
    pub fn higher_macd(&self) -> Option<&str> {
        self.pick_higher(|s| s.macd)
    }

    /// Whether both technical recommendations name the same action.
    pub fn recommendations_agree(&self) -> bool {
        self.first.snapshot.recommendation.action == self.second.snapshot.recommendation.action
    }

    fn pick_higher<F>(&self, value: F) -> Option<&str>
    where
        F: Fn(&IndicatorSnapshot) -> Option<f64>,
    {
        let a = value(&self.first.snapshot)?;
        let b = value(&self.second.snapshot)?;
        if a > b {
            Some(self.first.label.as_str())
        } else if b > a {
            Some(self.second.label.as_str())
        } else {
            None
        }
    }
}
