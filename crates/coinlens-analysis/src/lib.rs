//! Signal interpretation on top of technical indicators.
//!
//! This crate turns raw indicator values into readable signals:
//! - RSI, MACD and Stochastic zones
//! - Technical buy/hold/sell recommendation
//! - 24h trend labels and percentage price changes
//! - Keyword-based headline sentiment
//! - Indicator snapshots and two-coin comparisons

mod comparison;
mod recommendation;
mod sentiment;
mod signals;
mod snapshot;

pub use comparison::{CoinComparison, LabeledSnapshot};
pub use recommendation::{Action, FinalRecommendation, TechnicalRecommendation};
pub use sentiment::{summary_action, Sentiment};
pub use signals::{
    percent_change, MacdBias, RsiThresholds, RsiZone, StochasticZone, TrendLabel,
    MACD_NEUTRAL_TOLERANCE,
};
pub use snapshot::{IndicatorReport, IndicatorSettings, IndicatorSnapshot};
