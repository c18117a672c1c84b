//! Full indicator runs and their latest readings.

use coinlens_core::error::IndicatorError;
use coinlens_core::traits::{validate_prices, Indicator, MultiOutputIndicator};
use coinlens_core::types::IndicatorSeries;
use coinlens_indicators::{
    BollingerBands, BollingerOutput, Ema, Macd, MacdOutput, Rsi, Sma, Stochastic,
    DEFAULT_BOLLINGER_K, DEFAULT_BOLLINGER_WINDOW, DEFAULT_EMA_SPAN, DEFAULT_MACD_SPANS,
    DEFAULT_RSI_PERIOD, DEFAULT_SMA_WINDOW, DEFAULT_STOCHASTIC_WINDOW,
};
use serde::{Deserialize, Serialize};

use crate::recommendation::TechnicalRecommendation;
use crate::signals::{percent_change, MacdBias, RsiThresholds, RsiZone, StochasticZone};

/// Number of trailing samples the snapshot's price change spans.
const CHANGE_SAMPLES: usize = 10;

/// Parameters for every indicator in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    pub rsi_period: usize,
    pub macd_short: usize,
    pub macd_long: usize,
    pub macd_signal: usize,
    pub sma_window: usize,
    pub ema_span: usize,
    pub bollinger_window: usize,
    pub bollinger_k: f64,
    pub stochastic_window: usize,
    pub rsi_thresholds: RsiThresholds,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        let (macd_short, macd_long, macd_signal) = DEFAULT_MACD_SPANS;
        Self {
            rsi_period: DEFAULT_RSI_PERIOD,
            macd_short,
            macd_long,
            macd_signal,
            sma_window: DEFAULT_SMA_WINDOW,
            ema_span: DEFAULT_EMA_SPAN,
            bollinger_window: DEFAULT_BOLLINGER_WINDOW,
            bollinger_k: DEFAULT_BOLLINGER_K,
            stochastic_window: DEFAULT_STOCHASTIC_WINDOW,
            rsi_thresholds: RsiThresholds::default(),
        }
    }
}

impl IndicatorSettings {
    /// Check every parameter without computing anything.
    pub fn validate(&self) -> Result<(), IndicatorError> {
        self.build().map(|_| ())
    }

    fn build(&self) -> Result<IndicatorSet, IndicatorError> {
        let thresholds = self.rsi_thresholds;
        if !(0.0..=100.0).contains(&thresholds.oversold)
            || !(0.0..=100.0).contains(&thresholds.overbought)
            || thresholds.oversold >= thresholds.overbought
        {
            return Err(IndicatorError::InvalidParameter(format!(
                "RSI thresholds must satisfy 0 <= oversold < overbought <= 100, got {}/{}",
                thresholds.oversold, thresholds.overbought
            )));
        }

        Ok(IndicatorSet {
            rsi: Rsi::new(self.rsi_period)?,
            macd: Macd::new(self.macd_short, self.macd_long, self.macd_signal)?,
            sma: Sma::new(self.sma_window)?,
            ema: Ema::new(self.ema_span)?,
            bollinger: BollingerBands::new(self.bollinger_window, self.bollinger_k)?,
            stochastic: Stochastic::new(self.stochastic_window)?,
        })
    }
}

struct IndicatorSet {
    rsi: Rsi,
    macd: Macd,
    sma: Sma,
    ema: Ema,
    bollinger: BollingerBands,
    stochastic: Stochastic,
}

/// Every indicator series for one price series, aligned with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    pub prices: Vec<f64>,
    pub rsi: IndicatorSeries,
    pub macd: MacdOutput,
    pub sma: IndicatorSeries,
    pub ema: IndicatorSeries,
    pub bollinger: BollingerOutput,
    pub stochastic: IndicatorSeries,
}

impl IndicatorReport {
    /// Run every indicator over `prices`.
    ///
    /// Parameters are validated before the input, so a bad setting is
    /// reported even for an empty series.
    pub fn compute(prices: &[f64], settings: &IndicatorSettings) -> Result<Self, IndicatorError> {
        let set = settings.build()?;
        validate_prices(prices)?;

        Ok(Self {
            prices: prices.to_vec(),
            rsi: set.rsi.calculate(prices)?,
            macd: set.macd.calculate(prices)?,
            sma: set.sma.calculate(prices)?,
            ema: set.ema.calculate(prices)?,
            bollinger: set.bollinger.calculate(prices)?,
            stochastic: set.stochastic.calculate(prices)?,
        })
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Latest reading of every indicator plus its interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub last_price: f64,
    /// Percentage change over the last ten samples
    pub change_pct: Option<f64>,
    pub rsi: Option<f64>,
    pub rsi_zone: Option<RsiZone>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_bias: Option<MacdBias>,
    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub bollinger_upper: Option<f64>,
    pub bollinger_middle: Option<f64>,
    pub bollinger_lower: Option<f64>,
    pub stochastic_k: Option<f64>,
    pub stochastic_zone: Option<StochasticZone>,
    pub recommendation: TechnicalRecommendation,
}

impl IndicatorSnapshot {
    /// Compute a report and summarize it.
    pub fn compute(prices: &[f64], settings: &IndicatorSettings) -> Result<Self, IndicatorError> {
        let report = IndicatorReport::compute(prices, settings)?;
        Ok(Self::from_report(&report, settings.rsi_thresholds))
    }

    /// Summarize an existing report.
    ///
    /// Each value is the most recent defined entry of its series, so a
    /// trailing undefined RSI (flat window) falls back to the last defined
    /// reading.
    pub fn from_report(report: &IndicatorReport, thresholds: RsiThresholds) -> Self {
        let rsi = report.rsi.last_defined();
        let macd = report.macd.macd.last_defined();
        let macd_signal = report.macd.signal.last_defined();
        let macd_diff = match (macd, macd_signal) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        };
        let stochastic_k = report.stochastic.last_defined();

        Self {
            last_price: report.prices.last().copied().unwrap_or_default(),
            change_pct: percent_change(&report.prices, CHANGE_SAMPLES),
            rsi,
            rsi_zone: rsi.map(|v| RsiZone::classify_with(v, thresholds)),
            macd,
            macd_signal,
            macd_bias: macd.zip(macd_signal).map(|(m, s)| MacdBias::classify(m, s)),
            sma: report.sma.last_defined(),
            ema: report.ema.last_defined(),
            bollinger_upper: report.bollinger.upper.last_defined(),
            bollinger_middle: report.bollinger.middle.last_defined(),
            bollinger_lower: report.bollinger.lower.last_defined(),
            stochastic_k,
            stochastic_zone: stochastic_k.map(StochasticZone::classify),
            recommendation: TechnicalRecommendation::from_signals_with(rsi, macd_diff, thresholds),
        }
    }
}
