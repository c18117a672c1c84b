//! Momentum indicators.

use coinlens_core::error::IndicatorError;
use coinlens_core::traits::{Indicator, MultiOutputIndicator};
use coinlens_core::types::IndicatorSeries;
use serde::{Deserialize, Serialize};

use crate::moving_average::ema_values;
use crate::simd;
use crate::window::{RollingExtrema, RollingSum};

/// Default RSI period.
pub const DEFAULT_RSI_PERIOD: usize = 14;
/// Default MACD spans (short, long, signal).
pub const DEFAULT_MACD_SPANS: (usize, usize, usize) = (12, 26, 9);
/// Default stochastic lookback window.
pub const DEFAULT_STOCHASTIC_WINDOW: usize = 14;

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes
/// to evaluate overbought or oversold conditions.
///
/// Average gain and loss are simple rolling means over the trailing
/// `period` price changes, so the first `period` entries are undefined.
/// When the average loss is zero the ratio is degenerate: a window with
/// gains reads 100, a completely flat window is undefined.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::zero_window("RSI period"));
        }
        Ok(Self { period })
    }

    fn value(avg_gain: f64, avg_loss: f64) -> Option<f64> {
        // Running sums of non-negative samples can drift just below zero
        let (avg_gain, avg_loss) = (avg_gain.max(0.0), avg_loss.max(0.0));
        if avg_loss == 0.0 {
            if avg_gain == 0.0 {
                None
            } else {
                Some(100.0)
            }
        } else {
            Some((100.0 - 100.0 / (1.0 + avg_gain / avg_loss)).clamp(0.0, 100.0))
        }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self {
            period: DEFAULT_RSI_PERIOD,
        }
    }
}

impl Indicator for Rsi {
    fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, IndicatorError> {
        self.validate_data(data)?;

        let mut result = vec![None; data.len()];
        let (gains, losses) = simd::gains_losses(data);

        let mut gain_window = RollingSum::new(self.period);
        let mut loss_window = RollingSum::new(self.period);

        // Change k moves the price from index k to k + 1
        for (k, (&gain, &loss)) in gains.iter().zip(losses.iter()).enumerate() {
            gain_window.push(gain);
            loss_window.push(loss);

            if gain_window.is_full() {
                let avg_gain = gain_window.sum() / self.period as f64;
                let avg_loss = loss_window.sum() / self.period as f64;
                result[k + 1] = Self::value(avg_gain, avg_loss);
            }
        }

        Ok(IndicatorSeries::from_values(result))
    }

    fn period(&self) -> usize {
        self.period + 1 // Need period+1 data points
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// MACD (Moving Average Convergence Divergence) output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// MACD line (short EMA - long EMA)
    pub macd: IndicatorSeries,
    /// Signal line (EMA of MACD)
    pub signal: IndicatorSeries,
    /// Histogram (MACD - Signal)
    pub histogram: IndicatorSeries,
}

/// MACD indicator.
///
/// Uses two recursive EMAs to identify trend direction and momentum.
/// Every line is defined from index 0.
#[derive(Debug, Clone)]
pub struct Macd {
    short_span: usize,
    long_span: usize,
    signal_span: usize,
}

impl Macd {
    /// Create a MACD with custom spans.
    pub fn new(short: usize, long: usize, signal: usize) -> Result<Self, IndicatorError> {
        if short == 0 {
            return Err(IndicatorError::zero_window("MACD short span"));
        }
        if long == 0 {
            return Err(IndicatorError::zero_window("MACD long span"));
        }
        if signal == 0 {
            return Err(IndicatorError::zero_window("MACD signal span"));
        }
        Ok(Self {
            short_span: short,
            long_span: long,
            signal_span: signal,
        })
    }
}

impl Default for Macd {
    fn default() -> Self {
        let (short_span, long_span, signal_span) = DEFAULT_MACD_SPANS;
        Self {
            short_span,
            long_span,
            signal_span,
        }
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdOutput;

    fn calculate(&self, data: &[f64]) -> Result<MacdOutput, IndicatorError> {
        self.validate_data(data)?;

        let short_ema = ema_values(data, self.short_span);
        let long_ema = ema_values(data, self.long_span);

        let macd_line: Vec<f64> = short_ema
            .iter()
            .zip(long_ema.iter())
            .map(|(s, l)| s - l)
            .collect();

        let signal_line = ema_values(&macd_line, self.signal_span);

        let histogram = macd_line
            .iter()
            .zip(signal_line.iter())
            .map(|(m, s)| m - s)
            .collect();

        Ok(MacdOutput {
            macd: IndicatorSeries::from_defined(macd_line),
            signal: IndicatorSeries::from_defined(signal_line),
            histogram: IndicatorSeries::from_defined(histogram),
        })
    }

    fn period(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

/// Stochastic oscillator (%K).
///
/// Position of the latest price within its trailing high-low range,
/// scaled to 0-100. The first `window - 1` entries are undefined, as is
/// any entry whose window is flat (zero range).
#[derive(Debug, Clone)]
pub struct Stochastic {
    window: usize,
}

impl Stochastic {
    /// Create a stochastic oscillator with a custom window.
    pub fn new(window: usize) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::zero_window("Stochastic window"));
        }
        Ok(Self { window })
    }
}

impl Default for Stochastic {
    fn default() -> Self {
        Self {
            window: DEFAULT_STOCHASTIC_WINDOW,
        }
    }
}

impl Indicator for Stochastic {
    fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, IndicatorError> {
        self.validate_data(data)?;

        let mut extrema = RollingExtrema::new(self.window);
        Ok(data
            .iter()
            .map(|&price| {
                extrema.push(price);
                if !extrema.is_full() {
                    return None;
                }
                let (lowest, highest) = (extrema.min()?, extrema.max()?);
                let range = highest - lowest;
                if range == 0.0 {
                    None
                } else {
                    Some(((price - lowest) / range * 100.0).clamp(0.0, 100.0))
                }
            })
            .collect())
    }

    fn period(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "Stochastic"
    }
}

/// Compute the RSI of `data`.
pub fn rsi(data: &[f64], period: usize) -> Result<IndicatorSeries, IndicatorError> {
    Rsi::new(period)?.calculate(data)
}

/// Compute the MACD line, signal line and histogram of `data`.
pub fn macd(
    data: &[f64],
    short: usize,
    long: usize,
    signal: usize,
) -> Result<MacdOutput, IndicatorError> {
    Macd::new(short, long, signal)?.calculate(data)
}

/// Compute the stochastic %K of `data`.
pub fn stochastic(data: &[f64], window: usize) -> Result<IndicatorSeries, IndicatorError> {
    Stochastic::new(window)?.calculate(data)
}
