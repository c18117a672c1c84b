//! Moving average indicators.

use coinlens_core::error::IndicatorError;
use coinlens_core::traits::Indicator;
use coinlens_core::types::IndicatorSeries;

use crate::window::RollingSum;

/// Default SMA window.
pub const DEFAULT_SMA_WINDOW: usize = 20;
/// Default EMA span.
pub const DEFAULT_EMA_SPAN: usize = 20;

/// Simple Moving Average (SMA).
///
/// Arithmetic mean of the trailing `window` prices. The first `window - 1`
/// entries are undefined.
#[derive(Debug, Clone)]
pub struct Sma {
    window: usize,
}

impl Sma {
    /// Create a new SMA with the specified window.
    pub fn new(window: usize) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::zero_window("SMA window"));
        }
        Ok(Self { window })
    }

    /// Window size.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for Sma {
    fn default() -> Self {
        Self {
            window: DEFAULT_SMA_WINDOW,
        }
    }
}

impl Indicator for Sma {
    fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, IndicatorError> {
        self.validate_data(data)?;
        Ok(rolling_mean(data, self.window))
    }

    fn period(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Recursive form seeded with the first price: `ema[0] = prices[0]` and
/// `ema[i] = α·prices[i] + (1 - α)·ema[i - 1]` with `α = 2 / (span + 1)`.
/// Defined from index 0.
#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
}

impl Ema {
    /// Create a new EMA with the specified span.
    pub fn new(span: usize) -> Result<Self, IndicatorError> {
        if span == 0 {
            return Err(IndicatorError::zero_window("EMA span"));
        }
        Ok(Self { span })
    }

    /// Smoothing factor.
    pub fn alpha(&self) -> f64 {
        smoothing_factor(self.span)
    }
}

impl Default for Ema {
    fn default() -> Self {
        Self {
            span: DEFAULT_EMA_SPAN,
        }
    }
}

impl Indicator for Ema {
    fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, IndicatorError> {
        self.validate_data(data)?;
        Ok(IndicatorSeries::from_defined(ema_values(data, self.span)))
    }

    fn period(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

/// Compute the SMA of `data`.
pub fn sma(data: &[f64], window: usize) -> Result<IndicatorSeries, IndicatorError> {
    Sma::new(window)?.calculate(data)
}

/// Compute the EMA of `data`.
pub fn ema(data: &[f64], span: usize) -> Result<IndicatorSeries, IndicatorError> {
    Ema::new(span)?.calculate(data)
}

#[inline]
pub(crate) fn smoothing_factor(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Recursive EMA without validation. Empty input yields an empty vector.
pub(crate) fn ema_values(data: &[f64], span: usize) -> Vec<f64> {
    let Some(&first) = data.first() else {
        return vec![];
    };

    let alpha = smoothing_factor(span);
    let one_minus_alpha = 1.0 - alpha;

    let mut result = Vec::with_capacity(data.len());
    let mut ema = first;
    result.push(ema);

    for &price in &data[1..] {
        ema = alpha * price + one_minus_alpha * ema;
        result.push(ema);
    }

    result
}

/// Trailing rolling mean without validation.
pub(crate) fn rolling_mean(data: &[f64], window: usize) -> IndicatorSeries {
    let mut sum = RollingSum::new(window);
    data.iter()
        .map(|&price| {
            sum.push(price);
            if sum.is_full() {
                sum.mean()
            } else {
                None
            }
        })
        .collect()
}
