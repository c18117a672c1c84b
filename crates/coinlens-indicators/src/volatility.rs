//! Volatility indicators.

use coinlens_core::error::IndicatorError;
use coinlens_core::traits::{Indicator, MultiOutputIndicator};
use coinlens_core::types::IndicatorSeries;
use serde::{Deserialize, Serialize};

use crate::moving_average::rolling_mean;
use crate::window::RollingMoments;

/// Default Bollinger window.
pub const DEFAULT_BOLLINGER_WINDOW: usize = 20;
/// Default Bollinger band width in standard deviations.
pub const DEFAULT_BOLLINGER_K: f64 = 2.0;

/// Rolling sample standard deviation (n - 1 divisor).
///
/// Undefined for the first `window - 1` entries, and everywhere when
/// `window == 1` since a single sample has no sample deviation.
#[derive(Debug, Clone)]
pub struct StdDev {
    window: usize,
}

impl StdDev {
    /// Create a new standard deviation indicator.
    pub fn new(window: usize) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::zero_window("StdDev window"));
        }
        Ok(Self { window })
    }
}

impl Indicator for StdDev {
    fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, IndicatorError> {
        self.validate_data(data)?;
        Ok(rolling_std_dev(data, self.window))
    }

    fn period(&self) -> usize {
        self.window.max(2)
    }

    fn name(&self) -> &str {
        "StdDev"
    }
}

/// Bollinger Bands output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerOutput {
    /// Middle band (SMA)
    pub middle: IndicatorSeries,
    /// Upper band
    pub upper: IndicatorSeries,
    /// Lower band
    pub lower: IndicatorSeries,
    /// Rolling sample standard deviation the bands are built from
    pub std_dev: IndicatorSeries,
}

/// Bollinger Bands.
///
/// Consists of a middle band (SMA) with upper and lower bands
/// at `k` rolling sample standard deviations.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    window: usize,
    k: f64,
}

impl BollingerBands {
    /// Create Bollinger Bands with custom parameters.
    pub fn new(window: usize, k: f64) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::zero_window("Bollinger window"));
        }
        if !k.is_finite() || k < 0.0 {
            return Err(IndicatorError::InvalidParameter(format!(
                "Bollinger multiplier must be a non-negative number, got {}",
                k
            )));
        }
        Ok(Self { window, k })
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            window: DEFAULT_BOLLINGER_WINDOW,
            k: DEFAULT_BOLLINGER_K,
        }
    }
}

impl MultiOutputIndicator for BollingerBands {
    type Outputs = BollingerOutput;

    fn calculate(&self, data: &[f64]) -> Result<BollingerOutput, IndicatorError> {
        self.validate_data(data)?;

        let middle = rolling_mean(data, self.window);
        let std_dev = rolling_std_dev(data, self.window);

        let k = self.k;
        let upper = middle.zip_with(&std_dev, |m, s| m + k * s);
        let lower = middle.zip_with(&std_dev, |m, s| m - k * s);

        Ok(BollingerOutput {
            middle,
            upper,
            lower,
            std_dev,
        })
    }

    fn period(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }
}

/// Compute Bollinger Bands of `data`.
pub fn bollinger_bands(
    data: &[f64],
    window: usize,
    k: f64,
) -> Result<BollingerOutput, IndicatorError> {
    BollingerBands::new(window, k)?.calculate(data)
}

fn rolling_std_dev(data: &[f64], window: usize) -> IndicatorSeries {
    let mut moments = RollingMoments::new(window);
    data.iter()
        .map(|&price| {
            moments.push(price);
            if moments.is_full() {
                moments.sample_std_dev()
            } else {
                None
            }
        })
        .collect()
}
