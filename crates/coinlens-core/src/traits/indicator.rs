//! Indicator trait definitions.

use crate::error::IndicatorError;
use crate::types::IndicatorSeries;

/// Check that a price series can be fed to an indicator.
///
/// Rejects empty input and any NaN or infinite sample.
pub fn validate_prices(data: &[f64]) -> Result<(), IndicatorError> {
    if data.is_empty() {
        return Err(IndicatorError::EmptySeries);
    }
    if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(IndicatorError::NonFiniteValue { index, value });
    }
    Ok(())
}

/// Trait for technical indicators.
///
/// Indicators map a price series to a derived series of the same length.
/// Entries before the window is full are undefined.
pub trait Indicator: Send + Sync {
    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Prices, oldest first
    ///
    /// # Returns
    /// A series aligned index-for-index with `data`
    fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, IndicatorError>;

    /// Number of data points needed before the first defined value.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Validate the input series.
    fn validate_data(&self, data: &[f64]) -> Result<(), IndicatorError> {
        validate_prices(data)
    }
}

/// Multi-output indicator (e.g., Bollinger Bands, MACD).
///
/// Some indicators produce several aligned series at once.
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple series.
    type Outputs;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[f64]) -> Result<Self::Outputs, IndicatorError>;

    /// Number of data points needed before the first defined value.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Validate the input series.
    fn validate_data(&self, data: &[f64]) -> Result<(), IndicatorError> {
        validate_prices(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestIndicator {
        period: usize,
    }

    impl Indicator for TestIndicator {
        fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, IndicatorError> {
            self.validate_data(data)?;
            // Rolling sum for testing
            let mut out = vec![None; data.len()];
            for (i, window) in data.windows(self.period).enumerate() {
                out[i + self.period - 1] = Some(window.iter().sum());
            }
            Ok(IndicatorSeries::from_values(out))
        }

        fn period(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_validate_prices() {
        assert_eq!(validate_prices(&[]), Err(IndicatorError::EmptySeries));
        assert!(validate_prices(&[1.0, 2.0]).is_ok());

        match validate_prices(&[1.0, f64::NAN, 3.0]) {
            Err(IndicatorError::NonFiniteValue { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(validate_prices(&[f64::INFINITY]).is_err());
    }

    #[test]
    fn test_indicator_calculate() {
        let indicator = TestIndicator { period: 3 };
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = indicator.calculate(&data).unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(result.leading_undefined(), 2);
        assert!((result.value(2).unwrap() - 6.0).abs() < 0.001); // 1+2+3
        assert!((result.value(4).unwrap() - 12.0).abs() < 0.001); // 3+4+5
    }

    #[test]
    fn test_indicator_rejects_bad_input() {
        let indicator = TestIndicator { period: 3 };
        assert!(indicator.calculate(&[]).is_err());
    }
}
