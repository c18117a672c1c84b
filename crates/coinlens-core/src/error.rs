//! Error types for coinlens.

use thiserror::Error;

/// Market data errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Coin not found: {0}")]
    CoinNotFound(String),

    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Indicator calculation errors.
///
/// These are caller contract violations. Short series and degenerate
/// arithmetic are not errors; they produce undefined entries instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Empty price series")]
    EmptySeries,

    #[error("Non-finite price {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },
}

impl IndicatorError {
    /// Shorthand for a window or span that must be at least 1.
    pub fn zero_window(name: &str) -> Self {
        Self::InvalidParameter(format!("{name} must be at least 1"))
    }
}
