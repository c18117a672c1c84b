//! Technical indicators over price series.
//!
//! This crate provides the indicator engine:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD, Stochastic %K)
//! - Volatility indicators (Bollinger Bands, rolling standard deviation)
//!
//! Every indicator returns series of the same length as its input, with
//! `None` where the value is undefined. All computations are pure and run in
//! O(n) using sliding-window accumulators.
//!
//! ```
//! use coinlens_indicators::{rsi, sma};
//!
//! let prices: Vec<f64> = (1..=16).map(f64::from).collect();
//!
//! let rsi = rsi(&prices, 14).unwrap();
//! assert_eq!(rsi.leading_undefined(), 14);
//! assert_eq!(rsi.value(14), Some(100.0));
//!
//! let sma = sma(&prices, 4).unwrap();
//! assert_eq!(sma.value(3), Some(2.5));
//! ```

pub mod momentum;
pub mod moving_average;
pub mod simd;
pub mod volatility;
pub mod window;

pub use momentum::{
    macd, rsi, stochastic, Macd, MacdOutput, Rsi, Stochastic, DEFAULT_MACD_SPANS,
    DEFAULT_RSI_PERIOD, DEFAULT_STOCHASTIC_WINDOW,
};
pub use moving_average::{ema, sma, Ema, Sma, DEFAULT_EMA_SPAN, DEFAULT_SMA_WINDOW};
pub use volatility::{
    bollinger_bands, BollingerBands, BollingerOutput, StdDev, DEFAULT_BOLLINGER_K,
    DEFAULT_BOLLINGER_WINDOW,
};
