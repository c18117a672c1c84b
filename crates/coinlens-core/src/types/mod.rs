//! Core data types.

mod currency;
mod market;
mod series;

pub use currency::Currency;
pub use market::{CoinDetails, CoinMarket, KeyMetrics, MarketData, PricePoint};
pub use series::{IndicatorSeries, PriceSeries};
