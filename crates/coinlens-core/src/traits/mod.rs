//! Core traits.

mod data_source;
mod indicator;

pub use data_source::MarketDataSource;
pub use indicator::{validate_prices, Indicator, MultiOutputIndicator};
