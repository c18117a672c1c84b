//! Market data types.
//!
//! Field names follow the CoinGecko REST API so responses deserialize
//! directly into these structs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Currency;

/// A single timestamped price sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Price in the quote currency
    pub price: f64,
}

impl PricePoint {
    /// Create a new price point.
    pub fn new(timestamp: i64, price: f64) -> Self {
        Self { timestamp, price }
    }

    /// Get the timestamp as a DateTime.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// One row of the market listing (`/coins/markets`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// Coin details (`/coins/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetails {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub market_data: MarketData,
}

/// Per-currency market figures for a coin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub market_cap: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub total_volume: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub ath: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub ath_change_percentage: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

fn lookup(map: &HashMap<String, Option<f64>>, currency: Currency) -> Option<f64> {
    map.get(currency.code()).copied().flatten()
}

impl CoinDetails {
    /// Summarize the headline figures in one currency.
    pub fn key_metrics(&self, currency: Currency) -> KeyMetrics {
        let data = &self.market_data;
        KeyMetrics {
            name: self.name.clone(),
            symbol: self.symbol.to_uppercase(),
            currency,
            current_price: lookup(&data.current_price, currency),
            market_cap: lookup(&data.market_cap, currency),
            total_volume: lookup(&data.total_volume, currency),
            circulating_supply: data.circulating_supply,
            total_supply: data.total_supply,
            max_supply: data.max_supply,
            all_time_high: lookup(&data.ath, currency),
            ath_change_pct: lookup(&data.ath_change_percentage, currency),
            price_change_24h_pct: data.price_change_percentage_24h,
        }
    }
}

/// Headline figures for a coin. Missing values are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub name: String,
    pub symbol: String,
    pub currency: Currency,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    /// `None` also for coins with no supply cap
    pub max_supply: Option<f64>,
    pub all_time_high: Option<f64>,
    pub ath_change_pct: Option<f64>,
    pub price_change_24h_pct: Option<f64>,
}
