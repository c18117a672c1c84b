//! Market data source trait definitions.

use crate::error::DataError;
use crate::types::{CoinDetails, CoinMarket, Currency, PricePoint};
use async_trait::async_trait;

/// Trait for market data providers.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the market listing ordered by market cap.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of coins to return
    /// * `currency` - Quote currency for prices
    async fn top_coins(&self, limit: usize, currency: Currency)
        -> Result<Vec<CoinMarket>, DataError>;

    /// Fetch details for a single coin.
    async fn coin_details(&self, coin_id: &str) -> Result<CoinDetails, DataError>;

    /// Fetch price history.
    ///
    /// # Returns
    /// Price points ordered from oldest to newest
    async fn price_history(
        &self,
        coin_id: &str,
        currency: Currency,
        days: u32,
    ) -> Result<Vec<PricePoint>, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}
