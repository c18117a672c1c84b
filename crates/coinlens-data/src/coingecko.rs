//! CoinGecko REST client.

use async_trait::async_trait;
use coinlens_core::error::DataError;
use coinlens_core::traits::MarketDataSource;
use coinlens_core::types::{CoinDetails, CoinMarket, Currency, PricePoint};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::{build_url, JsonFetcher};
use crate::market_chart::MarketChart;

/// Public CoinGecko API root.
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko client with a response cache keyed by request URL.
pub struct CoinGeckoClient {
    fetcher: JsonFetcher,
    base_url: String,
}

impl CoinGeckoClient {
    /// Create a client.
    ///
    /// # Arguments
    /// * `base_url` - API root
    /// * `timeout` - Per-request timeout
    /// * `cache_ttl` - How long a response body is reused
    pub fn new(base_url: &str, timeout: Duration, cache_ttl: Duration) -> Result<Self, DataError> {
        Ok(Self {
            fetcher: JsonFetcher::new(timeout, cache_ttl)?,
            base_url: base_url.to_string(),
        })
    }

    /// Client for the public API with default timeouts.
    pub fn public() -> Result<Self, DataError> {
        Self::new(
            DEFAULT_BASE_URL,
            Duration::from_secs(10),
            Duration::from_secs(300),
        )
    }

    fn url(&self, segments: &[&str], params: &[(&str, String)]) -> Result<Url, DataError> {
        build_url(&self.base_url, segments, params)
    }

    /// Fetch a per-coin endpoint; a 404 means the coin id is unknown.
    async fn get_coin<T: DeserializeOwned>(&self, url: Url, coin_id: &str) -> Result<T, DataError> {
        match self.fetcher.get(url, None).await {
            Err(DataError::Http { status: 404, .. }) => {
                Err(DataError::CoinNotFound(coin_id.to_string()))
            }
            other => other,
        }
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoClient {
    async fn top_coins(
        &self,
        limit: usize,
        currency: Currency,
    ) -> Result<Vec<CoinMarket>, DataError> {
        let url = self.url(
            &["coins", "markets"],
            &[
                ("vs_currency", currency.code().to_string()),
                ("order", "market_cap_desc".to_string()),
                ("per_page", limit.to_string()),
                ("page", "1".to_string()),
                ("sparkline", "false".to_string()),
                ("price_change_percentage", "24h".to_string()),
            ],
        )?;
        self.fetcher.get(url, None).await
    }

    async fn coin_details(&self, coin_id: &str) -> Result<CoinDetails, DataError> {
        let url = self.url(
            &["coins", coin_id],
            &[
                ("localization", "false".to_string()),
                ("tickers", "false".to_string()),
                ("community_data", "false".to_string()),
                ("developer_data", "false".to_string()),
            ],
        )?;
        self.get_coin(url, coin_id).await
    }

    async fn price_history(
        &self,
        coin_id: &str,
        currency: Currency,
        days: u32,
    ) -> Result<Vec<PricePoint>, DataError> {
        let url = self.url(
            &["coins", coin_id, "market_chart"],
            &[
                ("vs_currency", currency.code().to_string()),
                ("days", days.to_string()),
            ],
        )?;
        let chart: MarketChart = self.get_coin(url, coin_id).await?;
        chart.into_points()
    }

    fn name(&self) -> &str {
        "coingecko"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens here, so any request that misses the cache fails.
    const UNREACHABLE: &str = "http://127.0.0.1:9/api/v3/";

    fn client() -> CoinGeckoClient {
        CoinGeckoClient::new(
            UNREACHABLE,
            Duration::from_secs(2),
            Duration::from_secs(300),
        )
        .unwrap()
    }

    #[test]
    fn test_url_building() {
        let client = client();
        let url = client
            .url(&["coins", "bitcoin", "market_chart"], &[("days", "60".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9/api/v3/coins/bitcoin/market_chart?days=60"
        );
    }

    #[tokio::test]
    async fn test_price_history_served_from_cache() {
        let client = client();
        let url = client
            .url(
                &["coins", "bitcoin", "market_chart"],
                &[("vs_currency", "usd".to_string()), ("days", "60".to_string())],
            )
            .unwrap();
        client.fetcher.store(
            url.to_string(),
            r#"{"prices": [[2000, 2.0], [1000, 1.0]]}"#.to_string(),
        );

        let points = client
            .price_history("bitcoin", Currency::Usd, 60)
            .await
            .unwrap();
        assert_eq!(points, vec![PricePoint::new(1000, 1.0), PricePoint::new(2000, 2.0)]);
    }

    #[tokio::test]
    async fn test_top_coins_served_from_cache() {
        let client = client();
        let url = client
            .url(
                &["coins", "markets"],
                &[
                    ("vs_currency", "eur".to_string()),
                    ("order", "market_cap_desc".to_string()),
                    ("per_page", "2".to_string()),
                    ("page", "1".to_string()),
                    ("sparkline", "false".to_string()),
                    ("price_change_percentage", "24h".to_string()),
                ],
            )
            .unwrap();
        client.fetcher.store(
            url.to_string(),
            r#"[{"id":"bitcoin","symbol":"btc","name":"Bitcoin","current_price":59000.0,"market_cap_rank":1}]"#
                .to_string(),
        );

        let coins = client.top_coins(2, Currency::Eur).await.unwrap();
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].current_price, Some(59000.0));
    }

    #[tokio::test]
    async fn test_coin_id_stays_one_path_segment() {
        let client = client();
        let url = client
            .url(
                &["coins", "bitcoin/../markets", "market_chart"],
                &[("vs_currency", "usd".to_string()), ("days", "7".to_string())],
            )
            .unwrap();
        assert_eq!(
            url.path(),
            "/api/v3/coins/bitcoin%2F..%2Fmarkets/market_chart"
        );
        client.fetcher.store(
            url.to_string(),
            r#"{"prices": [[1000, 5.0]]}"#.to_string(),
        );

        let points = client
            .price_history("bitcoin/../markets", Currency::Usd, 7)
            .await
            .unwrap();
        assert_eq!(points, vec![PricePoint::new(1000, 5.0)]);
    }

    #[tokio::test]
    async fn test_connection_error() {
        let client = client();
        let result = client.coin_details("bitcoin").await;
        assert!(matches!(result, Err(DataError::Connection(_))));
    }
}
