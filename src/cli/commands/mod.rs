//! CLI command implementations.

pub mod analyze;
pub mod compare;
pub mod indicators;
pub mod sentiment;
pub mod top;
pub mod validate;

use anyhow::{Context, Result};
use coinlens_config::{load_config, AppConfig};
use coinlens_core::traits::MarketDataSource;
use coinlens_core::types::{Currency, PriceSeries};
use coinlens_data::{CoinGeckoClient, NewsClient};
use std::path::Path;
use tracing::{info, warn};

use crate::cli::MarketArgs;

/// Read the configuration file once. `Ok(None)` means there is no file.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    load_config(path)
        .map(Some)
        .with_context(|| format!("Failed to load config {:?}", path))
}

/// Settle what `read_config` returned, falling back to defaults when the
/// file is absent. Runs after logging is set up so the fallback is visible.
pub fn resolve_config(loaded: Result<Option<AppConfig>>, path: &Path) -> Result<AppConfig> {
    match loaded? {
        Some(config) => Ok(config),
        None => {
            warn!("Config file {:?} not found, using defaults", path);
            Ok(AppConfig::default())
        }
    }
}

/// Build the market data client from the `[api]` section.
pub fn market_client(config: &AppConfig) -> Result<CoinGeckoClient> {
    let api = &config.api;
    CoinGeckoClient::new(&api.base_url, api.timeout(), api.cache_ttl())
        .context("Failed to create market data client")
}

/// Build the news client when `[api] news_api_key` is set.
pub fn news_client(config: &AppConfig) -> Result<Option<NewsClient>> {
    let api = &config.api;
    let Some(key) = api.news_api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
        return Ok(None);
    };
    NewsClient::new(&api.news_base_url, key, api.timeout(), api.cache_ttl())
        .map(Some)
        .context("Failed to create news client")
}

/// Currency and history length, command-line values first.
pub fn market_selection(args: &MarketArgs, config: &AppConfig) -> (Currency, u32) {
    (
        args.currency.unwrap_or(config.display.currency),
        args.days.unwrap_or(config.display.history_days),
    )
}

/// Fetch a coin's price history as a series, oldest first.
pub async fn fetch_prices(
    source: &dyn MarketDataSource,
    coin: &str,
    currency: Currency,
    days: u32,
) -> Result<PriceSeries> {
    let points = source
        .price_history(coin, currency, days)
        .await
        .with_context(|| format!("Failed to fetch price history for {}", coin))?;
    info!(coin, points = points.len(), source = source.name(), "Fetched price history");
    Ok(PriceSeries::from_points(&points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let path = Path::new("/nonexistent/coinlens.toml");
        let loaded = read_config(path).unwrap();
        assert!(loaded.is_none());

        let config = resolve_config(Ok(loaded), path).unwrap();
        assert_eq!(config.display.history_days, 60);
    }

    #[test]
    fn test_malformed_config_is_reported() {
        let file = toml_file("[display]\nrefresh_interval_secs = \"soon\"\n");
        let loaded = read_config(file.path());
        assert!(loaded.is_err());

        let err = resolve_config(loaded, file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_config_read_once_is_used() {
        let file = toml_file("[display]\nhistory_days = 30\n\n[logging]\nformat = \"json\"\n");
        let loaded = read_config(file.path()).unwrap();
        assert!(loaded.as_ref().is_some_and(|c| c.logging.is_json()));

        let config = resolve_config(Ok(loaded), file.path()).unwrap();
        assert_eq!(config.display.history_days, 30);
    }

    #[test]
    fn test_news_client_needs_key() {
        let mut config = AppConfig::default();
        assert!(news_client(&config).unwrap().is_none());

        config.api.news_api_key = Some("  ".to_string());
        assert!(news_client(&config).unwrap().is_none());

        config.api.news_api_key = Some("key".to_string());
        assert!(news_client(&config).unwrap().is_some());
    }
}
