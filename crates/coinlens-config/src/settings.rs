//! Configuration structures.

use coinlens_analysis::IndicatorSettings;
use coinlens_core::types::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::time::Duration;

use crate::ConfigError;

/// Allowed dashboard refresh intervals, in seconds.
const REFRESH_INTERVAL_RANGE: RangeInclusive<u64> = 30..=600;

/// NewsAPI page sizes.
const NEWS_ARTICLES_RANGE: RangeInclusive<usize> = 1..=100;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub indicators: IndicatorSettings,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Check value ranges the types alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let refresh = self.display.refresh_interval_secs;
        if !REFRESH_INTERVAL_RANGE.contains(&refresh) {
            return Err(ConfigError::Invalid(format!(
                "display.refresh_interval_secs must be within {}..={}, got {}",
                REFRESH_INTERVAL_RANGE.start(),
                REFRESH_INTERVAL_RANGE.end(),
                refresh
            )));
        }
        if self.display.history_days == 0 {
            return Err(ConfigError::Invalid(
                "display.history_days must be at least 1".into(),
            ));
        }

        self.indicators
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("indicators: {}", e)))?;

        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url must not be empty".into()));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid("api.timeout_secs must be at least 1".into()));
        }
        if !NEWS_ARTICLES_RANGE.contains(&self.api.news_articles) {
            return Err(ConfigError::Invalid(format!(
                "api.news_articles must be within {}..={}, got {}",
                NEWS_ARTICLES_RANGE.start(),
                NEWS_ARTICLES_RANGE.end(),
                self.api.news_articles
            )));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be \"pretty\" or \"json\", got {:?}",
                other
            ))),
        }
    }

    /// Copy with secrets masked, for printing.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.api.news_api_key.is_some() {
            config.api.news_api_key = Some("********".to_string());
        }
        config
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Dashboard color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        };
        f.write_str(name)
    }
}

/// What and how to display.
///
/// `theme` and `refresh_interval_secs` are read by dashboard front ends;
/// the CLI validates and reports them but renders once per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub currency: Currency,
    pub refresh_interval_secs: u64,
    pub theme: Theme,
    /// Days of price history fetched for indicators
    pub history_days: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            refresh_interval_secs: 180,
            theme: Theme::default(),
            history_days: 60,
        }
    }
}

/// Market data and news API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub cache_ttl_secs: u64,
    pub news_base_url: String,
    /// NewsAPI key; headlines are fetched only when set
    pub news_api_key: Option<String>,
    /// Articles fetched per coin
    pub news_articles: usize,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com/api/v3".to_string(),
            timeout_secs: 10,
            cache_ttl_secs: 300,
            news_base_url: "https://newsapi.org/v2".to_string(),
            news_api_key: None,
            news_articles: 5,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.display.refresh_interval_secs, 180);
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_refresh_interval_bounds() {
        let mut config = AppConfig::default();
        config.display.refresh_interval_secs = 30;
        assert!(config.validate().is_ok());
        config.display.refresh_interval_secs = 600;
        assert!(config.validate().is_ok());
        config.display.refresh_interval_secs = 601;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_logging_format() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_news_settings() {
        let mut config = AppConfig::default();
        assert!(config.api.news_api_key.is_none());
        assert_eq!(config.api.news_articles, 5);
        assert_eq!(config.api.news_base_url, "https://newsapi.org/v2");

        config.api.news_articles = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        config.api.news_articles = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_redacted_hides_news_key() {
        let mut config = AppConfig::default();
        config.api.news_api_key = Some("secret-key".to_string());

        let rendered = config.redacted().to_toml().unwrap();
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("news_api_key"));
        assert_eq!(config.api.news_api_key.as_deref(), Some("secret-key"));

        let without_key = AppConfig::default().to_toml().unwrap();
        assert!(!without_key.contains("news_api_key"));
    }

    #[test]
    fn test_theme_display_matches_config_names() {
        for theme in [Theme::Light, Theme::Dark, Theme::Auto] {
            let rendered = toml::to_string(&DisplaySettings {
                theme,
                ..DisplaySettings::default()
            })
            .unwrap();
            assert!(rendered.contains(&format!("theme = \"{}\"", theme)));
        }
    }

    #[test]
    fn test_invalid_bollinger_k() {
        let mut config = AppConfig::default();
        config.indicators.bollinger_k = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("indicators"));
    }
}
