//! Configuration management.

mod settings;

pub use settings::{ApiSettings, AppConfig, DisplaySettings, LoggingConfig, Theme};

use config::{Config, Environment, File};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Load configuration from file and environment, then validate it.
///
/// Environment variables use the `COINLENS` prefix and `__` between
/// section and key, e.g. `COINLENS__DISPLAY__CURRENCY=eur`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("COINLENS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app: AppConfig = config.try_deserialize()?;
    app.validate()?;
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinlens_core::types::Currency;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_partial_file() {
        let file = toml_file(
            r#"
            [display]
            currency = "eur"
            theme = "dark"

            [indicators]
            rsi_period = 21
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.display.currency, Currency::Eur);
        assert_eq!(config.display.theme, Theme::Dark);
        assert_eq!(config.display.history_days, 60);
        assert_eq!(config.indicators.rsi_period, 21);
        assert_eq!(config.indicators.macd_long, 26);
        assert_eq!(config.api.cache_ttl_secs, 300);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let file = toml_file("[display]\ncurrency = \"jpy\"\n");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = toml_file("[display]\nrefresh_interval_secs = 5\n");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Invalid(_))));

        let file = toml_file("[indicators]\nsma_window = 0\n");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/nonexistent/coinlens.toml"));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_rendered_defaults_load_back() {
        let rendered = AppConfig::default().to_toml().unwrap();
        let file = toml_file(&rendered);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.indicators, AppConfig::default().indicators);
    }
}
