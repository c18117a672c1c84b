//! Validate configuration command.

use anyhow::{bail, Result};
use coinlens_config::AppConfig;
use std::path::Path;

pub async fn run(config_path: &Path, loaded: Result<Option<AppConfig>>) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    let config = match loaded {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("Configuration error: file not found");
            bail!("Config file {:?} not found", config_path);
        }
        Err(e) => {
            println!("Configuration error: {:#}", e);
            return Err(e);
        }
    };

    println!("Configuration is valid!");
    println!();
    println!("Currency: {}", config.display.currency);
    println!("History: {} days", config.display.history_days);
    println!(
        "Display: {} theme, refresh every {}s",
        config.display.theme, config.display.refresh_interval_secs
    );
    println!("API: {}", config.api.base_url);
    match &config.api.news_api_key {
        Some(_) => println!("News: {} (key set)", config.api.news_base_url),
        None => println!("News: disabled (no api.news_api_key)"),
    }
    println!();
    print!("{}", config.redacted().to_toml()?);

    Ok(())
}
