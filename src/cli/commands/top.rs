//! Top coins command implementation.

use anyhow::{Context, Result};
use coinlens_config::AppConfig;
use coinlens_core::traits::MarketDataSource;
use coinlens_data::{filter_coins, sort_coins, SortOrder};
use coinlens_monitor::report::render_coin_list;
use tracing::debug;

use super::market_client;
use crate::cli::{OutputFormat, TopArgs};

pub async fn run(args: TopArgs, config: &AppConfig) -> Result<()> {
    let currency = args.currency.unwrap_or(config.display.currency);
    let client = market_client(config)?;

    let coins = client
        .top_coins(args.limit, currency)
        .await
        .context("Failed to fetch market listing")?;
    debug!(count = coins.len(), "Fetched market listing");

    let mut coins = filter_coins(coins, args.search.as_deref().unwrap_or_default());
    let order = if args.descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    sort_coins(&mut coins, args.sort, order);

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&coins)?),
        OutputFormat::Text => print!("{}", render_coin_list(&coins, currency)),
    }

    Ok(())
}
