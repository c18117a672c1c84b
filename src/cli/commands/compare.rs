//! Compare command implementation.

use anyhow::Result;
use coinlens_analysis::{CoinComparison, IndicatorSnapshot, LabeledSnapshot};
use coinlens_config::AppConfig;
use coinlens_monitor::report::render_comparison;
use tracing::info;

use super::{fetch_prices, market_client, market_selection};
use crate::cli::{CompareArgs, OutputFormat};

pub async fn run(args: CompareArgs, config: &AppConfig) -> Result<()> {
    let (currency, days) = market_selection(&args.market, config);
    let client = market_client(config)?;

    info!("Comparing {} and {}", args.first, args.second);
    let (first_prices, second_prices) = tokio::try_join!(
        fetch_prices(&client, &args.first, currency, days),
        fetch_prices(&client, &args.second, currency, days),
    )?;

    let comparison = CoinComparison::new(
        LabeledSnapshot::new(
            args.first.clone(),
            IndicatorSnapshot::compute(&first_prices, &config.indicators)?,
        ),
        LabeledSnapshot::new(
            args.second.clone(),
            IndicatorSnapshot::compute(&second_prices, &config.indicators)?,
        ),
    );

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
        OutputFormat::Text => print!("{}", render_comparison(&comparison, currency)),
    }

    Ok(())
}
