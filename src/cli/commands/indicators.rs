//! Indicators command implementation.

use anyhow::{Context, Result};
use coinlens_analysis::{IndicatorReport, IndicatorSettings, IndicatorSnapshot};
use coinlens_config::AppConfig;
use coinlens_core::types::PriceSeries;
use coinlens_data::load_prices;
use coinlens_monitor::report::render_snapshot;
use tracing::info;

use super::{fetch_prices, market_client, market_selection};
use crate::cli::{IndicatorOverrides, IndicatorsArgs, OutputFormat};

pub async fn run(args: IndicatorsArgs, config: &AppConfig) -> Result<()> {
    let settings = apply_overrides(config.indicators.clone(), &args.overrides);
    let (currency, days) = market_selection(&args.market, config);

    let (label, prices) = match (&args.file, &args.coin) {
        (Some(path), _) => {
            let points = load_prices(path)
                .with_context(|| format!("Failed to load prices from {:?}", path))?;
            (path.display().to_string(), PriceSeries::from_points(&points))
        }
        (None, Some(coin)) => {
            let client = market_client(config)?;
            (coin.clone(), fetch_prices(&client, coin, currency, days).await?)
        }
        (None, None) => anyhow::bail!("Provide a price file with --file or a coin with --coin"),
    };

    info!(source = %label, samples = prices.len(), "Computing indicators");
    let report = IndicatorReport::compute(&prices, &settings)?;

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            let snapshot = IndicatorSnapshot::from_report(&report, settings.rsi_thresholds);
            print!("{}", render_snapshot(&label, &snapshot, currency));
        }
    }

    Ok(())
}

fn apply_overrides(mut settings: IndicatorSettings, overrides: &IndicatorOverrides) -> IndicatorSettings {
    let IndicatorOverrides {
        rsi_period,
        macd_short,
        macd_long,
        macd_signal,
        sma_window,
        ema_span,
        bollinger_window,
        bollinger_k,
        stochastic_window,
    } = *overrides;

    settings.rsi_period = rsi_period.unwrap_or(settings.rsi_period);
    settings.macd_short = macd_short.unwrap_or(settings.macd_short);
    settings.macd_long = macd_long.unwrap_or(settings.macd_long);
    settings.macd_signal = macd_signal.unwrap_or(settings.macd_signal);
    settings.sma_window = sma_window.unwrap_or(settings.sma_window);
    settings.ema_span = ema_span.unwrap_or(settings.ema_span);
    settings.bollinger_window = bollinger_window.unwrap_or(settings.bollinger_window);
    settings.bollinger_k = bollinger_k.unwrap_or(settings.bollinger_k);
    settings.stochastic_window = stochastic_window.unwrap_or(settings.stochastic_window);
    settings
}
