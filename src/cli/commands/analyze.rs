//! Analyze command implementation.

use anyhow::{Context, Result};
use coinlens_analysis::{
    summary_action, Action, FinalRecommendation, IndicatorSnapshot, Sentiment,
};
use coinlens_config::AppConfig;
use coinlens_core::traits::MarketDataSource;
use coinlens_core::types::KeyMetrics;
use coinlens_monitor::report::{render_key_metrics, render_snapshot};
use serde::Serialize;
use tracing::{info, warn};

use super::{fetch_prices, market_client, market_selection, news_client};
use crate::cli::{AnalyzeArgs, OutputFormat};

#[derive(Serialize)]
struct Analysis {
    metrics: KeyMetrics,
    snapshot: IndicatorSnapshot,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    headlines: Vec<String>,
    sentiment: Option<Sentiment>,
    final_recommendation: Option<FinalRecommendation>,
}

pub async fn run(args: AnalyzeArgs, config: &AppConfig) -> Result<()> {
    let (currency, days) = market_selection(&args.market, config);
    let client = market_client(config)?;

    info!("Analyzing {} over {} days", args.coin, days);
    let (details, prices) = tokio::try_join!(
        async {
            client
                .coin_details(&args.coin)
                .await
                .with_context(|| format!("Failed to fetch details for {}", args.coin))
        },
        fetch_prices(&client, &args.coin, currency, days),
    )?;

    let snapshot = IndicatorSnapshot::compute(&prices, &config.indicators)?;
    let technical = snapshot.recommendation.action;

    let headlines = if args.headlines.is_empty() && args.summary.is_none() {
        fetch_headlines(config, &details.name).await
    } else {
        args.headlines
    };
    let sentiment = (!headlines.is_empty()).then(|| Sentiment::overall(&headlines));
    let other: Option<Action> = match (&args.summary, sentiment) {
        (Some(summary), _) => summary_action(summary),
        (None, Some(sentiment)) => Some(sentiment.into()),
        (None, None) => None,
    };

    let analysis = Analysis {
        metrics: details.key_metrics(currency),
        snapshot,
        headlines,
        sentiment,
        final_recommendation: other.map(|o| FinalRecommendation::combine(technical, o)),
    };

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Text => {
            print!("{}", render_key_metrics(&analysis.metrics));
            println!();
            print!(
                "{}",
                render_snapshot(&analysis.metrics.symbol, &analysis.snapshot, currency)
            );
            if !analysis.headlines.is_empty() {
                println!("Headlines:");
                for headline in &analysis.headlines {
                    println!("  - {}", headline);
                }
            }
            if let Some(sentiment) = analysis.sentiment {
                println!("News sentiment: {}", sentiment);
            }
            match analysis.final_recommendation {
                Some(recommendation) => println!("Final: {}", recommendation),
                None if args.summary.is_some() => {
                    println!("Final: the summary names no trend, technical signal only")
                }
                None => {}
            }
        }
    }

    Ok(())
}

/// Recent headlines for `coin_name`, or none when news is not configured.
///
/// News is optional context, so failures are logged and skipped.
async fn fetch_headlines(config: &AppConfig, coin_name: &str) -> Vec<String> {
    let client = match news_client(config) {
        Ok(Some(client)) => client,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %format!("{:#}", e), "News unavailable");
            return Vec::new();
        }
    };

    match client.headlines(coin_name, config.api.news_articles).await {
        Ok(headlines) => {
            info!(coin = coin_name, count = headlines.len(), "Fetched headlines");
            headlines
        }
        Err(e) => {
            warn!(coin = coin_name, error = %e, "Failed to fetch headlines");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_headlines_without_key() {
        let config = AppConfig::default();
        assert!(fetch_headlines(&config, "Bitcoin").await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_news_is_skipped() {
        let mut config = AppConfig::default();
        config.api.news_api_key = Some("key".to_string());
        config.api.news_base_url = "http://127.0.0.1:9/v2".to_string();
        config.api.timeout_secs = 2;
        assert!(fetch_headlines(&config, "Bitcoin").await.is_empty());
    }
}
