//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use coinlens_core::types::Currency;
use coinlens_data::SortKey;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coinlens")]
#[command(author, version, about = "Cryptocurrency market analysis with technical indicators")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (defaults to the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute indicators for a price file or a coin's history
    Indicators(IndicatorsArgs),
    /// Key metrics, indicators and a recommendation for one coin
    Analyze(AnalyzeArgs),
    /// Compare two coins
    Compare(CompareArgs),
    /// List top coins by market cap
    Top(TopArgs),
    /// Classify news headlines
    Sentiment(SentimentArgs),
    /// Validate configuration
    ValidateConfig,
}

/// Market selection shared by the fetching commands.
#[derive(clap::Args, Clone)]
pub struct MarketArgs {
    /// Quote currency (usd, eur, inr, gbp, cad)
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Days of price history
    #[arg(long)]
    pub days: Option<u32>,
}

/// Per-indicator parameter overrides.
#[derive(clap::Args, Clone, Default)]
pub struct IndicatorOverrides {
    #[arg(long)]
    pub rsi_period: Option<usize>,
    #[arg(long)]
    pub macd_short: Option<usize>,
    #[arg(long)]
    pub macd_long: Option<usize>,
    #[arg(long)]
    pub macd_signal: Option<usize>,
    #[arg(long)]
    pub sma_window: Option<usize>,
    #[arg(long)]
    pub ema_span: Option<usize>,
    #[arg(long)]
    pub bollinger_window: Option<usize>,
    #[arg(long)]
    pub bollinger_k: Option<f64>,
    #[arg(long)]
    pub stochastic_window: Option<usize>,
}

#[derive(clap::Args)]
pub struct IndicatorsArgs {
    /// Price file (market chart JSON or CSV)
    #[arg(short, long, conflicts_with = "coin", required_unless_present = "coin")]
    pub file: Option<PathBuf>,

    /// CoinGecko coin id, e.g. bitcoin
    #[arg(long)]
    pub coin: Option<String>,

    #[command(flatten)]
    pub market: MarketArgs,

    #[command(flatten)]
    pub overrides: IndicatorOverrides,

    /// Output format; json prints every aligned series
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// CoinGecko coin id
    pub coin: String,

    #[command(flatten)]
    pub market: MarketArgs,

    /// News headline to weigh against the technical signal (repeatable)
    #[arg(long = "headline")]
    pub headlines: Vec<String>,

    /// Free-text trend summary to weigh against the technical signal
    #[arg(long, conflicts_with = "headlines")]
    pub summary: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct CompareArgs {
    /// First coin id
    pub first: String,

    /// Second coin id
    pub second: String,

    #[command(flatten)]
    pub market: MarketArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct TopArgs {
    /// Number of coins to fetch
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,

    /// Keep coins whose name or symbol contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort by popularity, name, price, market-cap or change
    #[arg(long, default_value = "popularity")]
    pub sort: SortKey,

    /// Sort in descending order
    #[arg(long)]
    pub descending: bool,

    /// Quote currency (usd, eur, inr, gbp, cad)
    #[arg(long)]
    pub currency: Option<Currency>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct SentimentArgs {
    /// Headlines to classify
    #[arg(required = true)]
    pub headlines: Vec<String>,
}
