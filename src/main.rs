//! coinlens CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands::{read_config, resolve_config};
use cli::{Cli, Commands};
use coinlens_config::LoggingConfig;
use coinlens_monitor::setup_logging;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Read once; problems are reported after logging is up
    let loaded = read_config(&cli.config);
    let logging = match &loaded {
        Ok(Some(config)) => config.logging.clone(),
        _ => LoggingConfig::default(),
    };

    // Flags win over the [logging] section
    let log_level = cli
        .log_level
        .map_or_else(|| logging.level.clone(), |level| level.as_str().to_string());
    let json_logs = cli.json_logs || logging.is_json();
    setup_logging(&log_level, json_logs)?;

    if let Err(e) = &loaded {
        warn!(error = %format!("{:#}", e), "Configuration unreadable, logging with defaults");
    }

    let path = cli.config;
    match cli.command {
        Commands::Indicators(args) => {
            cli::commands::indicators::run(args, &resolve_config(loaded, &path)?).await
        }
        Commands::Analyze(args) => {
            cli::commands::analyze::run(args, &resolve_config(loaded, &path)?).await
        }
        Commands::Compare(args) => {
            cli::commands::compare::run(args, &resolve_config(loaded, &path)?).await
        }
        Commands::Top(args) => cli::commands::top::run(args, &resolve_config(loaded, &path)?).await,
        Commands::Sentiment(args) => cli::commands::sentiment::run(args).await,
        Commands::ValidateConfig => cli::commands::validate::run(&path, loaded).await,
    }
}
