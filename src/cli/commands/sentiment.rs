//! Sentiment command implementation.

use anyhow::Result;
use coinlens_monitor::report::render_sentiment;

use crate::cli::SentimentArgs;

pub async fn run(args: SentimentArgs) -> Result<()> {
    print!("{}", render_sentiment(&args.headlines));
    Ok(())
}
