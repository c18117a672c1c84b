//! Market data sources for coinlens.

mod cache;
mod coingecko;
mod csv_source;
mod http;
mod listing;
mod market_chart;
mod news;

pub use cache::TtlCache;
pub use coingecko::{CoinGeckoClient, DEFAULT_BASE_URL};
pub use csv_source::CsvPriceSource;
pub use listing::{filter_coins, sort_coins, SortKey, SortOrder};
pub use market_chart::{load_market_chart, parse_market_chart};
pub use news::{NewsArticle, NewsClient, NewsSource, DEFAULT_NEWS_URL};

use coinlens_core::error::DataError;
use coinlens_core::types::PricePoint;
use std::path::Path;
use tracing::debug;

/// Load price points from a market chart JSON file or a CSV file.
///
/// The format is picked from the file extension; anything other than
/// `.csv` is read as market chart JSON.
pub fn load_prices(path: &Path) -> Result<Vec<PricePoint>, DataError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    debug!(path = %path.display(), csv = is_csv, "Loading prices");
    if is_csv {
        CsvPriceSource::new(path)?.load_all()
    } else {
        load_market_chart(path)
    }
}
