//! Filtering and sorting of the market listing.

use coinlens_core::types::CoinMarket;
use std::cmp::Ordering;
use std::str::FromStr;

/// Column to sort the market listing by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Market cap rank; unranked coins go last
    #[default]
    Popularity,
    Name,
    Price,
    MarketCap,
    Change24h,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "popularity" | "rank" => Ok(SortKey::Popularity),
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            "market-cap" | "market_cap" | "marketcap" => Ok(SortKey::MarketCap),
            "change" | "change-24h" | "change_24h" => Ok(SortKey::Change24h),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Keep coins whose name or symbol contains `search`, case-insensitively.
/// An empty search keeps everything.
pub fn filter_coins(coins: Vec<CoinMarket>, search: &str) -> Vec<CoinMarket> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return coins;
    }
    coins
        .into_iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle) || c.symbol.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort coins in place. Missing values sort last in either order.
pub fn sort_coins(coins: &mut [CoinMarket], key: SortKey, order: SortOrder) {
    coins.sort_by(|a, b| match key {
        SortKey::Name => directed(a.name.to_lowercase().cmp(&b.name.to_lowercase()), order),
        SortKey::Popularity => compare_optional(
            a.market_cap_rank.map(f64::from),
            b.market_cap_rank.map(f64::from),
            order,
        ),
        SortKey::Price => compare_optional(a.current_price, b.current_price, order),
        SortKey::MarketCap => compare_optional(a.market_cap, b.market_cap, order),
        SortKey::Change24h => compare_optional(
            a.price_change_percentage_24h,
            b.price_change_percentage_24h,
            order,
        ),
    });
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

fn compare_optional(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => directed(x.total_cmp(&y), order),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
