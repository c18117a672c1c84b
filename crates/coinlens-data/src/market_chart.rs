//! Market chart JSON, as returned by `/coins/{id}/market_chart`.

use coinlens_core::error::DataError;
use coinlens_core::types::PricePoint;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub(crate) struct MarketChart {
    /// `[timestamp_ms, price]` pairs
    pub prices: Vec<[f64; 2]>,
}

impl MarketChart {
    pub(crate) fn into_points(self) -> Result<Vec<PricePoint>, DataError> {
        if self.prices.is_empty() {
            return Err(DataError::NoDataAvailable);
        }

        let mut points: Vec<PricePoint> = self
            .prices
            .into_iter()
            .map(|[ts, price]| PricePoint::new(ts as i64, price))
            .collect();
        points.sort_by_key(|p| p.timestamp);
        Ok(points)
    }
}

/// Parse a market chart document into price points, oldest first.
///
/// Only the `prices` array is read; `market_caps` and `total_volumes`
/// are ignored.
pub fn parse_market_chart(json: &str) -> Result<Vec<PricePoint>, DataError> {
    let chart: MarketChart =
        serde_json::from_str(json).map_err(|e| DataError::Parse(e.to_string()))?;
    chart.into_points()
}

/// Read and parse a market chart file.
pub fn load_market_chart(path: impl AsRef<Path>) -> Result<Vec<PricePoint>, DataError> {
    let contents = std::fs::read_to_string(path)?;
    parse_market_chart(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHART: &str = r#"{
        "prices": [
            [1705363200000, 42500.5],
            [1705276800000, 41800.0],
            [1705449600000, 43100.25]
        ],
        "market_caps": [[1705276800000, 820000000000.0]],
        "total_volumes": [[1705276800000, 21000000000.0]]
    }"#;

    #[test]
    fn test_parse_sorted() {
        let points = parse_market_chart(CHART).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].timestamp, 1_705_276_800_000);
        assert_eq!(points[0].price, 41800.0);
        assert_eq!(points[2].price, 43100.25);
    }

    #[test]
    fn test_empty_prices() {
        assert!(matches!(
            parse_market_chart(r#"{"prices": []}"#),
            Err(DataError::NoDataAvailable)
        ));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            parse_market_chart(r#"{"prices": [[1, "abc"]]}"#),
            Err(DataError::Parse(_))
        ));
        assert!(matches!(parse_market_chart("not json"), Err(DataError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_market_chart("/nonexistent/chart.json"),
            Err(DataError::Io(_))
        ));
    }
}
