//! CSV price history.

use chrono::{NaiveDate, NaiveDateTime};
use coinlens_core::error::DataError;
use coinlens_core::types::PricePoint;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(
        alias = "Price",
        alias = "price",
        alias = "Close",
        alias = "close",
        alias = "Adj Close"
    )]
    price: f64,
}

/// Price history stored as a two-column CSV file (date, price).
///
/// A `close` column is accepted in place of `price`, so OHLC exports
/// load as close prices.
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    path: PathBuf,
}

impl CsvPriceSource {
    /// Create a new CSV price source.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Load every price point, oldest first.
    pub fn load_all(&self) -> Result<Vec<PricePoint>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let mut points = Vec::new();
        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;
            points.push(PricePoint::new(parse_timestamp(&record.date)?, record.price));
        }

        if points.is_empty() {
            return Err(DataError::NoDataAvailable);
        }

        points.sort_by_key(|p| p.timestamp);
        Ok(points)
    }
}

/// Parse a date, datetime or Unix timestamp into milliseconds.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M"];
    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }
    for format in DATE_FORMATS {
        if let Some(dt) = NaiveDate::parse_from_str(date_str, format)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    if let Ok(ts) = date_str.parse::<i64>() {
        // More than 10 digits means milliseconds
        return Ok(if ts > 10_000_000_000 { ts } else { ts * 1000 });
    }

    Err(DataError::Parse(format!("Could not parse date: {}", date_str)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("2024-01-15").unwrap(), 1_705_276_800_000);
        assert!(parse_timestamp("2024-01-15 10:30:00").is_ok());
        assert!(parse_timestamp("01/15/2024").is_ok());
        assert_eq!(parse_timestamp("1705312800000").unwrap(), 1_705_312_800_000);
        assert_eq!(parse_timestamp("1705312800").unwrap(), 1_705_312_800_000);
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_load_sorted() {
        let file = write_csv("date,price\n2024-01-03,3.0\n2024-01-01,1.0\n2024-01-02,2.0\n");
        let points = CsvPriceSource::new(file.path()).unwrap().load_all().unwrap();

        let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_close_column_alias() {
        let file = write_csv("Date,Open,High,Low,Close,Volume\n2024-01-01,1,2,0.5,1.5,100\n");
        let points = CsvPriceSource::new(file.path()).unwrap().load_all().unwrap();
        assert_eq!(points[0].price, 1.5);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CsvPriceSource::new("/nonexistent/prices.csv"),
            Err(DataError::NoDataAvailable)
        ));
    }

    #[test]
    fn test_bad_price() {
        let file = write_csv("date,price\n2024-01-01,abc\n");
        let result = CsvPriceSource::new(file.path()).unwrap().load_all();
        assert!(matches!(result, Err(DataError::Parse(_))));
    }

    #[test]
    fn test_header_only() {
        let file = write_csv("date,price\n");
        let result = CsvPriceSource::new(file.path()).unwrap().load_all();
        assert!(matches!(result, Err(DataError::NoDataAvailable)));
    }
}
