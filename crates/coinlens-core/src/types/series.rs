//! Price and indicator series.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::PricePoint;

/// Ordered price samples, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    /// Create a series from raw prices.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Build a series from timestamped points, ordering them by timestamp.
    pub fn from_points(points: &[PricePoint]) -> Self {
        let mut sorted: Vec<&PricePoint> = points.iter().collect();
        sorted.sort_by_key(|p| p.timestamp);
        Self(sorted.into_iter().map(|p| p.price).collect())
    }

    /// The underlying prices.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Consume the series.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for PriceSeries {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Indicator output aligned index-for-index with its input.
///
/// `None` marks positions where the indicator is undefined, either because
/// the window is not yet full or because the value is degenerate (0/0).
/// Serializes as a JSON array with `null` for undefined entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorSeries(Vec<Option<f64>>);

impl IndicatorSeries {
    /// Wrap precomputed values.
    pub fn from_values(values: Vec<Option<f64>>) -> Self {
        Self(values)
    }

    /// A series where every entry is defined.
    pub fn from_defined(values: Vec<f64>) -> Self {
        Self(values.into_iter().map(Some).collect())
    }

    /// Value at `index`, `None` if out of range or undefined.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().flatten()
    }

    /// Number of defined entries.
    pub fn defined_count(&self) -> usize {
        self.0.iter().filter(|v| v.is_some()).count()
    }

    /// Number of undefined entries before the first defined one.
    pub fn leading_undefined(&self) -> usize {
        self.0.iter().take_while(|v| v.is_none()).count()
    }

    /// Most recent defined value.
    pub fn last_defined(&self) -> Option<f64> {
        self.0.iter().rev().find_map(|v| *v)
    }

    /// Iterate over defined values only, with their indices.
    pub fn defined(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|value| (i, value)))
    }

    /// Combine two aligned series entry by entry; undefined if either side is.
    pub fn zip_with<F>(&self, other: &IndicatorSeries, f: F) -> IndicatorSeries
    where
        F: Fn(f64, f64) -> f64,
    {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| match (a, b) {
                (Some(a), Some(b)) => Some(f(*a, *b)),
                _ => None,
            })
            .collect()
    }

    /// Consume the series.
    pub fn into_inner(self) -> Vec<Option<f64>> {
        self.0
    }
}

impl Deref for IndicatorSeries {
    type Target = [Option<f64>];

    fn deref(&self) -> &[Option<f64>] {
        &self.0
    }
}

impl FromIterator<Option<f64>> for IndicatorSeries {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_series_accessors() {
        let series = IndicatorSeries::from_values(vec![None, None, Some(1.0), None, Some(3.0)]);

        assert_eq!(series.len(), 5);
        assert_eq!(series.defined_count(), 2);
        assert_eq!(series.leading_undefined(), 2);
        assert_eq!(series.last_defined(), Some(3.0));
        assert_eq!(series.value(2), Some(1.0));
        assert_eq!(series.value(3), None);
        assert_eq!(series.value(99), None);
    }

    #[test]
    fn test_zip_with_propagates_undefined() {
        let a = IndicatorSeries::from_values(vec![None, Some(2.0), Some(5.0)]);
        let b = IndicatorSeries::from_values(vec![Some(1.0), None, Some(3.0)]);

        let diff = a.zip_with(&b, |x, y| x - y);
        assert_eq!(diff.into_inner(), vec![None, None, Some(2.0)]);
    }

    #[test]
    fn test_serializes_undefined_as_null() {
        let series = IndicatorSeries::from_values(vec![None, Some(1.5)]);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, "[null,1.5]");
    }

    #[test]
    fn test_price_series_from_points_sorts() {
        let points = vec![
            PricePoint::new(2_000, 2.0),
            PricePoint::new(1_000, 1.0),
            PricePoint::new(3_000, 3.0),
        ];
        let series = PriceSeries::from_points(&points);
        assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
    }
}
