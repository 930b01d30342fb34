//! Series output types and their JSON shapes
//!
//! A bucket serializes as `{ "date": "2024-01-15", "sent": 2, ... }` with the
//! category keys in the caller-supplied order; the report wraps the series
//! with the range, metric name, granularity, and per-category totals.

use crate::types::Granularity;
use chrono::{DateTime, NaiveDate, Utc};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// One dated slot in the series. `counts` is parallel to the category list
/// held by the owning [`DenseSeries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub counts: Vec<u64>,
}

/// A gap-free, chronological series: one point per calendar day or month in
/// the requested range, every point carrying a counter for every category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseSeries {
    pub categories: Vec<String>,
    pub granularity: Granularity,
    pub points: Vec<SeriesPoint>,
}

impl DenseSeries {
    pub fn empty(categories: Vec<String>, granularity: Granularity) -> Self {
        Self {
            categories,
            granularity,
            points: Vec::new(),
        }
    }

    /// Per-category sums across all emitted points, in category order.
    pub fn totals(&self) -> Vec<u64> {
        let mut totals = vec![0u64; self.categories.len()];
        for point in &self.points {
            for (slot, count) in point.counts.iter().enumerate() {
                totals[slot] = totals[slot].saturating_add(*count);
            }
        }
        totals
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Serialize for DenseSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.points.len()))?;
        for point in &self.points {
            seq.serialize_element(&KeyedPoint {
                categories: &self.categories,
                point,
            })?;
        }
        seq.end()
    }
}

/// A point zipped with its category names for serialization.
struct KeyedPoint<'a> {
    categories: &'a [String],
    point: &'a SeriesPoint,
}

impl Serialize for KeyedPoint<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.point.counts.len() + 1))?;
        map.serialize_entry("date", &self.point.date)?;
        for (name, count) in self.categories.iter().zip(&self.point.counts) {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

/// Per-category totals, serialized as a map in category order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesTotals(pub Vec<(String, u64)>);

impl Serialize for SeriesTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, total) in &self.0 {
            map.serialize_entry(name, total)?;
        }
        map.end()
    }
}

/// The JSON document printed by `opspulse report`.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub metric: String,
    pub granularity: Granularity,
    pub series: DenseSeries,
    pub totals: SeriesTotals,
}

impl MetricsReport {
    pub fn new(metric: &str, from: DateTime<Utc>, to: DateTime<Utc>, series: DenseSeries) -> Self {
        let totals = SeriesTotals(
            series
                .categories
                .iter()
                .cloned()
                .zip(series.totals())
                .collect(),
        );
        Self {
            from,
            to,
            metric: metric.to_string(),
            granularity: series.granularity,
            series,
            totals,
        }
    }
}
