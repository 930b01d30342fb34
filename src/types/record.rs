//! Record and bucketing types for the dashboard series

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped, state-tagged record extracted from an export.
///
/// Loaders map source-specific fields (e.g. an invoice's `issuedAt` and
/// `status`) onto this shape; the series builder never sees the raw export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricRecord {
    /// Primary timestamp (e.g. when the invoice was issued)
    pub occurred_at: Option<DateTime<Utc>>,
    /// Fallback timestamp, used when the primary is absent
    pub created_at: Option<DateTime<Utc>>,
    /// State/status string; counted only if the caller allows it
    pub category: String,
}

impl MetricRecord {
    /// Primary timestamp if present, else the fallback. `None` means the
    /// record contributes to no bucket.
    pub fn effective_timestamp(&self) -> Option<DateTime<Utc>> {
        self.occurred_at.or(self.created_at)
    }
}

/// Whether series buckets represent single days or whole months.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Month,
}

impl Granularity {
    /// Granularity for an inclusive range: monthly when the span in whole
    /// days, rounded up, exceeds 90; daily otherwise (exactly 90 stays daily).
    pub fn for_range(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        let secs = (to - from).num_seconds().max(0);
        let days = secs / 86_400 + i64::from(secs % 86_400 != 0);
        if days > 90 {
            Self::Month
        } else {
            Self::Day
        }
    }

    /// Normalize a UTC calendar date to its bucket key: the date itself for
    /// daily buckets, the first of the month for monthly buckets.
    pub fn bucket_key(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Day => date,
            Self::Month => date.with_day(1).unwrap_or(date),
        }
    }

    /// Next bucket key after `key`, or `None` on calendar overflow.
    pub fn step(self, key: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Day => key.succ_opt(),
            Self::Month => key.checked_add_months(Months::new(1)),
        }
    }
}

/// Parameters for one series build: the inclusive range and the ordered set
/// of categories to count. Category order fixes the key order of every
/// emitted bucket.
#[derive(Debug, Clone)]
pub struct SeriesRequest {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub categories: Vec<String>,
}

impl SeriesRequest {
    pub fn granularity(&self) -> Granularity {
        Granularity::for_range(self.from, self.to)
    }
}
