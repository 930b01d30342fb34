//! Series builder: dense, gap-filled time series from flat record lists
//!
//! Two passes. The first groups records into bucket-keyed counter rows with
//! no range filtering; the second walks every calendar unit of the requested
//! range in order, taking the aggregated row when one exists and a zeroed row
//! otherwise. The walk alone decides what appears in the output, so a record
//! outside the range is aggregated and then never visited. Callers are
//! expected to query only in-range records to begin with.

use crate::types::{DenseSeries, MetricRecord, SeriesPoint, SeriesRequest};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Builder for dashboard chart series
pub struct SeriesBuilder;

impl SeriesBuilder {
    /// Build the dense series for `request` over `records`.
    ///
    /// Pure and allocation-local; an inverted range yields an empty series.
    pub fn build(records: &[MetricRecord], request: &SeriesRequest) -> DenseSeries {
        let categories = request.categories.clone();
        let granularity = request.granularity();

        if request.to < request.from {
            return DenseSeries::empty(categories, granularity);
        }

        let slots: HashMap<&str, usize> = categories
            .iter()
            .enumerate()
            .map(|(slot, name)| (name.as_str(), slot))
            .collect();

        // Pass 1: aggregate records into bucket-keyed counter rows.
        let mut buckets: HashMap<NaiveDate, Vec<u64>> = HashMap::new();
        for record in records {
            let timestamp = match record.effective_timestamp() {
                Some(ts) => ts,
                None => continue, // no usable date field
            };
            let key = granularity.bucket_key(timestamp.date_naive());
            let counts = buckets
                .entry(key)
                .or_insert_with(|| vec![0; categories.len()]);
            // Categories outside the allowed set are silently dropped
            if let Some(&slot) = slots.get(record.category.as_str()) {
                counts[slot] = counts[slot].saturating_add(1);
            }
        }

        // Pass 2: walk the range one day or month at a time, zero-filling gaps.
        let end = request.to.date_naive();
        let mut cursor = granularity.bucket_key(request.from.date_naive());
        let mut points = Vec::new();
        while cursor <= end {
            let counts = buckets
                .remove(&cursor)
                .unwrap_or_else(|| vec![0; categories.len()]);
            points.push(SeriesPoint {
                date: cursor,
                counts,
            });
            cursor = match granularity.step(cursor) {
                Some(next) => next,
                None => break,
            };
        }

        DenseSeries {
            categories,
            granularity,
            points,
        }
    }
}
