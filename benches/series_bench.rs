//! Criterion benchmarks for SeriesBuilder

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use opspulse::services::SeriesBuilder;
use opspulse::types::{MetricRecord, SeriesRequest};
use std::hint::black_box;

const CATEGORIES: [&str; 3] = ["sent", "overdue", "settled"];

/// Spread `count` records evenly across the year starting at `start`
fn synthetic_records(start: DateTime<Utc>, count: usize) -> Vec<MetricRecord> {
    let span_minutes = 365 * 24 * 60;
    (0..count)
        .map(|i| {
            let offset = (i * span_minutes / count) as i64;
            MetricRecord {
                occurred_at: Some(start + Duration::minutes(offset)),
                created_at: None,
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            }
        })
        .collect()
}

fn request(start: DateTime<Utc>, days: i64) -> SeriesRequest {
    SeriesRequest {
        from: start,
        to: start + Duration::days(days),
        categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
    }
}

fn bench_build(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut group = c.benchmark_group("series_build");

    for &count in &[1_000usize, 10_000, 100_000] {
        let records = synthetic_records(start, count);
        group.throughput(Throughput::Elements(count as u64));

        // 30-day window: daily buckets
        let daily = request(start, 30);
        group.bench_with_input(BenchmarkId::new("daily", count), &records, |b, records| {
            b.iter(|| SeriesBuilder::build(black_box(records), black_box(&daily)))
        });

        // Full-year window: monthly buckets
        let monthly = request(start, 364);
        group.bench_with_input(
            BenchmarkId::new("monthly", count),
            &records,
            |b, records| b.iter(|| SeriesBuilder::build(black_box(records), black_box(&monthly))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
