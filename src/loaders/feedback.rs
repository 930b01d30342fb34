//! Feedback-response export loader

use super::{parse_instant, RecordSource};
use crate::types::{MetricRecord, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Feedback JSONL line structure. Feedback uses `state` rather than
/// `status` in the export schema.
#[derive(Deserialize)]
struct FeedbackLine<'a> {
    state: Option<&'a str>,
    #[serde(rename = "submittedAt")]
    submitted_at: Option<&'a str>,
    #[serde(rename = "createdAt")]
    created_at: Option<&'a str>,
}

/// Loader for feedback-form response exports
pub struct FeedbackSource;

impl FeedbackSource {
    fn parse_line(line: &mut [u8]) -> Option<MetricRecord> {
        if line.is_empty() {
            return None;
        }

        let data: FeedbackLine = simd_json::from_slice(line).ok()?;

        Some(MetricRecord {
            occurred_at: data.submitted_at.and_then(parse_instant),
            created_at: data.created_at.and_then(parse_instant),
            category: data.state.unwrap_or_default().to_string(),
        })
    }
}

impl RecordSource for FeedbackSource {
    fn name(&self) -> &str {
        "feedback"
    }

    fn categories(&self) -> &[&str] {
        &["received", "reviewed", "resolved"]
    }

    fn parse_file(&self, path: &Path) -> Result<Vec<MetricRecord>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for line_result in reader.lines() {
            let line = match line_result {
                Ok(l) => l,
                Err(_) => continue,
            };

            if line.is_empty() {
                continue;
            }

            let mut line_bytes = line.into_bytes();
            if let Some(record) = Self::parse_line(&mut line_bytes) {
                records.push(record);
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn test_parse_feedback_fixture() {
        let records = FeedbackSource
            .parse_file(&fixture_path("feedback-sample.jsonl"))
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].category, "received");
        assert_eq!(records[2].category, "resolved");
    }

    #[test]
    fn test_state_field_mapped_to_category() {
        let mut line = br#"{"state":"reviewed","submittedAt":"2024-05-01T08:00:00Z"}"#.to_vec();
        let record = FeedbackSource::parse_line(&mut line).unwrap();

        assert_eq!(record.category, "reviewed");
        assert!(record.occurred_at.is_some());
        assert!(record.created_at.is_none());
    }

    #[test]
    fn test_source_name_and_categories() {
        assert_eq!(FeedbackSource.name(), "feedback");
        assert_eq!(
            FeedbackSource.categories(),
            ["received", "reviewed", "resolved"]
        );
    }
}
