//! Project export loader

use super::{parse_instant, RecordSource};
use crate::types::{MetricRecord, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Project JSONL line structure
#[derive(Deserialize)]
struct ProjectLine<'a> {
    status: Option<&'a str>,
    #[serde(rename = "startedAt")]
    started_at: Option<&'a str>,
    #[serde(rename = "createdAt")]
    created_at: Option<&'a str>,
}

/// Loader for project exports. Charts by `startedAt`, falling back to
/// `createdAt` for projects that never left the backlog.
pub struct ProjectSource;

impl ProjectSource {
    fn parse_line(line: &mut [u8]) -> Option<MetricRecord> {
        if line.is_empty() {
            return None;
        }

        let data: ProjectLine = simd_json::from_slice(line).ok()?;

        Some(MetricRecord {
            occurred_at: data.started_at.and_then(parse_instant),
            created_at: data.created_at.and_then(parse_instant),
            category: data.status.unwrap_or_default().to_string(),
        })
    }
}

impl RecordSource for ProjectSource {
    fn name(&self) -> &str {
        "projects"
    }

    fn categories(&self) -> &[&str] {
        &["active", "completed", "archived"]
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
    fn test_parse_project_fixture() {
        let records = ProjectSource
            .parse_file(&fixture_path("projects-sample.jsonl"))
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].category, "active");
        assert_eq!(records[1].category, "completed");
    }

    #[test]
    fn test_backlog_project_uses_created_at() {
        let records = ProjectSource
            .parse_file(&fixture_path("projects-sample.jsonl"))
            .unwrap();

        // Third line: backlog project, no startedAt
        let backlog = &records[2];
        assert!(backlog.occurred_at.is_none());
        assert_eq!(backlog.effective_timestamp(), backlog.created_at);
    }

    #[test]
    fn test_source_name_and_categories() {
        assert_eq!(ProjectSource.name(), "projects");
        assert_eq!(
            ProjectSource.categories(),
            ["active", "completed", "archived"]
        );
    }
}
