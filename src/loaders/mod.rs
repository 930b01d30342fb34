//! Record sources: JSONL loaders for exported business records
//!
//! Each source fixes the field mapping for one export kind — which field is
//! the primary date, which is the fallback, which carries the status — and
//! the ordered category set the dashboard charts for it.

mod feedback;
mod invoices;
mod projects;

pub use feedback::FeedbackSource;
pub use invoices::InvoiceSource;
pub use projects::ProjectSource;

use crate::types::{MetricRecord, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Trait for loading metric records from exported files
pub trait RecordSource: Send + Sync {
    /// Source name as used by `--metric` (e.g. "invoices")
    fn name(&self) -> &str;

    /// Ordered category set; defines the key order of every series bucket
    fn categories(&self) -> &[&str];

    /// Parse a single JSONL export file
    fn parse_file(&self, path: &Path) -> Result<Vec<MetricRecord>>;

    /// Parse many files in parallel. A file that cannot be read logs a
    /// warning to stderr and contributes no records.
    fn parse_files(&self, files: &[PathBuf]) -> Vec<MetricRecord> {
        files
            .par_iter()
            .flat_map(|file| match self.parse_file(file) {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("[opspulse] Warning: failed to read {:?}: {}", file, e);
                    Vec::new()
                }
            })
            .collect()
    }
}

/// Parse an RFC 3339 instant from an export field. An unparseable value is
/// treated as an absent field, so the record's fallback date still applies.
pub(crate) fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Expand CLI file arguments: literal paths pass through, everything else is
/// treated as a glob pattern.
pub fn collect_files(args: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for arg in args {
        let path = PathBuf::from(arg);
        if path.is_file() {
            files.push(path);
            continue;
        }
        if let Ok(paths) = glob::glob(arg) {
            files.extend(paths.filter_map(|entry| entry.ok()).filter(|p| p.is_file()));
        }
    }
    files
}

/// Registry of available record sources
pub struct SourceRegistry {
    sources: Vec<Box<dyn RecordSource>>,
}

impl SourceRegistry {
    /// Create a registry with the built-in sources
    pub fn new() -> Self {
        Self {
            sources: vec![
                Box::new(InvoiceSource),
                Box::new(ProjectSource),
                Box::new(FeedbackSource),
            ],
        }
    }

    /// Get all registered sources
    pub fn sources(&self) -> &[Box<dyn RecordSource>] {
        &self.sources
    }

    /// Find a source by name
    pub fn get(&self, name: &str) -> Option<&dyn RecordSource> {
        self.sources
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
