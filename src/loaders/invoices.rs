//! Invoice export loader
//!
//! One JSON object per line, as produced by the dashboard's invoice export.
//! The primary date is `issuedAt`; drafts that were never issued only carry
//! `createdAt`, which is why the fallback matters here.

use super::{parse_instant, RecordSource};
use crate::types::{MetricRecord, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Invoice JSONL line structure (zero-copy with borrowed strings)
#[derive(Deserialize)]
struct InvoiceLine<'a> {
    status: Option<&'a str>,
    #[serde(rename = "issuedAt")]
    issued_at: Option<&'a str>,
    #[serde(rename = "createdAt")]
    created_at: Option<&'a str>,
}

/// Loader for invoice exports
pub struct InvoiceSource;

impl InvoiceSource {
    fn parse_line(line: &mut [u8]) -> Option<MetricRecord> {
        if line.is_empty() {
            return None;
        }

        let data: InvoiceLine = simd_json::from_slice(line).ok()?;

        Some(MetricRecord {
            occurred_at: data.issued_at.and_then(parse_instant),
            created_at: data.created_at.and_then(parse_instant),
            category: data.status.unwrap_or_default().to_string(),
        })
    }
}

impl RecordSource for InvoiceSource {
    fn name(&self) -> &str {
        "invoices"
    }

    fn categories(&self) -> &[&str] {
        &["sent", "overdue", "settled"]
    }

    fn parse_file(&self, path: &Path) -> Result<Vec<MetricRecord>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        // Stream line-by-line to avoid loading entire file into memory
        for line_result in reader.lines() {
            let line = match line_result {
                Ok(l) => l,
                Err(_) => continue, // Skip lines with read errors
            };

            if line.is_empty() {
                continue;
            }

            // Convert to mutable bytes for simd-json
            let mut line_bytes = line.into_bytes();
            if let Some(record) = Self::parse_line(&mut line_bytes) {
                records.push(record);
            }
        }

        Ok(records)
    }
}
