//! opspulse: dense, chart-ready time series from exported business records
//!
//! The core is [`services::SeriesBuilder`], a pure two-pass aggregation that
//! turns flat record lists into gap-free daily or monthly series with
//! per-category counters. [`loaders`] maps JSONL exports (invoices, projects,
//! feedback responses) onto the record shape, and [`cli`] wraps both behind a
//! small command-line interface.

pub mod cli;
pub mod loaders;
pub mod services;
pub mod types;
