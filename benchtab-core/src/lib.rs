// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! benchtab Core Library
//!
//! Parsing and aggregation engine for benchmark reports. Converts raw
//! textual benchmark logs and semi-structured markdown report tables into
//! normalized tabular records.
//!
//! # Pipelines
//!
//! - **Log -> markdown table**: [`logparse::summarize`] splits a raw log
//!   into labeled sections, aggregates per-section statistics (with
//!   warm-up exclusion), and [`render::render_markdown_table`] serializes
//!   them.
//! - **Markdown report -> CSV**: [`mdparse::parse_report`] tracks ambient
//!   context line-by-line and flattens table rows;
//!   [`reporter::CsvReporter`] writes them out.
//!
//! Data flows one direction: raw text, parsed records, aggregated or
//! normalized records, serialized output. Everything is a single
//! synchronous pass over in-memory text.

pub mod error;
pub mod logparse;
pub mod mdparse;
pub mod normalize;
pub mod render;
pub mod reporter;
pub mod stats;

// Re-export commonly used types
pub use error::{ParseError, ParseResult};
pub use logparse::{parse_log, summarize, BenchmarkRun, BenchmarkSection};
pub use mdparse::{parse_report, Context, ReportParser, TableRow};
pub use normalize::WorkloadLabel;
pub use render::render_markdown_table;
pub use reporter::{CsvReporter, ReporterError};
pub use stats::AggregatedStats;
