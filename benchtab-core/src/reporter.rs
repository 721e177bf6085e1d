// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CSV serialization of flattened report rows.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::mdparse::TableRow;

/// CSV column order. Written explicitly so an empty report still produces
/// a header-only file; [`TableRow`] field order must stay in sync.
const CSV_HEADER: [&str; 9] = [
    "chunk_size",
    "rayon_threads",
    "workload",
    "blocks",
    "depth",
    "real",
    "user",
    "sys",
    "stddev_real",
];

/// Errors that can occur while writing CSV output.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("Failed to write CSV output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize row: {0}")]
    Serialization(#[from] csv::Error),
}

/// CSV reporter for flattened table rows.
pub struct CsvReporter;

impl CsvReporter {
    /// Write rows to any writer. Returns the number of data rows written.
    pub fn write_to<W: Write>(writer: W, rows: &[TableRow]) -> Result<usize, ReporterError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(CSV_HEADER)?;
        for row in rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(rows.len())
    }

    /// Write rows to a file, creating or truncating it.
    pub fn write_file(path: impl AsRef<Path>, rows: &[TableRow]) -> Result<usize, ReporterError> {
        let file = File::create(path)?;
        Self::write_to(BufWriter::new(file), rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(workload: &str, blocks: Option<u64>) -> TableRow {
        TableRow {
            chunk_size: 1000,
            rayon_threads: 8,
            workload: workload.to_string(),
            blocks,
            depth: 1,
            real: 1.5,
            user: 0.75,
            sys: 0.15,
            stddev_real: 0.71,
        }
    }

    #[test]
    fn test_header_and_row_layout() {
        let mut buf = Vec::new();
        let count = CsvReporter::write_to(&mut buf, &[row("10K blocks", Some(10_000))]).unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("chunk_size,rayon_threads,workload,blocks,depth,real,user,sys,stddev_real")
        );
        assert_eq!(
            lines.next(),
            Some("1000,8,10K blocks,10000,1,1.5,0.75,0.15,0.71")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_missing_blocks_is_empty_field() {
        let mut buf = Vec::new();
        CsvReporter::write_to(&mut buf, &[row("odd label", None)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().nth(1).unwrap().contains("odd label,,1,"));
    }

    #[test]
    fn test_empty_input_writes_header_only() {
        let mut buf = Vec::new();
        let count = CsvReporter::write_to(&mut buf, &[]).unwrap();
        assert_eq!(count, 0);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_write_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let count = CsvReporter::write_file(&path, &[row("10K blocks", Some(10_000))]).unwrap();
        assert_eq!(count, 1);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("chunk_size,"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_comma_bearing_workload_is_quoted() {
        let mut buf = Vec::new();
        CsvReporter::write_to(&mut buf, &[row("40K blocks, 2 depth", Some(40_000))]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"40K blocks, 2 depth\""));
    }
}
