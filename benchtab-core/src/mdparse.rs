// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Markdown report parsing: context tracking plus table row extraction.
//!
//! A report interleaves context declarations with markdown tables:
//!
//! ```text
//! chunk_size: 1_000
//! rayon_threads: 8
//!
//! | Workload   | Real (s) | User (s) | Sys (s) | std dev (real) |
//! |------------|----------|----------|---------|---------|
//! | 10K blocks | 1.50     | 0.75     | 0.15    | 0.71   |
//! ```
//!
//! The parser is a line-by-line state machine. The only state is the
//! two-field [`Context`]; rows seen before the context is complete are
//! discarded, not buffered. Context mutation is order-dependent, so a
//! report must be fed strictly sequentially.

use serde::{Deserialize, Serialize};

use crate::error::ParseResult;
use crate::normalize::{self, WorkloadLabel};

/// Ambient configuration under which subsequent table rows were produced.
///
/// A new `chunk_size` declaration invalidates any previously seen thread
/// count until it is re-declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    pub chunk_size: Option<u64>,
    pub rayon_threads: Option<u32>,
}

impl Context {
    fn set_chunk_size(&mut self, value: u64) {
        self.chunk_size = Some(value);
        self.rayon_threads = None;
    }

    fn set_rayon_threads(&mut self, value: u32) {
        self.rayon_threads = Some(value);
    }

    fn complete(&self) -> Option<(u64, u32)> {
        Some((self.chunk_size?, self.rayon_threads?))
    }
}

/// A flattened record: one table row joined with its context snapshot.
///
/// Field declaration order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub chunk_size: u64,
    pub rayon_threads: u32,
    pub workload: String,
    pub blocks: Option<u64>,
    pub depth: u32,
    pub real: f64,
    pub user: f64,
    pub sys: f64,
    pub stddev_real: f64,
}

/// Line-by-line report parser carrying the running [`Context`].
#[derive(Debug, Default)]
pub struct ReportParser {
    context: Context,
}

impl ReportParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current context snapshot.
    pub fn context(&self) -> Context {
        self.context
    }

    /// Consume one report line. Returns a row for data lines seen under a
    /// complete context; declaration lines mutate the context and yield
    /// nothing. Undecodable rows are dropped, never an error.
    pub fn feed_line(&mut self, raw: &str) -> Option<TableRow> {
        let normalized = normalize::normalize_text(raw);
        let line = normalized.trim();

        if let Some(value) = declaration_value(line, "chunk_size") {
            self.context.set_chunk_size(value);
            return None;
        }
        if let Some(value) = declaration_value(line, "rayon_threads") {
            match u32::try_from(value) {
                Ok(threads) => self.context.set_rayon_threads(threads),
                Err(_) => tracing::debug!(value, "rayon_threads out of range, ignoring"),
            }
            return None;
        }

        self.feed_candidate_row(line)
    }

    fn feed_candidate_row(&self, line: &str) -> Option<TableRow> {
        if !line.starts_with('|') || line.matches('|').count() < 5 {
            return None;
        }

        // Substrings between pipes, minus the outer empties.
        let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
        cells.remove(0);
        cells.pop();

        if is_separator_row(&cells) || cells.is_empty() {
            return None;
        }
        if cells[0].to_lowercase().starts_with("workload") {
            return None;
        }

        // 4-cell schema carries no std-dev column; with 5 or more cells
        // everything beyond the fifth is ignored.
        let (workload, real, user, sys, stddev) = match cells.len() {
            0..=3 => return None,
            4 => (cells[0], cells[1], cells[2], cells[3], None),
            _ => (cells[0], cells[1], cells[2], cells[3], Some(cells[4])),
        };

        let Some((chunk_size, rayon_threads)) = self.context.complete() else {
            tracing::debug!(workload, "row before complete context, dropping");
            return None;
        };

        let (real, user, sys, stddev_real) = match parse_row_numbers(real, user, sys, stddev) {
            Ok(values) => values,
            Err(err) => {
                tracing::debug!(workload, %err, "undecodable numeric cell, dropping row");
                return None;
            }
        };

        let label = WorkloadLabel::decode(workload);
        Some(TableRow {
            chunk_size,
            rayon_threads,
            workload: workload.to_string(),
            blocks: label.blocks,
            depth: label.depth,
            real,
            user,
            sys,
            stddev_real,
        })
    }
}

/// Parse a whole markdown report into flat rows.
pub fn parse_report(input: &str) -> Vec<TableRow> {
    let mut parser = ReportParser::new();
    input
        .lines()
        .filter_map(|line| parser.feed_line(line))
        .collect()
}

fn parse_row_numbers(
    real: &str,
    user: &str,
    sys: &str,
    stddev: Option<&str>,
) -> ParseResult<(f64, f64, f64, f64)> {
    Ok((
        normalize::parse_float(real)?,
        normalize::parse_float(user)?,
        normalize::parse_float(sys)?,
        normalize::parse_stddev_cell(stddev)?,
    ))
}

/// Match a whole-line `<key>: <integer>` declaration. The key is compared
/// case-insensitively; the integer may use `_` digit-group separators.
fn declaration_value(line: &str, key: &str) -> Option<u64> {
    if line.len() <= key.len()
        || !line.as_bytes()[..key.len()].eq_ignore_ascii_case(key.as_bytes())
        || line.as_bytes()[key.len()] != b':'
    {
        return None;
    }
    let value = line[key.len() + 1..].trim();
    if value.is_empty()
        || !value.bytes().all(|b| b.is_ascii_digit() || b == b'_')
        || !value.bytes().any(|b| b.is_ascii_digit())
    {
        return None;
    }
    value.replace('_', "").parse::<u64>().ok()
}

/// A markdown separator row: every cell non-empty and built solely from
/// dash/colon characters.
fn is_separator_row(cells: &[&str]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|cell| !cell.is_empty() && cell.bytes().all(|b| b == b'-' || b == b':'))
}
