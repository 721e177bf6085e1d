// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Raw benchmark log parsing.
//!
//! A log is a sequence of labeled sections:
//!
//! ```text
//! === 10K blocks, 1 depth ===
//! real 1.52
//! user 1.10
//! sys 0.08
//! ```
//!
//! Section headers are lines of the form `=== <N>K blocks[, <M> depth] ===`;
//! a line that looks like a header but whose label does not match the
//! pattern is ordinary content. Within a section, every `real`/`user`/`sys`
//! token must be followed by a numeric token; the three value lists are
//! extracted explicitly and paired positionally into runs.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};
use crate::stats::AggregatedStats;

/// Sections whose label starts with this prefix treat their first run as a
/// warm-up and exclude it from aggregation.
const WARMUP_LABEL_PREFIX: &str = "10K";

/// The common single-depth case is normalized to a depth-free label.
const SINGLE_DEPTH_SUFFIX: &str = ", 1 depth";

/// One measured execution: wall-clock, user, and system time in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRun {
    pub real: f64,
    pub user: f64,
    pub sys: f64,
}

/// A labeled group of runs sharing one workload description.
///
/// Run order is significant: the first run is the warm-up candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSection {
    pub label: String,
    pub runs: Vec<BenchmarkRun>,
}

impl BenchmarkSection {
    /// The runs that count toward aggregation: for warm-up-labeled sections
    /// the first run is excluded, otherwise all runs.
    pub fn measured_runs(&self) -> &[BenchmarkRun] {
        if self.label.starts_with(WARMUP_LABEL_PREFIX) && !self.runs.is_empty() {
            &self.runs[1..]
        } else {
            &self.runs
        }
    }
}

/// Parse a full log into its sections, in source order.
///
/// Lines before the first section header are ignored. A malformed numeric
/// token fails the whole call: skipping a single token would silently
/// desynchronize the positional pairing of the three metric lists.
pub fn parse_log(text: &str) -> ParseResult<Vec<BenchmarkSection>> {
    let mut sections = Vec::new();
    let mut current: Option<(String, MetricLists)> = None;

    for line in text.lines() {
        if let Some(label) = section_label(line) {
            if let Some((done_label, lists)) = current.take() {
                sections.push(lists.into_section(done_label));
            }
            current = Some((label, MetricLists::default()));
            continue;
        }
        if let Some((label, lists)) = current.as_mut() {
            lists.extract_line(line, label)?;
        }
    }
    if let Some((label, lists)) = current.take() {
        sections.push(lists.into_section(label));
    }

    Ok(sections)
}

/// Parse a log and aggregate each section, preserving the order sections
/// were first encountered. A repeated label replaces the earlier statistics
/// in place.
pub fn summarize(text: &str) -> ParseResult<Vec<(String, AggregatedStats)>> {
    let mut out: Vec<(String, AggregatedStats)> = Vec::new();
    for section in parse_log(text)? {
        let stats = AggregatedStats::from_section(&section);
        if let Some(entry) = out.iter_mut().find(|(label, _)| *label == section.label) {
            entry.1 = stats;
        } else {
            out.push((section.label, stats));
        }
    }
    Ok(out)
}

/// Accumulates the three metric lists for one section body.
#[derive(Debug, Default)]
struct MetricLists {
    reals: Vec<f64>,
    users: Vec<f64>,
    syss: Vec<f64>,
}

impl MetricLists {
    /// Scan one content line for `real`/`user`/`sys` tokens and append the
    /// value following each.
    fn extract_line(&mut self, line: &str, section: &str) -> ParseResult<()> {
        let mut tokens = line.split_whitespace();
        while let Some(token) = tokens.next() {
            let (metric, list) = match token {
                "real" => ("real", &mut self.reals),
                "user" => ("user", &mut self.users),
                "sys" => ("sys", &mut self.syss),
                _ => continue,
            };
            let value_token = tokens.next().unwrap_or("");
            match parse_metric_token(value_token) {
                Some(value) => list.push(value),
                None => {
                    return Err(ParseError::MalformedNumber {
                        section: section.to_string(),
                        metric,
                        token: value_token.to_string(),
                    })
                }
            }
        }
        Ok(())
    }

    /// Pair the i-th entries of the three lists into the i-th run. Unequal
    /// list lengths are truncated to the shortest.
    fn into_section(self, label: String) -> BenchmarkSection {
        let n = self.reals.len().min(self.users.len()).min(self.syss.len());
        if self.reals.len() != n || self.users.len() != n || self.syss.len() != n {
            tracing::warn!(
                section = %label,
                reals = self.reals.len(),
                users = self.users.len(),
                syss = self.syss.len(),
                "unequal metric counts, truncating to shortest list"
            );
        }
        let runs = (0..n)
            .map(|i| BenchmarkRun {
                real: self.reals[i],
                user: self.users[i],
                sys: self.syss[i],
            })
            .collect();
        BenchmarkSection { label, runs }
    }
}

/// A metric value is a bare decimal: ASCII digits and dots only, so `inf`,
/// `1e3`, and unit-suffixed tokens are malformed rather than accepted.
fn parse_metric_token(token: &str) -> Option<f64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    token.parse::<f64>().ok()
}

/// Match a section header line and return its normalized label.
fn section_label(line: &str) -> Option<String> {
    let inner = line.trim().strip_prefix("===")?.strip_suffix("===")?.trim();

    let rest = strip_leading_digits(inner)?;
    let rest = rest.strip_prefix("K blocks")?;
    if !rest.is_empty() {
        let depth = rest.strip_prefix(", ")?;
        let tail = strip_leading_digits(depth)?;
        if tail != " depth" {
            return None;
        }
    }

    let label = inner.strip_suffix(SINGLE_DEPTH_SUFFIX).unwrap_or(inner);
    Some(label.to_string())
}

fn strip_leading_digits(s: &str) -> Option<&str> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(&s[end..])
    }
}
