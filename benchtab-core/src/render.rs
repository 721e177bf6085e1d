// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Markdown table rendering for aggregated statistics.
//!
//! The column widths are literal, not computed from content: downstream
//! consumers diff these tables byte-for-byte against reports produced by
//! the legacy tooling, so the template must not reflow.

use crate::stats::AggregatedStats;

const HEADER: &str = "| Workload   | Real (s) | User (s) | Sys (s) | std dev (real) |";
const SEPARATOR: &str = "|------------|----------|----------|---------|---------|";

/// Render an ordered label -> stats mapping as a fixed-width markdown
/// table. Row order follows the input; all numerics use two decimals.
pub fn render_markdown_table(entries: &[(String, AggregatedStats)]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    for (label, stats) in entries {
        out.push_str(&format!(
            "| {:<10} | {:.2}     | {:.2}     | {:.2}    | {:.2}   |\n",
            label, stats.real_mean, stats.user_mean, stats.sys_mean, stats.real_stddev
        ));
    }
    out
}
