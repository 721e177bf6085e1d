// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `benchtab export` command - convert a markdown report to CSV.

use std::path::Path;

use anyhow::Context as _;
use benchtab_core::{parse_report, CsvReporter};

pub fn execute(input: &Path, output: &Path) -> anyhow::Result<()> {
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        "Exporting markdown report to CSV"
    );

    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading markdown report {}", input.display()))?;
    let rows = parse_report(&text);

    let count = CsvReporter::write_file(output, &rows)
        .with_context(|| format!("writing CSV to {}", output.display()))?;

    println!("Wrote {} rows to {}", count, output.display());
    Ok(())
}
