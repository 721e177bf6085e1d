// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `benchtab fmt` command - summarize a raw benchmark log.

use std::path::Path;

use anyhow::Context as _;
use benchtab_core::{render_markdown_table, summarize};

pub fn execute(log: &Path) -> anyhow::Result<()> {
    tracing::info!(log = %log.display(), "Summarizing benchmark log");

    let text = std::fs::read_to_string(log)
        .with_context(|| format!("reading benchmark log {}", log.display()))?;
    let summary = summarize(&text)
        .with_context(|| format!("parsing benchmark log {}", log.display()))?;

    print!("{}", render_markdown_table(&summary));
    Ok(())
}
