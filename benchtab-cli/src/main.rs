// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! benchtab CLI
//!
//! Command-line interface for the benchtab report tooling. The commands
//! are thin wrappers: file reading, core pipeline, output writing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// benchtab - benchmark log and report tabulation
#[derive(Parser, Debug)]
#[command(name = "benchtab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a raw benchmark log as a markdown table on stdout
    Fmt {
        /// Path to the benchmark log
        #[arg(default_value = "bench/results.txt")]
        log: PathBuf,
    },

    /// Convert a markdown benchmark report to CSV
    Export {
        /// Path to the input markdown report
        input: PathBuf,

        /// Path to the output CSV file
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match cli.command {
        Commands::Fmt { log } => commands::fmt::execute(&log),
        Commands::Export { input, output } => commands::export::execute(&input, &output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_requires_both_paths() {
        let err = Cli::try_parse_from(["benchtab", "export", "only-input.md"]).unwrap_err();
        assert!(err.to_string().contains("Usage"));
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_fmt_log_path_defaults() {
        let cli = Cli::try_parse_from(["benchtab", "fmt"]).unwrap();
        match cli.command {
            Commands::Fmt { log } => assert_eq!(log, PathBuf::from("bench/results.txt")),
            _ => panic!("expected fmt command"),
        }
    }
}
