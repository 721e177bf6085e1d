// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Summary statistics over extracted benchmark values.
//!
//! Means are arithmetic; the standard deviation is the sample form
//! (n-1 denominator), which estimates population variance from the small
//! run counts a benchmark log actually contains.

use serde::{Deserialize, Serialize};

use crate::logparse::BenchmarkSection;

/// Arithmetic mean. NaN over an empty slice: a section with no runs has no
/// defined mean, and NaN survives two-decimal formatting visibly.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 denominator). Exactly 0.0 for fewer than
/// two data points.
pub fn sample_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values
        .iter()
        .map(|&v| {
            let diff = v - m;
            diff * diff
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Aggregated statistics for one benchmark section.
///
/// Only the `real` series keeps a standard deviation; `user`/`sys`
/// deviations are not computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AggregatedStats {
    pub real_mean: f64,
    pub user_mean: f64,
    pub sys_mean: f64,
    pub real_stddev: f64,
}

impl AggregatedStats {
    /// Compute statistics over a section's warm-up-adjusted runs.
    pub fn from_section(section: &BenchmarkSection) -> Self {
        let runs = section.measured_runs();
        let reals: Vec<f64> = runs.iter().map(|r| r.real).collect();
        let users: Vec<f64> = runs.iter().map(|r| r.user).collect();
        let syss: Vec<f64> = runs.iter().map(|r| r.sys).collect();

        Self {
            real_mean: mean(&reals),
            user_mean: mean(&users),
            sys_mean: mean(&syss),
            real_stddev: sample_stddev(&reals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logparse::BenchmarkRun;

    fn run(real: f64) -> BenchmarkRun {
        BenchmarkRun {
            real,
            user: real / 2.0,
            sys: real / 4.0,
        }
    }

    #[test]
    fn test_mean_known_dataset() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_sample_stddev_known_dataset() {
        // Sample (n-1) form: [1, 2, 3] has variance 1, not 2/3.
        assert!((sample_stddev(&[1.0, 2.0, 3.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_stddev_single_point_is_zero() {
        assert_eq!(sample_stddev(&[5.0]), 0.0);
        assert_eq!(sample_stddev(&[]), 0.0);
    }

    #[test]
    fn test_from_section() {
        let section = BenchmarkSection {
            label: "40K blocks, 2 depth".to_string(),
            runs: vec![run(1.0), run(2.0), run(3.0)],
        };
        let stats = AggregatedStats::from_section(&section);
        assert_eq!(stats.real_mean, 2.0);
        assert_eq!(stats.user_mean, 1.0);
        assert_eq!(stats.sys_mean, 0.5);
        assert!((stats.real_stddev - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_section_applies_warmup_exclusion() {
        let section = BenchmarkSection {
            label: "10K blocks".to_string(),
            runs: vec![run(9.0), run(1.0), run(2.0)],
        };
        let stats = AggregatedStats::from_section(&section);
        assert_eq!(stats.real_mean, 1.5);
    }

    #[test]
    fn test_from_empty_section() {
        let section = BenchmarkSection {
            label: "40K blocks".to_string(),
            runs: Vec::new(),
        };
        let stats = AggregatedStats::from_section(&section);
        assert!(stats.real_mean.is_nan());
        assert!(stats.user_mean.is_nan());
        assert!(stats.sys_mean.is_nan());
        assert_eq!(stats.real_stddev, 0.0);
    }
}
