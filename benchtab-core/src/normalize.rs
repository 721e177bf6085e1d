// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Numeric text normalization and workload label decoding.
//!
//! Report tables are pasted from terminals, spreadsheets, and chat clients,
//! so numeric cells arrive with non-breaking spaces, thousands separators,
//! and compatibility codepoints (fullwidth digits). Everything
//! locale/Unicode-sensitive is isolated here so it can be tested against
//! those edge cases directly.

use unicode_normalization::UnicodeNormalization;

use crate::error::{ParseError, ParseResult};

/// Fold text to NFKC and replace non-breaking spaces with ordinary ones.
/// Applied to whole report lines before any pattern matching.
pub fn normalize_text(text: &str) -> String {
    let composed: String = text.nfkc().collect();
    composed.replace('\u{00A0}', " ")
}

/// Canonicalize numeric text: NFKC normalization, non-breaking spaces to
/// ordinary spaces, surrounding whitespace trimmed, thousands-separator
/// commas removed.
pub fn normalize_numeric(text: &str) -> String {
    normalize_text(text).trim().replace(',', "")
}

/// Parse numeric text after normalization.
pub fn parse_float(text: &str) -> ParseResult<f64> {
    normalize_numeric(text)
        .parse::<f64>()
        .map_err(|_| ParseError::Number {
            text: text.to_string(),
        })
}

/// Parse a std-dev cell, mapping the missing-value sentinels to 0.0.
///
/// An absent column, an empty cell, and the literal text `nan` (any case)
/// all mean "no deviation recorded". Anything else must parse as a float;
/// callers drop the row on error.
pub fn parse_stddev_cell(cell: Option<&str>) -> ParseResult<f64> {
    let Some(raw) = cell else {
        return Ok(0.0);
    };
    let cleaned = normalize_numeric(raw);
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("nan") {
        return Ok(0.0);
    }
    cleaned.parse::<f64>().map_err(|_| ParseError::Number {
        text: raw.to_string(),
    })
}

/// Structured quantities decoded from a workload label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadLabel {
    /// Block count from a `<digits>K blocks` pattern, scaled by 1000.
    /// `None` when the pattern is absent or the count overflows.
    pub blocks: Option<u64>,
    /// Traversal depth from a `<digits> depth` pattern; 1 when absent.
    pub depth: u32,
}

impl WorkloadLabel {
    /// Decode a label such as `"40K blocks, 2 depth"` or `"10K blocks"`.
    /// Both patterns are matched case-insensitively, anywhere in the label.
    pub fn decode(label: &str) -> Self {
        let blocks =
            number_before_keyword(label, "blocks", true).and_then(|n| n.checked_mul(1000));
        let depth = number_before_keyword(label, "depth", false)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(1);
        Self { blocks, depth }
    }
}

/// Find the first digit run followed (modulo whitespace, and a `K` scale
/// marker when `k_suffix` is set) by `keyword`, compared case-insensitively.
fn number_before_keyword(label: &str, keyword: &str, k_suffix: bool) -> Option<u64> {
    let bytes = label.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() || (i > 0 && bytes[i - 1].is_ascii_digit()) {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if k_suffix {
            if j < bytes.len() && (bytes[j] == b'k' || bytes[j] == b'K') {
                j += 1;
            } else {
                continue;
            }
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
        }
        if bytes.len() - j >= keyword.len()
            && bytes[j..j + keyword.len()].eq_ignore_ascii_case(keyword.as_bytes())
        {
            // Overflowing digit runs mean the pattern is effectively absent.
            return label[start..i].parse::<u64>().ok();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_separators_removed() {
        assert_eq!(parse_float("1,234.5").unwrap(), 1234.5);
        assert_eq!(parse_float("12,345,678").unwrap(), 12_345_678.0);
    }

    #[test]
    fn test_non_breaking_space_trimmed() {
        assert_eq!(parse_float("\u{00A0}2.50\u{00A0}").unwrap(), 2.5);
        assert_eq!(parse_float("  3.25  ").unwrap(), 3.25);
    }

    #[test]
    fn test_compatibility_codepoints_normalized() {
        // Fullwidth digits and punctuation fold to ASCII under NFKC.
        assert_eq!(parse_float("\u{FF11}\u{FF12}\u{FF13}").unwrap(), 123.0);
        assert_eq!(parse_float("1\u{FF0E}5").unwrap(), 1.5);
    }

    #[test]
    fn test_unparseable_text_is_an_error() {
        assert!(parse_float("abc").is_err());
        assert!(parse_float("").is_err());
        assert!(parse_float("1.2.3").is_err());
    }

    #[test]
    fn test_stddev_sentinels_default_to_zero() {
        assert_eq!(parse_stddev_cell(None).unwrap(), 0.0);
        assert_eq!(parse_stddev_cell(Some("")).unwrap(), 0.0);
        assert_eq!(parse_stddev_cell(Some("nan")).unwrap(), 0.0);
        assert_eq!(parse_stddev_cell(Some("NaN")).unwrap(), 0.0);
    }

    #[test]
    fn test_stddev_numeric_cell_preserved() {
        assert_eq!(parse_stddev_cell(Some("0.42")).unwrap(), 0.42);
        assert!(parse_stddev_cell(Some("garbage")).is_err());
    }

    #[test]
    fn test_label_with_blocks_and_depth() {
        let label = WorkloadLabel::decode("40K blocks, 2 depth");
        assert_eq!(label.blocks, Some(40_000));
        assert_eq!(label.depth, 2);
    }

    #[test]
    fn test_label_depth_defaults_to_one() {
        let label = WorkloadLabel::decode("10K blocks");
        assert_eq!(label.blocks, Some(10_000));
        assert_eq!(label.depth, 1);
    }

    #[test]
    fn test_label_case_insensitive() {
        let label = WorkloadLabel::decode("25k BLOCKS, 3 DEPTH");
        assert_eq!(label.blocks, Some(25_000));
        assert_eq!(label.depth, 3);
    }

    #[test]
    fn test_label_without_patterns() {
        let label = WorkloadLabel::decode("warmup pass");
        assert_eq!(label.blocks, None);
        assert_eq!(label.depth, 1);
    }

    #[test]
    fn test_label_overflowing_block_count_is_absent() {
        let label = WorkloadLabel::decode("99999999999999999999K blocks");
        assert_eq!(label.blocks, None);
    }
}
