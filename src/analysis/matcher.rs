//! Keyword matching with word-boundary, case-insensitive semantics
//!
//! Keywords are matched as escaped literals, never as pattern syntax. A bare
//! `\b` next to a non-word character can never match, so keyword edges that
//! are not word characters (".NET", "C#") get an explicit anchor-or-non-word
//! class instead.

use crate::error::{CvAnalyzerError, Result};
use regex::Regex;

/// Target keywords partitioned by presence in the resume text.
///
/// `found` and `missing` are disjoint and together cover the target set in
/// its original order.
#[derive(Debug, Clone, Default)]
pub struct KeywordPartition {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// Build the boundary-wrapped pattern for a literal keyword.
fn keyword_pattern(keyword: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = if keyword.chars().next().map_or(false, is_word) {
        r"\b"
    } else {
        r"(?:^|\W)"
    };
    let trail = if keyword.chars().last().map_or(false, is_word) {
        r"\b"
    } else {
        r"(?:\W|$)"
    };
    format!("(?i){}{}{}", lead, regex::escape(keyword), trail)
}

pub(crate) fn keyword_regex(keyword: &str) -> Result<Regex> {
    Regex::new(&keyword_pattern(keyword)).map_err(|e| {
        CvAnalyzerError::TextProcessing(format!("invalid pattern for keyword '{}': {}", keyword, e))
    })
}

/// Partition the target keywords into found/missing against the resume text.
pub fn partition_keywords(cv_text: &str, targets: &[String]) -> Result<KeywordPartition> {
    let mut partition = KeywordPartition::default();
    for keyword in targets {
        if keyword_regex(keyword)?.is_match(cv_text) {
            partition.found.push(keyword.clone());
        } else {
            partition.missing.push(keyword.clone());
        }
    }
    Ok(partition)
}
