//! Target keyword extraction from job descriptions

use crate::analysis::catalog::{fallback_keywords, SKILL_CATALOG};
use crate::analysis::matcher::keyword_regex;
use crate::error::Result;
use log::debug;

/// Derive the target keyword set from a job description.
///
/// Returns the catalog-order subset of terms that occur in the description
/// (word-boundary, case-insensitive). A blank description, or one matching
/// no catalog term at all, yields the fixed fallback set so that scoring
/// always has a usable baseline.
pub fn extract_target_keywords(job_description: &str) -> Result<Vec<String>> {
    if job_description.trim().is_empty() {
        debug!("blank job description, using fallback keyword set");
        return Ok(fallback_keywords());
    }

    let mut targets = Vec::new();
    for keyword in SKILL_CATALOG {
        if keyword_regex(keyword)?.is_match(job_description) {
            targets.push((*keyword).to_string());
        }
    }

    if targets.is_empty() {
        debug!("no catalog terms found in job description, using fallback keyword set");
        Ok(fallback_keywords())
    } else {
        Ok(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_in_catalog_order() {
        let targets = extract_target_keywords(
            "Looking for a React and SQL developer with Azure experience",
        )
        .unwrap();
        // catalog order, not mention order
        assert_eq!(targets, vec!["SQL", "Azure", "React"]);
    }

    #[test]
    fn test_blank_description_falls_back() {
        assert_eq!(extract_target_keywords("").unwrap(), fallback_keywords());
        assert_eq!(extract_target_keywords("   \n\t").unwrap(), fallback_keywords());
    }

    #[test]
    fn test_unrecognized_description_falls_back() {
        let targets = extract_target_keywords("We need a friendly barista for weekend shifts").unwrap();
        assert_eq!(targets, fallback_keywords());
    }

    #[test]
    fn test_no_duplicates_for_repeated_mentions() {
        let targets = extract_target_keywords("Python, python and more PYTHON").unwrap();
        assert_eq!(targets, vec!["Python"]);
    }

    #[test]
    fn test_overlapping_catalog_entries_match_independently() {
        // ".NET" starts at its own boundary inside ".NET Core", so both match
        let targets = extract_target_keywords("Experience with .NET Core required").unwrap();
        assert!(targets.contains(&".NET Core".to_string()));
        assert!(targets.contains(&".NET".to_string()));

        // inside "ASP.NET" it does not
        let targets = extract_target_keywords("Experience with ASP.NET required").unwrap();
        assert!(targets.contains(&"ASP.NET".to_string()));
        assert!(!targets.contains(&".NET".to_string()));
    }

    #[test]
    fn test_java_does_not_leak_from_javascript() {
        let targets = extract_target_keywords("Senior JavaScript engineer").unwrap();
        assert_eq!(targets, vec!["JavaScript"]);
    }
}
