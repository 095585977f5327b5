//! The analysis report and its assembler

use crate::analysis::advice::{improvement_tips, DeterministicAdvice};
use crate::analysis::matcher::KeywordPartition;
use crate::error::Result;
use crate::llm::parser::ParsedAdvice;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// Full compatibility report returned to the caller.
///
/// Serialized camelCase, matching the wire shape consumers expect.
/// `content_score` is reserved and never computed. `found_keywords` and
/// `missing_keywords` partition the target keyword set in catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub extracted_cv_text: String,
    pub ats_score: f64,
    pub content_score: f64,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub positive_feedback: Vec<String>,
    pub suggestions: Vec<String>,
    pub extra_advice: Vec<String>,
    pub ats_improvement_tips: Vec<String>,
}

impl AnalysisReport {
    /// Minimal report for blank resume text: the locale's "no text"
    /// suggestion and otherwise default/empty fields.
    pub fn empty_cv(cv_text: &str, locale: Locale) -> Self {
        Self {
            extracted_cv_text: cv_text.to_string(),
            suggestions: vec![locale.messages().empty_cv.to_string()],
            ..Self::default()
        }
    }

    /// Pure merge of the deterministic and model paths.
    ///
    /// Score policy: when the model path ran, its parsed score is
    /// authoritative — 0 on call failure or parse anomaly; when no model
    /// path was configured, the rule-based score is. Suggestions are the
    /// deterministic ones followed by the model bullets, no dedup;
    /// `extra_advice` carries the model bullets alone.
    pub fn assemble(
        cv_text: &str,
        rule_based_score: f64,
        partition: KeywordPartition,
        advice: DeterministicAdvice,
        model_outcome: Option<Result<ParsedAdvice>>,
        locale: Locale,
    ) -> Self {
        let mut suggestions = advice.suggestions;
        let mut extra_advice = Vec::new();

        let ats_score = match model_outcome {
            None => rule_based_score,
            Some(Ok(parsed)) => {
                extra_advice = parsed.suggestions;
                suggestions.extend(extra_advice.iter().cloned());
                f64::from(parsed.score)
            }
            Some(Err(e)) => {
                suggestions.push(
                    locale
                        .messages()
                        .model_failure
                        .replace("{error}", &e.to_string()),
                );
                0.0
            }
        };

        Self {
            extracted_cv_text: cv_text.to_string(),
            ats_score,
            content_score: 0.0,
            found_keywords: partition.found,
            missing_keywords: partition.missing,
            positive_feedback: advice.positive_feedback,
            suggestions,
            extra_advice,
            ats_improvement_tips: improvement_tips(locale),
        }
    }
}
