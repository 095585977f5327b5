//! Deterministic, locale-templated suggestions and feedback

use crate::locale::Locale;

/// Output of the deterministic advice path.
#[derive(Debug, Clone, Default)]
pub struct DeterministicAdvice {
    pub suggestions: Vec<String>,
    pub positive_feedback: Vec<String>,
}

/// Compose templated advice from the rule-based score and missing keywords.
///
/// Below 50, a single suggestion lists the missing keywords (when any);
/// at 50 or above, a single positive-feedback message is produced instead.
pub fn compose_advice(
    rule_based_score: f64,
    missing_keywords: &[String],
    locale: Locale,
) -> DeterministicAdvice {
    let msgs = locale.messages();
    let mut advice = DeterministicAdvice::default();

    if rule_based_score < 50.0 {
        if !missing_keywords.is_empty() {
            advice.suggestions.push(
                msgs.missing_keywords
                    .replace("{keywords}", &missing_keywords.join(", ")),
            );
        }
    } else {
        advice.positive_feedback.push(msgs.positive_feedback.to_string());
    }

    advice
}

/// The static, locale-selected ATS improvement tips. Pure lookup.
pub fn improvement_tips(locale: Locale) -> Vec<String> {
    locale
        .messages()
        .ats_improvement_tips
        .iter()
        .map(|tip| tip.to_string())
        .collect()
}
