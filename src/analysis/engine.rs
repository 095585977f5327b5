//! Analysis orchestration: the public `analyze` entry point

use crate::analysis::advice::compose_advice;
use crate::analysis::extractor::extract_target_keywords;
use crate::analysis::matcher::partition_keywords;
use crate::analysis::scoring;
use crate::error::Result;
use crate::llm::advisor::LlmAdvisor;
use crate::locale::Locale;
use crate::report::AnalysisReport;
use log::{debug, info, warn};

/// Runs the deterministic pipeline and, when an advisor is configured, the
/// model path, and assembles both into one report.
///
/// Total over its declared failure modes: blank input and every model-path
/// failure terminate in a returnable report, never in an error to the
/// caller. Each call is independent; nothing is cached or shared.
pub struct AnalysisEngine {
    advisor: Option<LlmAdvisor>,
}

impl AnalysisEngine {
    /// Engine without a model path; the rule-based score is authoritative.
    pub fn new() -> Self {
        Self { advisor: None }
    }

    /// Engine with a model path; the model score is authoritative.
    pub fn with_advisor(advisor: LlmAdvisor) -> Self {
        Self {
            advisor: Some(advisor),
        }
    }

    pub async fn analyze(
        &self,
        cv_text: &str,
        job_description: &str,
        locale: Locale,
    ) -> Result<AnalysisReport> {
        if cv_text.trim().is_empty() {
            info!("blank CV text, returning minimal report");
            return Ok(AnalysisReport::empty_cv(cv_text, locale));
        }

        let targets = extract_target_keywords(job_description)?;
        let partition = partition_keywords(cv_text, &targets)?;
        let rule_based_score = scoring::rule_based_score(partition.found.len(), targets.len());
        debug!(
            "rule-based score {} ({}/{} keywords found)",
            rule_based_score,
            partition.found.len(),
            targets.len()
        );

        let advice = compose_advice(rule_based_score, &partition.missing, locale);

        let model_outcome = match &self.advisor {
            Some(advisor) => {
                let outcome = advisor.advise(cv_text, job_description, locale).await;
                if let Err(e) = &outcome {
                    warn!("model advice unavailable: {}", e);
                }
                Some(outcome)
            }
            None => None,
        };

        Ok(AnalysisReport::assemble(
            cv_text,
            rule_based_score,
            partition,
            advice,
            model_outcome,
            locale,
        ))
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_cv_short_circuits() {
        let engine = AnalysisEngine::new();
        let report = engine.analyze("   \n", "React developer", Locale::En).await.unwrap();
        assert_eq!(report.suggestions, vec![Locale::En.messages().empty_cv]);
        assert!(report.found_keywords.is_empty());
        assert!(report.missing_keywords.is_empty());
        assert_eq!(report.ats_score, 0.0);
    }

    #[tokio::test]
    async fn test_found_and_missing_partition_target_set() {
        let engine = AnalysisEngine::new();
        let report = engine
            .analyze(
                "Docker and Kubernetes in production",
                "Docker, Kubernetes and Terraform required",
                Locale::En,
            )
            .await
            .unwrap();

        let mut combined = report.found_keywords.clone();
        combined.extend(report.missing_keywords.clone());
        assert_eq!(combined, vec!["Docker", "Kubernetes", "Terraform"]);
        for keyword in &report.found_keywords {
            assert!(!report.missing_keywords.contains(keyword));
        }
        assert_eq!(report.ats_score, 67.0);
    }
}
