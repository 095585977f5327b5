//! Integration tests for the analysis engine

use async_trait::async_trait;
use cv_analyzer::error::{CvAnalyzerError, Result};
use cv_analyzer::llm::advisor::{CompletionParams, LlmAdvisor};
use cv_analyzer::llm::client::ChatCompletionClient;
use cv_analyzer::{AnalysisEngine, Locale};
use std::sync::Arc;

enum MockBehavior {
    Respond(&'static str),
    FailNetwork(&'static str),
    FailAuth(&'static str),
}

struct MockChatClient {
    behavior: MockBehavior,
}

#[async_trait]
impl ChatCompletionClient for MockChatClient {
    async fn complete(&self, _: &str, _: u32, _: f32, _: f32) -> Result<String> {
        match &self.behavior {
            MockBehavior::Respond(text) => Ok(text.to_string()),
            MockBehavior::FailNetwork(msg) => Err(CvAnalyzerError::Network(msg.to_string())),
            MockBehavior::FailAuth(msg) => Err(CvAnalyzerError::Auth(msg.to_string())),
        }
    }
}

fn engine_with(behavior: MockBehavior) -> AnalysisEngine {
    let advisor = LlmAdvisor::new(
        Arc::new(MockChatClient { behavior }),
        CompletionParams::default(),
    );
    AnalysisEngine::with_advisor(advisor)
}

#[tokio::test]
async fn test_scenario_react_sql_azure() {
    let engine = AnalysisEngine::new();
    let report = engine
        .analyze(
            "Frontend developer. Built dashboards with React and reporting with SQL.",
            "Looking for a React and SQL developer with Azure experience",
            Locale::En,
        )
        .await
        .unwrap();

    // target in catalog order: SQL, Azure, React
    assert_eq!(report.found_keywords, vec!["SQL", "React"]);
    assert_eq!(report.missing_keywords, vec!["Azure"]);
    assert_eq!(report.ats_score, 67.0);
    assert_eq!(report.positive_feedback.len(), 1);
    assert!(report.suggestions.is_empty());
}

#[tokio::test]
async fn test_scenario_fallback_keywords() {
    let engine = AnalysisEngine::new();
    let report = engine
        .analyze("Five years of C# and .NET development.", "", Locale::En)
        .await
        .unwrap();

    assert_eq!(report.found_keywords, vec!["C#", ".NET"]);
    assert_eq!(report.missing_keywords, vec!["React", "SQL", "Azure"]);
    assert_eq!(report.ats_score, 40.0);
    // score below 50: one suggestion listing the missing keywords
    assert_eq!(report.suggestions.len(), 1);
    assert!(report.suggestions[0].contains("React, SQL, Azure"));
    assert!(report.positive_feedback.is_empty());
}

#[tokio::test]
async fn test_word_boundary_end_to_end() {
    let engine = AnalysisEngine::new();
    let report = engine
        .analyze("Java expert with ten years of experience.", "We need JavaScript", Locale::En)
        .await
        .unwrap();

    assert_eq!(report.missing_keywords, vec!["JavaScript"]);
    assert!(report.found_keywords.is_empty());
    assert_eq!(report.ats_score, 0.0);
}

#[tokio::test]
async fn test_empty_cv_yields_minimal_report() {
    for locale in Locale::ALL {
        let engine = engine_with(MockBehavior::Respond("Score: 90\n- unused"));
        let report = engine.analyze("   ", "React developer", locale).await.unwrap();

        assert_eq!(report.suggestions, vec![locale.messages().empty_cv]);
        assert!(report.found_keywords.is_empty());
        assert!(report.missing_keywords.is_empty());
        assert!(report.extra_advice.is_empty());
        assert!(report.ats_improvement_tips.is_empty());
        assert_eq!(report.ats_score, 0.0);
    }
}

#[tokio::test]
async fn test_model_advice_merged_into_report() {
    let engine = engine_with(MockBehavior::Respond(
        "Score: 85\n- Add Azure certifications\n- Quantify project outcomes\n- Expand the skills section\n- Shorten the summary\n- List deployment experience",
    ));
    let report = engine
        .analyze(
            "React and SQL developer.",
            "Looking for a React and SQL developer with Azure experience",
            Locale::En,
        )
        .await
        .unwrap();

    // model score is authoritative when the call succeeds
    assert_eq!(report.ats_score, 85.0);
    assert_eq!(report.extra_advice.len(), 5);
    assert_eq!(report.extra_advice[0], "Add Azure certifications");
    // deterministic path still contributes feedback and keyword sets
    assert_eq!(report.found_keywords, vec!["SQL", "React"]);
    assert_eq!(report.positive_feedback.len(), 1);
    // suggestions end with the model bullets
    assert!(report.suggestions.ends_with(&report.extra_advice.clone()));
}

#[tokio::test]
async fn test_model_failure_degrades_gracefully() {
    let engine = engine_with(MockBehavior::FailNetwork("connection refused"));
    let report = engine
        .analyze(
            "React and SQL developer with Azure experience.",
            "Looking for a React and SQL developer with Azure experience",
            Locale::En,
        )
        .await
        .unwrap();

    assert_eq!(report.ats_score, 0.0);
    // deterministic score was 100, so the failure entry is the only suggestion
    assert_eq!(report.suggestions.len(), 1);
    assert!(report.suggestions[0].contains("connection refused"));
    assert!(report.extra_advice.is_empty());
    // keyword analysis is unaffected
    assert_eq!(report.found_keywords, vec!["SQL", "Azure", "React"]);
}

#[tokio::test]
async fn test_auth_failure_uses_locale_message() {
    let engine = engine_with(MockBehavior::FailAuth("invalid key"));
    let report = engine
        .analyze("C# developer", "C# role", Locale::Tr)
        .await
        .unwrap();

    assert_eq!(report.ats_score, 0.0);
    let failure_entries: Vec<_> = report
        .suggestions
        .iter()
        .filter(|s| s.contains("invalid key"))
        .collect();
    assert_eq!(failure_entries.len(), 1);
    assert!(failure_entries[0].starts_with("Yapay zeka"));
}

#[tokio::test]
async fn test_parse_anomaly_is_not_an_error() {
    let engine = engine_with(MockBehavior::Respond("I cannot evaluate this resume."));
    let report = engine
        .analyze("React developer", "React role", Locale::En)
        .await
        .unwrap();

    // call succeeded but carried no score line or bullets
    assert_eq!(report.ats_score, 0.0);
    assert!(report.extra_advice.is_empty());
    // no failure-explanation entry is added for a parse anomaly
    assert!(report.suggestions.is_empty());
}

#[tokio::test]
async fn test_found_and_missing_partition_invariant() {
    let engine = AnalysisEngine::new();
    let report = engine
        .analyze(
            "Docker, Python and Git daily. Some AWS.",
            "Python, Docker, Kubernetes, AWS, Git and Terraform",
            Locale::En,
        )
        .await
        .unwrap();

    let target = ["Python", "AWS", "Docker", "Kubernetes", "Terraform", "Git"];
    let mut combined: Vec<String> = Vec::new();
    let mut found_iter = report.found_keywords.iter().peekable();
    let mut missing_iter = report.missing_keywords.iter().peekable();
    // merge preserving catalog order
    for keyword in target {
        if found_iter.peek().map(|k| k.as_str()) == Some(keyword) {
            combined.push(found_iter.next().unwrap().clone());
        } else if missing_iter.peek().map(|k| k.as_str()) == Some(keyword) {
            combined.push(missing_iter.next().unwrap().clone());
        }
    }
    assert_eq!(combined.len(), target.len());
    for keyword in &report.found_keywords {
        assert!(!report.missing_keywords.contains(keyword));
    }
    assert!((0.0..=100.0).contains(&report.ats_score));
}

#[tokio::test]
async fn test_turkish_report_strings() {
    let engine = AnalysisEngine::new();
    let report = engine
        .analyze("Sadece Excel biliyorum.", "", Locale::Tr)
        .await
        .unwrap();

    // fallback target, nothing found, score 0
    assert_eq!(report.ats_score, 0.0);
    assert_eq!(report.suggestions.len(), 1);
    assert!(report.suggestions[0].contains("C#, .NET, React, SQL, Azure"));
    assert_eq!(report.ats_improvement_tips.len(), 10);
    assert!(report.ats_improvement_tips[0].contains("anahtar kelimeleri"));
}
