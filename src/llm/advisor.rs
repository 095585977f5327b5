//! Model-derived advice: prompt, one bounded call, parse

use crate::error::{CvAnalyzerError, Result};
use crate::llm::client::ChatCompletionClient;
use crate::llm::parser::{parse_model_response, ParsedAdvice};
use crate::llm::prompts::build_prompt;
use crate::locale::Locale;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

/// Sampling and budget parameters for the advice call.
#[derive(Debug, Clone)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub timeout: Duration,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: 0.7,
            top_p: 0.95,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Produces a model score and suggestion bullets for a resume/job pair.
///
/// One attempt, no retry. A timeout is reported like any other call failure;
/// the engine absorbs all failures into the report.
pub struct LlmAdvisor {
    client: Arc<dyn ChatCompletionClient>,
    params: CompletionParams,
}

impl LlmAdvisor {
    pub fn new(client: Arc<dyn ChatCompletionClient>, params: CompletionParams) -> Self {
        Self { client, params }
    }

    pub async fn advise(
        &self,
        cv_text: &str,
        job_description: &str,
        locale: Locale,
    ) -> Result<ParsedAdvice> {
        let prompt = build_prompt(locale, cv_text, job_description);
        debug!("requesting model advice ({} prompt chars)", prompt.len());

        let response = tokio::time::timeout(
            self.params.timeout,
            self.client.complete(
                &prompt,
                self.params.max_tokens,
                self.params.temperature,
                self.params.top_p,
            ),
        )
        .await
        .map_err(|_| CvAnalyzerError::Timeout(self.params.timeout.as_secs()))??;

        let advice = parse_model_response(&response, locale.messages().score_label);
        if advice.suggestions.is_empty() {
            debug!("model response contained no bullet suggestions");
        }
        Ok(advice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticClient(String);

    #[async_trait]
    impl ChatCompletionClient for StaticClient {
        async fn complete(&self, _: &str, _: u32, _: f32, _: f32) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct SlowClient;

    #[async_trait]
    impl ChatCompletionClient for SlowClient {
        async fn complete(&self, _: &str, _: u32, _: f32, _: f32) -> Result<String> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(String::new())
        }
    }

    #[tokio::test]
    async fn test_advise_parses_locale_label() {
        let advisor = LlmAdvisor::new(
            Arc::new(StaticClient("Puan: 55\n- bir\n- iki".to_string())),
            CompletionParams::default(),
        );
        let advice = advisor.advise("cv", "job", Locale::Tr).await.unwrap();
        assert_eq!(advice.score, 55);
        assert_eq!(advice.suggestions.len(), 2);
    }

    #[tokio::test]
    async fn test_timeout_is_reported_as_error() {
        let params = CompletionParams {
            timeout: Duration::from_millis(10),
            ..CompletionParams::default()
        };
        let advisor = LlmAdvisor::new(Arc::new(SlowClient), params);
        let result = advisor.advise("cv", "job", Locale::En).await;
        assert!(matches!(result, Err(CvAnalyzerError::Timeout(_))));
    }

    #[test]
    fn test_default_params() {
        let params = CompletionParams::default();
        assert_eq!(params.max_tokens, 1024);
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.top_p, 0.95);
        assert_eq!(params.timeout, Duration::from_secs(30));
    }
}
