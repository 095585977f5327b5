//! Chat completion client abstraction and the OpenAI-compatible implementation

use crate::error::{CvAnalyzerError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Single-turn chat completion call. The analysis core receives an
/// implementation by injection and never reads configuration itself.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
        top_p: f32,
    ) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Client for any OpenAI-compatible `chat/completions` endpoint.
pub struct OpenAiChatClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl OpenAiChatClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatCompletionClient for OpenAiChatClient {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
        top_p: f32,
    ) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
            temperature,
            top_p,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CvAnalyzerError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CvAnalyzerError::Auth(format!(
                "chat completion rejected with status {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(CvAnalyzerError::Network(format!(
                "chat completion failed with status {}",
                status
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| CvAnalyzerError::Network(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CvAnalyzerError::Completion("no choices in chat response".to_string()))
    }
}
