//! Configuration management for the CV analyzer

use crate::error::{CvAnalyzerError, Result};
use crate::llm::advisor::CompletionParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    pub output: OutputConfig,
}

/// Chat completion endpoint and sampling settings. The API key itself stays
/// in the environment; only the variable name is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key_env: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
                model: "gpt-4o-mini".to_string(),
                api_key_env: "OPENAI_API_KEY".to_string(),
                max_tokens: 1024,
                temperature: 0.7,
                top_p: 0.95,
                timeout_secs: 30,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| CvAnalyzerError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CvAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("cv-analyzer")
            .join("config.toml")
    }

    pub fn completion_params(&self) -> CompletionParams {
        CompletionParams {
            max_tokens: self.llm.max_tokens,
            temperature: self.llm.temperature,
            top_p: self.llm.top_p,
            timeout: Duration::from_secs(self.llm.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.llm.max_tokens, 1024);
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.llm.top_p, 0.95);
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.llm.endpoint, config.llm.endpoint);
        assert_eq!(parsed.llm.model, config.llm.model);
    }
}
