//! Error handling for the CV analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Chat completion error: {0}")]
    Completion(String),

    #[error("Chat completion timed out after {0}s")]
    Timeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

pub type Result<T> = std::result::Result<T, CvAnalyzerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CvAnalyzerError {
    fn from(err: anyhow::Error) -> Self {
        CvAnalyzerError::AnalysisFailed(err.to_string())
    }
}
