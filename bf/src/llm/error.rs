//! LLM error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during LLM operations
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("AI backend is not configured")]
    Unavailable,

    #[error("Unknown LLM provider: '{0}'. Supported: none, anthropic, openai")]
    UnknownProvider(String),

    #[error("{0}")]
    MissingApiKey(String),

    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Check if the error comes from setup rather than a request
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LlmError::Unavailable | LlmError::UnknownProvider(_) | LlmError::MissingApiKey(_)
        )
    }
}
