//! Text-completion capability behind `ai:` questions

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::LlmConfig;
use crate::llm::{CompletionRequest, LlmClient, LlmError, Message, create_client};

/// Something that turns a prompt into text
///
/// Chosen once at startup. [`NullBackend`] stands in when nothing is
/// configured so callers never branch on `Option`.
#[async_trait]
pub trait TextCompletionBackend: Send + Sync {
    /// Whether `complete` can succeed at all
    fn is_available(&self) -> bool;

    /// Short label for logs and the startup notice
    fn describe(&self) -> String;

    /// Request exactly one completion for `prompt`
    async fn complete(&self, prompt: &str, max_tokens: u32, temperature: f32) -> Result<String, LlmError>;
}

/// Backend used when no provider is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

#[async_trait]
impl TextCompletionBackend for NullBackend {
    fn is_available(&self) -> bool {
        false
    }

    fn describe(&self) -> String {
        "none".to_string()
    }

    async fn complete(&self, _prompt: &str, _max_tokens: u32, _temperature: f32) -> Result<String, LlmError> {
        Err(LlmError::Unavailable)
    }
}

/// Backend that forwards prompts to a hosted model
pub struct LlmBackend {
    client: Arc<dyn LlmClient>,
}

impl LlmBackend {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextCompletionBackend for LlmBackend {
    fn is_available(&self) -> bool {
        true
    }

    fn describe(&self) -> String {
        self.client.model().to_string()
    }

    async fn complete(&self, prompt: &str, max_tokens: u32, temperature: f32) -> Result<String, LlmError> {
        debug!(prompt_len = prompt.len(), %max_tokens, %temperature, "LlmBackend::complete: called");
        let request = CompletionRequest {
            system_prompt: String::new(),
            messages: vec![Message::user(prompt)],
            max_tokens,
            temperature: Some(temperature),
        };

        let response = self.client.complete(request).await?;
        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            stop_reason = ?response.stop_reason,
            "LlmBackend::complete: done"
        );
        Ok(response.content.unwrap_or_default())
    }
}

/// Pick the backend named by config
///
/// Provider "none" gives a [`NullBackend`]; any other provider must build a
/// working client or the error is returned for the caller to report.
pub fn select_backend(config: &LlmConfig) -> Result<Box<dyn TextCompletionBackend>, LlmError> {
    if !config.is_enabled() {
        debug!("select_backend: provider disabled, using NullBackend");
        return Ok(Box::new(NullBackend));
    }

    let client = create_client(config)?;
    info!(provider = %config.provider, model = %client.model(), "Generative backend ready");
    Ok(Box::new(LlmBackend::new(client)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockLlmClient;

    #[tokio::test]
    async fn test_null_backend_is_unavailable() {
        let backend = NullBackend;
        assert!(!backend.is_available());
        assert!(matches!(
            backend.complete("hi", 10, 0.7).await,
            Err(LlmError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn test_llm_backend_sends_single_user_message() {
        let client = Arc::new(MockLlmClient::replying("Sure."));
        let backend = LlmBackend::new(client.clone());

        assert!(backend.is_available());
        assert_eq!(backend.describe(), "mock-model");
        assert_eq!(backend.complete("prompt text", 150, 0.7).await.unwrap(), "Sure.");

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages, vec![Message::user("prompt text")]);
        assert_eq!(requests[0].max_tokens, 150);
        assert_eq!(requests[0].temperature, Some(0.7));
    }

    #[test]
    fn test_select_backend_disabled() {
        let backend = select_backend(&LlmConfig::default()).unwrap();
        assert!(!backend.is_available());
    }

    #[test]
    fn test_select_backend_unknown_provider() {
        let config = LlmConfig {
            provider: "llama".to_string(),
            ..Default::default()
        };
        assert!(select_backend(&config).is_err());
    }
}
