//! Gemini `generateContent` client.
//!
//! One hosted-HTTP request per chat turn, no streaming. Transcript roles map
//! to the wire's `user`/`model`; a response that parses but carries no reply
//! text is reported as `CompletionError::MissingReply` so callers treat it
//! exactly like a transport failure.

mod wire;

use async_trait::async_trait;
use lingua_core::{CompletionError, CompletionResult, CompletionService, Turn};

use wire::{GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";

/// Hosted Gemini completion client.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Client against the hosted endpoint with the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Option<Self> {
        std::env::var("GEMINI_API_KEY").ok().map(Self::new)
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the endpoint base URL. Used by tests and self-hosted proxies.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete(&self, turns: &[Turn]) -> CompletionResult<String> {
        let body = GenerateContentRequest::from_turns(turns);

        let response = self
            .http
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Transport(format!(
                "endpoint returned {}",
                status
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Malformed(e.to_string()))?;

        tracing::debug!(turns = turns.len(), "completion round trip finished");
        parsed.reply_text().ok_or(CompletionError::MissingReply)
    }
}
