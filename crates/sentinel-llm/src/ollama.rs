use serde::Serialize;
use serde_json::Value;

use crate::error::{CallFailure, LlmError};
use crate::provider::{LlmProvider, Message};

const PROVIDER: &str = "ollama";

pub const DEFAULT_API_URL: &str = "http://localhost:11434/api/chat";
pub const DEFAULT_MAX_TOKENS: u32 = 4000;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Generation parameters sent with every local inference request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Self-hosted inference server reached with a single non-streaming POST.
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    client: reqwest::Client,
    api_url: String,
    model: String,
    params: GenerationParams,
}

impl OllamaProvider {
    #[must_use]
    pub fn new(client: reqwest::Client, api_url: String, model: String) -> Self {
        Self {
            client,
            api_url,
            model,
            params: GenerationParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl LlmProvider for OllamaProvider {
    async fn chat(&self, messages: &[Message]) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.model,
            messages,
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            stream: false,
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::call(PROVIDER, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::call(PROVIDER, e))?;

        if !status.is_success() {
            tracing::error!(%status, body = %text, "Ollama API error");
            return Err(LlmError::call(
                PROVIDER,
                CallFailure::Status { status, body: text },
            ));
        }

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| LlmError::malformed(PROVIDER, format!("body is not JSON: {e}")))?;
        tracing::debug!(response = %value, "Ollama response received");

        extract_content(&value)
    }

    fn name(&self) -> &str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.model
    }
}

fn extract_content(value: &Value) -> Result<String, LlmError> {
    let message = value
        .get("message")
        .ok_or_else(|| LlmError::malformed(PROVIDER, "missing `message` object"))?;
    let content = message
        .get("content")
        .ok_or_else(|| LlmError::malformed(PROVIDER, "missing `message.content` field"))?;
    match content.as_str() {
        Some("") => Err(LlmError::malformed(PROVIDER, "`message.content` is empty")),
        Some(text) => Ok(text.to_owned()),
        None => Err(LlmError::malformed(
            PROVIDER,
            "`message.content` is not a string",
        )),
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    temperature: f64,
    stream: bool,
}
