//! Test-only mock LLM provider.

use std::sync::{Arc, Mutex};

use crate::error::{CallFailure, ErrorKind, LlmError};
use crate::provider::{LlmProvider, Message};

#[derive(Debug, Clone)]
pub struct MockProvider {
    responses: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<Vec<Message>>>>,
    pub default_response: String,
    pub model: String,
    /// When set, every call fails with an error of this kind.
    pub fail_with: Option<ErrorKind>,
    /// Milliseconds to sleep before returning a response.
    pub delay_ms: u64,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            default_response: "mock response".into(),
            model: "mock-model".into(),
            fail_with: None,
            delay_ms: 0,
        }
    }
}

impl MockProvider {
    #[must_use]
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing(kind: ErrorKind) -> Self {
        Self {
            fail_with: Some(kind),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Number of `chat` invocations observed so far, shared across clones.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().map_or(0, |c| c.len())
    }

    /// Messages passed to each `chat` invocation, in call order.
    #[must_use]
    pub fn recorded_calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl LlmProvider for MockProvider {
    async fn chat(&self, messages: &[Message]) -> Result<String, LlmError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }
        if self.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
        }
        match self.fail_with {
            Some(ErrorKind::ProviderCall) => {
                return Err(LlmError::call(
                    "mock",
                    CallFailure::Other("mock transport failure".into()),
                ));
            }
            Some(ErrorKind::MalformedResponse) => {
                return Err(LlmError::malformed("mock", "mock response without content"));
            }
            None => {}
        }
        let mut responses = self
            .responses
            .lock()
            .map_err(|_| LlmError::call("mock", CallFailure::Other("poisoned".into())))?;
        if responses.is_empty() {
            Ok(self.default_response.clone())
        } else {
            Ok(responses.remove(0))
        }
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
