/// Why an outbound provider call did not produce a usable completion.
#[derive(Debug, thiserror::Error)]
pub enum CallFailure {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("JSON parse failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("completion contained no content")]
    EmptyCompletion,

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Transport failure, non-success status, or an unusable payload from the
    /// backend. The backend is either unreachable or refused the request.
    #[error("{provider} call failed: {source}")]
    ProviderCall {
        provider: &'static str,
        #[source]
        source: CallFailure,
    },

    /// The backend answered successfully but the body does not have the
    /// shape this adapter expects.
    #[error("malformed response from {provider}: {detail}")]
    MalformedResponse {
        provider: &'static str,
        detail: String,
    },
}

/// Coarse classification of [`LlmError`] for callers that only need to branch
/// on the remediation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ProviderCall,
    MalformedResponse,
}

impl LlmError {
    pub(crate) fn call(provider: &'static str, source: impl Into<CallFailure>) -> Self {
        Self::ProviderCall {
            provider,
            source: source.into(),
        }
    }

    pub(crate) fn malformed(provider: &'static str, detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider,
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ProviderCall { .. } => ErrorKind::ProviderCall,
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
        }
    }

    #[must_use]
    pub fn provider(&self) -> &'static str {
        match self {
            Self::ProviderCall { provider, .. } | Self::MalformedResponse { provider, .. } => {
                provider
            }
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::ProviderCall {
                source: CallFailure::Http(e),
                ..
            } if e.is_timeout()
        )
    }
}

pub type Result<T> = std::result::Result<T, LlmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_distinguishes_variants() {
        let call = LlmError::call("ollama", CallFailure::Other("refused".into()));
        let malformed = LlmError::malformed("ollama", "missing message.content");
        assert_eq!(call.kind(), ErrorKind::ProviderCall);
        assert_eq!(malformed.kind(), ErrorKind::MalformedResponse);
        assert_ne!(call.kind(), malformed.kind());
    }

    #[test]
    fn display_names_provider_and_cause() {
        let err = LlmError::call(
            "openai",
            CallFailure::Status {
                status: reqwest::StatusCode::UNAUTHORIZED,
                body: "bad key".into(),
            },
        );
        let text = err.to_string();
        assert!(text.contains("openai"));
        assert!(text.contains("401"));
    }

    #[test]
    fn source_chain_exposes_call_failure() {
        use std::error::Error as _;

        let err = LlmError::call("openai", CallFailure::EmptyCompletion);
        let source = err.source().expect("provider call errors carry a source");
        assert_eq!(source.to_string(), "completion contained no content");
    }

    #[test]
    fn provider_accessor() {
        assert_eq!(LlmError::malformed("ollama", "x").provider(), "ollama");
    }

    #[test]
    fn non_http_failure_is_not_timeout() {
        assert!(!LlmError::call("ollama", CallFailure::EmptyCompletion).is_timeout());
    }
}
