use std::path::PathBuf;

use sentinel_llm::LlmError;

/// Startup failures that make the report generator impossible to construct.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported LLM provider `{0}` (expected one of: openai, ollama)")]
    UnsupportedProvider(String),

    #[error(
        "{provider} provider requires an API key (set SENTINEL_OPENAI_API_KEY or OPENAI_API_KEY)"
    )]
    MissingApiKey { provider: &'static str },

    #[error("invalid {provider} endpoint `{url}`: {detail}")]
    InvalidEndpoint {
        provider: &'static str,
        url: String,
        detail: String,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("no activity to summarize")]
    EmptyActivity,

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("invalid project identifier `{0}` (expected owner/repo)")]
    InvalidProject(String),

    #[error("no exported activity for {project} at {}", path.display())]
    ActivityNotFound { project: String, path: PathBuf },

    #[error("invalid subscriptions file: {0}")]
    Subscriptions(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
