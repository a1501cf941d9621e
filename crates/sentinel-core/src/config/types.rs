use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sentinel_llm::ollama::{DEFAULT_API_URL, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use sentinel_llm::openai::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::secret::Secret;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(skip)]
    pub secrets: ResolvedSecrets,
}

/// Report backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Hosted chat-completion API.
    Cloud,
    /// Self-hosted HTTP inference server.
    Local,
}

impl ProviderKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Local => "local",
        }
    }

    /// Backend name used for prompt files and log fields.
    #[must_use]
    pub fn backend(self) -> &'static str {
        match self {
            Self::Cloud => "openai",
            Self::Local => "ollama",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" | "cloud" => Ok(Self::Cloud),
            "ollama" | "local" => Ok(Self::Local),
            _ => Err(ConfigError::UnsupportedProvider(s.to_owned())),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LlmConfig {
    /// Raw selector; resolved into [`ProviderKind`] at startup.
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
}

fn default_provider() -> String {
    "ollama".into()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            openai: OpenAiConfig::default(),
            ollama: OllamaConfig::default(),
        }
    }
}

impl LlmConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedProvider`] if the selector names no known backend.
    pub fn provider_kind(&self) -> Result<ProviderKind, ConfigError> {
        self.provider.parse()
    }

    /// Model identifier for the given backend.
    #[must_use]
    pub fn model_for(&self, kind: ProviderKind) -> &str {
        match kind {
            ProviderKind::Cloud => &self.openai.model,
            ProviderKind::Local => &self.ollama.model,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    #[serde(default = "default_openai_model")]
    pub model: String,
}

fn default_openai_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".into()
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: default_openai_base_url(),
            model: default_openai_model(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OllamaConfig {
    #[serde(default = "default_ollama_api_url")]
    pub api_url: String,
    #[serde(default = "default_ollama_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_ollama_api_url() -> String {
    DEFAULT_API_URL.into()
}

fn default_ollama_model() -> String {
    "llama3".into()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            api_url: default_ollama_api_url(),
            model: default_ollama_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimeoutConfig {
    /// Whole-request bound for a provider call; `0` disables it.
    #[serde(default = "default_llm_timeout")]
    pub llm_seconds: u64,
}

fn default_llm_timeout() -> u64 {
    120
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            llm_seconds: default_llm_timeout(),
        }
    }
}

impl TimeoutConfig {
    #[must_use]
    pub fn llm_timeout(&self) -> Option<Duration> {
        (self.llm_seconds > 0).then(|| Duration::from_secs(self.llm_seconds))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_subscriptions_file")]
    pub subscriptions_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts_dir: Option<String>,
}

fn default_export_dir() -> String {
    "daily_progress".into()
}

fn default_subscriptions_file() -> String {
    "subscriptions.json".into()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            subscriptions_file: default_subscriptions_file(),
            prompts_dir: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ResolvedSecrets {
    pub openai_api_key: Option<Secret>,
}
