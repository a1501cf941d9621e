//! OpenAI API key resolution.

use std::fmt;

/// Environment variables checked for the OpenAI key, highest priority first.
pub const OPENAI_KEY_VARS: [&str; 2] = ["SENTINEL_OPENAI_API_KEY", "OPENAI_API_KEY"];

/// String whose Debug and Display output never reveal the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Where the cloud backend's API key comes from.
#[derive(Debug, Clone, Default)]
pub enum ApiKeySource {
    /// [`OPENAI_KEY_VARS`] in the process environment.
    #[default]
    Env,
    /// A key supplied by the caller, bypassing the environment.
    Explicit(Secret),
    /// No key; only the local backend can be built.
    Absent,
}

impl ApiKeySource {
    #[must_use]
    pub fn resolve(&self) -> Option<Secret> {
        match self {
            Self::Env => lookup_api_key(|var| std::env::var(var).ok()),
            Self::Explicit(key) => Some(key.clone()),
            Self::Absent => None,
        }
    }
}

/// First non-blank value among [`OPENAI_KEY_VARS`] according to `get`.
pub fn lookup_api_key(get: impl Fn(&str) -> Option<String>) -> Option<Secret> {
    OPENAI_KEY_VARS.iter().find_map(|var| {
        let value = get(var)?;
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        tracing::debug!(source = var, "OpenAI API key resolved");
        Some(Secret::new(value))
    })
}
