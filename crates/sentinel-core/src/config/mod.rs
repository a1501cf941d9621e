mod env;
mod types;

#[cfg(test)]
mod tests;

pub use types::*;

use std::path::Path;

use anyhow::Context;

use crate::error::ConfigError;
use crate::secret::ApiKeySource;

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to sensible defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str::<Self>(&content).context("failed to parse config file")?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Fill in the OpenAI API key from `source`.
    pub fn resolve_secrets(&mut self, source: &ApiKeySource) {
        self.secrets.openai_api_key = source.resolve();
    }

    /// Check that the configured provider resolves to exactly one backend.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedProvider`] for an unknown selector.
    pub fn validate(&self) -> Result<ProviderKind, ConfigError> {
        self.llm.provider_kind()
    }
}
