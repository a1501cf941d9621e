//! Application bootstrap: config resolution and one-time provider construction.

use std::path::{Path, PathBuf};

use sentinel_llm::any::AnyProvider;
use sentinel_llm::http::build_client;
use sentinel_llm::ollama::{GenerationParams, OllamaProvider};
use sentinel_llm::openai::OpenAiProvider;

use crate::config::{Config, ProviderKind};
use crate::error::ConfigError;
use crate::export::FileExporter;
use crate::generator::ReportGenerator;
use crate::prompt::PromptLoader;
use crate::reporter::ProgressReporter;
use crate::secret::ApiKeySource;
use crate::subscriptions::SubscriptionManager;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

pub struct AppBuilder {
    config: Config,
    config_path: PathBuf,
    provider_kind: ProviderKind,
}

impl AppBuilder {
    /// Load config, take the API key from the environment, and check the provider selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or names an unsupported provider.
    pub fn from_path(config_path: PathBuf) -> anyhow::Result<Self> {
        Self::with_key_source(config_path, &ApiKeySource::Env)
    }

    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or the provider
    /// selector is unsupported.
    pub fn with_key_source(config_path: PathBuf, keys: &ApiKeySource) -> anyhow::Result<Self> {
        let mut config = Config::load(&config_path)?;
        config.resolve_secrets(keys);
        let provider_kind = config.validate()?;
        Ok(Self {
            config,
            config_path,
            provider_kind,
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    #[must_use]
    pub fn provider_kind(&self) -> ProviderKind {
        self.provider_kind
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if the selected provider cannot be constructed.
    pub fn build_generator(&self) -> Result<ReportGenerator, ConfigError> {
        ReportGenerator::from_config(&self.config)
    }

    #[must_use]
    pub fn build_subscriptions(&self) -> SubscriptionManager {
        SubscriptionManager::new(&self.config.report.subscriptions_file)
    }

    /// Wire exporter, prompt, and generator into the end-to-end report pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be constructed or a prompt
    /// override file exists but cannot be read.
    pub async fn build_reporter(&self) -> anyhow::Result<ProgressReporter<FileExporter>> {
        let generator = self.build_generator()?;
        let prompts = PromptLoader::new(self.config.report.prompts_dir.as_ref().map(PathBuf::from));
        let system_prompt = prompts.system_prompt(self.provider_kind).await?;
        let exporter = FileExporter::new(&self.config.report.export_dir);
        Ok(ProgressReporter::new(exporter, generator, system_prompt))
    }
}

/// `--config` flag, then `SENTINEL_CONFIG`, then the default path.
#[must_use]
pub fn resolve_config_path(cli: Option<&Path>) -> PathBuf {
    if let Some(path) = cli {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var("SENTINEL_CONFIG") {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_CONFIG_PATH)
}

/// Build the single adapter named by the configuration.
///
/// Runs once per process; the returned provider is shared by every report.
///
/// # Errors
///
/// Returns [`ConfigError`] if the provider selector is unsupported, the cloud
/// API key is missing, the local endpoint is not an http(s) URL, or the HTTP
/// client cannot be built.
pub fn create_provider(config: &Config) -> Result<AnyProvider, ConfigError> {
    let kind = config.llm.provider_kind()?;
    let client = build_client(config.timeouts.llm_timeout()).map_err(ConfigError::HttpClient)?;

    match kind {
        ProviderKind::Cloud => {
            let openai = &config.llm.openai;
            let api_key = config
                .secrets
                .openai_api_key
                .as_ref()
                .ok_or(ConfigError::MissingApiKey { provider: "openai" })?;
            check_endpoint("openai", &openai.base_url)?;
            Ok(AnyProvider::OpenAi(OpenAiProvider::new(
                client,
                api_key.expose().to_owned(),
                openai.base_url.clone(),
                openai.model.clone(),
            )))
        }
        ProviderKind::Local => {
            let ollama = &config.llm.ollama;
            check_endpoint("ollama", &ollama.api_url)?;
            Ok(AnyProvider::Ollama(
                OllamaProvider::new(client, ollama.api_url.clone(), ollama.model.clone())
                    .with_params(GenerationParams {
                        max_tokens: ollama.max_tokens,
                        temperature: ollama.temperature,
                    }),
            ))
        }
    }
}

fn check_endpoint(provider: &'static str, raw: &str) -> Result<(), ConfigError> {
    let invalid = |detail: String| ConfigError::InvalidEndpoint {
        provider,
        url: raw.to_owned(),
        detail,
    };
    let url = url::Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}
