use std::io::Write;

use serial_test::serial;

use super::*;
use crate::secret::{ApiKeySource, Secret};

const ENV_KEYS: [&str; 9] = [
    "SENTINEL_LLM_PROVIDER",
    "SENTINEL_OPENAI_MODEL",
    "SENTINEL_OPENAI_BASE_URL",
    "SENTINEL_OLLAMA_MODEL",
    "SENTINEL_OLLAMA_API_URL",
    "SENTINEL_TIMEOUT_LLM",
    "SENTINEL_EXPORT_DIR",
    "SENTINEL_SUBSCRIPTIONS_FILE",
    "SENTINEL_PROMPTS_DIR",
];

fn clear_env() {
    for key in ENV_KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_when_file_missing() {
    let config = Config::default();
    assert_eq!(config.llm.provider, "ollama");
    assert_eq!(config.llm.openai.model, "gpt-4o-mini");
    assert_eq!(config.llm.openai.base_url, "https://api.openai.com/v1");
    assert_eq!(config.llm.ollama.api_url, "http://localhost:11434/api/chat");
    assert_eq!(config.llm.ollama.model, "llama3");
    assert_eq!(config.llm.ollama.max_tokens, 4000);
    assert_eq!(config.timeouts.llm_seconds, 120);
    assert_eq!(config.report.export_dir, "daily_progress");
    assert_eq!(config.report.subscriptions_file, "subscriptions.json");
    assert!(config.report.prompts_dir.is_none());
    assert!(config.secrets.openai_api_key.is_none());
}

#[test]
#[serial]
fn load_missing_file_uses_defaults() {
    clear_env();
    let config = Config::load(std::path::Path::new("/nonexistent/sentinel.toml")).unwrap();
    assert_eq!(config.llm.provider, "ollama");
    assert_eq!(config.validate().unwrap(), ProviderKind::Local);
}

#[test]
#[serial]
fn load_parses_toml() {
    clear_env();
    let file = write_config(
        r#"
[llm]
provider = "openai"

[llm.openai]
model = "gpt-4o"

[llm.ollama]
api_url = "http://gpu-box:11434/api/chat"
model = "qwen2.5:14b"
temperature = 0.2

[timeouts]
llm_seconds = 30

[report]
export_dir = "/var/lib/sentinel/progress"
prompts_dir = "prompts"
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.validate().unwrap(), ProviderKind::Cloud);
    assert_eq!(config.llm.openai.model, "gpt-4o");
    assert_eq!(config.llm.openai.base_url, "https://api.openai.com/v1");
    assert_eq!(config.llm.ollama.api_url, "http://gpu-box:11434/api/chat");
    assert_eq!(config.llm.ollama.model, "qwen2.5:14b");
    assert_eq!(config.llm.ollama.max_tokens, 4000);
    assert!((config.llm.ollama.temperature - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.timeouts.llm_seconds, 30);
    assert_eq!(config.report.export_dir, "/var/lib/sentinel/progress");
    assert_eq!(config.report.subscriptions_file, "subscriptions.json");
    assert_eq!(config.report.prompts_dir.as_deref(), Some("prompts"));
}

#[test]
#[serial]
fn load_invalid_toml_errors() {
    clear_env();
    let file = write_config("[llm\nprovider = ");
    let err = Config::load(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config file"));
}

#[test]
#[serial]
fn unknown_provider_in_file_fails_validation() {
    clear_env();
    let file = write_config("[llm]\nprovider = \"gemini\"\n");
    let config = Config::load(file.path()).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedProvider(ref p) if p == "gemini"));
}

#[test]
#[serial]
fn env_overrides_apply() {
    clear_env();
    unsafe {
        std::env::set_var("SENTINEL_LLM_PROVIDER", "OpenAI");
        std::env::set_var("SENTINEL_OPENAI_MODEL", "gpt-4.1");
        std::env::set_var("SENTINEL_OLLAMA_API_URL", "http://10.0.0.2:11434/api/chat");
        std::env::set_var("SENTINEL_TIMEOUT_LLM", "0");
        std::env::set_var("SENTINEL_EXPORT_DIR", "/tmp/progress");
    }
    let config = Config::load(std::path::Path::new("/nonexistent/sentinel.toml")).unwrap();
    clear_env();

    assert_eq!(config.validate().unwrap(), ProviderKind::Cloud);
    assert_eq!(config.llm.openai.model, "gpt-4.1");
    assert_eq!(config.llm.ollama.api_url, "http://10.0.0.2:11434/api/chat");
    assert!(config.timeouts.llm_timeout().is_none());
    assert_eq!(config.report.export_dir, "/tmp/progress");
}

#[test]
#[serial]
fn unknown_provider_env_override_fails_validation() {
    clear_env();
    let file = write_config("[llm]\nprovider = \"ollama\"\n");
    unsafe { std::env::set_var("SENTINEL_LLM_PROVIDER", "mystery") };
    let config = Config::load(file.path()).unwrap();
    clear_env();
    assert_eq!(config.llm.provider, "mystery");
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedProvider(ref p) if p == "mystery"));
}

#[test]
#[serial]
fn invalid_timeout_env_override_is_ignored() {
    clear_env();
    unsafe { std::env::set_var("SENTINEL_TIMEOUT_LLM", "soon") };
    let config = Config::load(std::path::Path::new("/nonexistent/sentinel.toml")).unwrap();
    clear_env();
    assert_eq!(config.timeouts.llm_seconds, 120);
}

#[test]
fn provider_kind_parses_both_spellings() {
    assert_eq!("openai".parse::<ProviderKind>().unwrap(), ProviderKind::Cloud);
    assert_eq!("Cloud".parse::<ProviderKind>().unwrap(), ProviderKind::Cloud);
    assert_eq!(" OLLAMA ".parse::<ProviderKind>().unwrap(), ProviderKind::Local);
    assert_eq!("local".parse::<ProviderKind>().unwrap(), ProviderKind::Local);
    assert!("".parse::<ProviderKind>().is_err());
    assert!("claude".parse::<ProviderKind>().is_err());
}

#[test]
fn provider_kind_display_and_backend() {
    assert_eq!(ProviderKind::Cloud.to_string(), "cloud");
    assert_eq!(ProviderKind::Local.backend(), "ollama");
    assert_eq!(ProviderKind::Cloud.backend(), "openai");
}

#[test]
fn model_for_selects_backend_model() {
    let config = Config::default();
    assert_eq!(config.llm.model_for(ProviderKind::Cloud), "gpt-4o-mini");
    assert_eq!(config.llm.model_for(ProviderKind::Local), "llama3");
}

#[test]
fn llm_timeout_from_seconds() {
    let timeouts = TimeoutConfig { llm_seconds: 45 };
    assert_eq!(
        timeouts.llm_timeout(),
        Some(std::time::Duration::from_secs(45))
    );
}

#[test]
fn resolve_secrets_uses_explicit_key() {
    let mut config = Config::default();
    config.resolve_secrets(&ApiKeySource::Explicit(Secret::new("sk-given")));
    assert_eq!(
        config.secrets.openai_api_key.as_ref().map(Secret::expose),
        Some("sk-given")
    );
}

#[test]
fn resolve_secrets_absent_clears_key() {
    let mut config = Config::default();
    config.secrets.openai_api_key = Some(Secret::new("stale"));
    config.resolve_secrets(&ApiKeySource::Absent);
    assert!(config.secrets.openai_api_key.is_none());
}

#[test]
#[serial]
fn resolve_secrets_reads_env_fallback() {
    unsafe {
        std::env::remove_var("SENTINEL_OPENAI_API_KEY");
        std::env::set_var("OPENAI_API_KEY", "sk-generic");
    }
    let mut config = Config::default();
    config.resolve_secrets(&ApiKeySource::Env);
    unsafe { std::env::remove_var("OPENAI_API_KEY") };
    assert_eq!(
        config.secrets.openai_api_key.as_ref().map(Secret::expose),
        Some("sk-generic")
    );
}

#[test]
fn config_serializes_without_secrets() {
    let mut config = Config::default();
    config.secrets.openai_api_key = Some(Secret::new("sk-hidden"));
    let rendered = toml::to_string(&config).unwrap();
    assert!(rendered.contains("provider = \"ollama\""));
    assert!(!rendered.contains("sk-hidden"));
}
