use super::Config;

impl Config {
    pub(crate) fn apply_env_overrides(&mut self) {
        // Unknown kinds are kept as-is so `validate` rejects them at startup.
        if let Ok(v) = std::env::var("SENTINEL_LLM_PROVIDER") {
            self.llm.provider = v;
        }
        if let Ok(v) = std::env::var("SENTINEL_OPENAI_MODEL") {
            self.llm.openai.model = v;
        }
        if let Ok(v) = std::env::var("SENTINEL_OPENAI_BASE_URL") {
            self.llm.openai.base_url = v;
        }
        if let Ok(v) = std::env::var("SENTINEL_OLLAMA_MODEL") {
            self.llm.ollama.model = v;
        }
        if let Ok(v) = std::env::var("SENTINEL_OLLAMA_API_URL") {
            self.llm.ollama.api_url = v;
        }
        if let Ok(v) = std::env::var("SENTINEL_TIMEOUT_LLM")
            && let Ok(secs) = v.parse::<u64>()
        {
            self.timeouts.llm_seconds = secs;
        }
        if let Ok(v) = std::env::var("SENTINEL_EXPORT_DIR") {
            self.report.export_dir = v;
        }
        if let Ok(v) = std::env::var("SENTINEL_SUBSCRIPTIONS_FILE") {
            self.report.subscriptions_file = v;
        }
        if let Ok(v) = std::env::var("SENTINEL_PROMPTS_DIR") {
            self.report.prompts_dir = Some(v);
        }
    }
}
