//! System prompt selection per report backend.

use std::path::PathBuf;

use crate::config::ProviderKind;
use crate::error::ReportError;

const OPENAI_PROMPT: &str = include_str!("../prompts/openai_github_prompt.txt");
const OLLAMA_PROMPT: &str = include_str!("../prompts/ollama_github_prompt.txt");

/// Resolves the system instruction for a backend, preferring files in an
/// override directory over the prompts compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct PromptLoader {
    dir: Option<PathBuf>,
}

impl PromptLoader {
    #[must_use]
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    #[must_use]
    pub fn file_name(kind: ProviderKind) -> String {
        format!("{}_github_prompt.txt", kind.backend())
    }

    #[must_use]
    pub fn builtin(kind: ProviderKind) -> &'static str {
        match kind {
            ProviderKind::Cloud => OPENAI_PROMPT,
            ProviderKind::Local => OLLAMA_PROMPT,
        }
    }

    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the override file exists but cannot be read.
    pub async fn system_prompt(&self, kind: ProviderKind) -> Result<String, ReportError> {
        if let Some(dir) = &self.dir {
            let path = dir.join(Self::file_name(kind));
            if tokio::fs::try_exists(&path).await? {
                tracing::debug!(path = %path.display(), "using system prompt override");
                return Ok(tokio::fs::read_to_string(&path).await?);
            }
            tracing::debug!(path = %path.display(), "prompt override missing, using built-in");
        }
        Ok(Self::builtin(kind).to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_backend() {
        assert_eq!(
            PromptLoader::file_name(ProviderKind::Cloud),
            "openai_github_prompt.txt"
        );
        assert_eq!(
            PromptLoader::file_name(ProviderKind::Local),
            "ollama_github_prompt.txt"
        );
    }

    #[test]
    fn builtin_prompts_are_distinct_and_non_empty() {
        let cloud = PromptLoader::builtin(ProviderKind::Cloud);
        let local = PromptLoader::builtin(ProviderKind::Local);
        assert!(!cloud.trim().is_empty());
        assert!(!local.trim().is_empty());
        assert_ne!(cloud, local);
    }

    #[tokio::test]
    async fn falls_back_to_builtin_without_dir() {
        let prompt = PromptLoader::default()
            .system_prompt(ProviderKind::Local)
            .await
            .unwrap();
        assert_eq!(prompt, PromptLoader::builtin(ProviderKind::Local));
    }

    #[tokio::test]
    async fn override_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("openai_github_prompt.txt"), "custom cloud prompt").unwrap();

        let loader = PromptLoader::new(Some(dir.path().to_path_buf()));
        assert_eq!(
            loader.system_prompt(ProviderKind::Cloud).await.unwrap(),
            "custom cloud prompt"
        );
        assert_eq!(
            loader.system_prompt(ProviderKind::Local).await.unwrap(),
            PromptLoader::builtin(ProviderKind::Local)
        );
    }
}
