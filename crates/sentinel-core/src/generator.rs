use sentinel_llm::LlmProvider;
use sentinel_llm::any::AnyProvider;

use crate::bootstrap::create_provider;
use crate::config::Config;
use crate::error::{ConfigError, ReportError};
use crate::request::ReportRequest;

/// Turns a system instruction plus raw activity into a report through the
/// one backend fixed at construction.
#[derive(Debug, Clone)]
pub struct ReportGenerator<P = AnyProvider> {
    provider: P,
}

impl ReportGenerator<AnyProvider> {
    /// Build the generator with the backend selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configured provider kind is unsupported or
    /// its adapter cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let provider = create_provider(config)?;
        tracing::info!(
            provider = provider.name(),
            model = provider.model(),
            "report generator ready"
        );
        Ok(Self::new(provider))
    }
}

impl<P: LlmProvider> ReportGenerator<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate a report for `user_content` using `system_prompt` as instruction.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::EmptyActivity`] without contacting the backend when
    /// `user_content` is blank, and [`ReportError::Llm`] when the backend call fails.
    pub async fn generate_report(
        &self,
        system_prompt: &str,
        user_content: &str,
    ) -> Result<String, ReportError> {
        let request = ReportRequest::build(system_prompt, user_content)?;
        self.send(&request).await
    }

    /// Dispatch an already built request to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Llm`] when the backend call fails.
    pub async fn send(&self, request: &ReportRequest) -> Result<String, ReportError> {
        tracing::info!(
            provider = self.provider.name(),
            model = self.provider.model(),
            activity_bytes = request.user_content().len(),
            "generating report"
        );

        match self.provider.chat(request.messages()).await {
            Ok(report) => {
                tracing::debug!(report_bytes = report.len(), "report generated");
                Ok(report)
            }
            Err(e) => {
                tracing::error!(
                    provider = self.provider.name(),
                    kind = ?e.kind(),
                    "report generation failed: {e}"
                );
                Err(e.into())
            }
        }
    }
}
