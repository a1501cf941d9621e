use std::path::{Path, PathBuf};

use sentinel_llm::LlmProvider;
use sentinel_llm::any::AnyProvider;

use crate::error::ReportError;
use crate::export::{ActivityExporter, read_activity};
use crate::generator::ReportGenerator;
use crate::store::ReportStore;

/// End-to-end pipeline: export, summarize, persist.
pub struct ProgressReporter<E, P = AnyProvider> {
    exporter: E,
    generator: ReportGenerator<P>,
    system_prompt: String,
    store: ReportStore,
}

impl<E: ActivityExporter, P: LlmProvider> ProgressReporter<E, P> {
    #[must_use]
    pub fn new(exporter: E, generator: ReportGenerator<P>, system_prompt: String) -> Self {
        Self {
            exporter,
            generator,
            system_prompt,
            store: ReportStore,
        }
    }

    #[must_use]
    pub fn generator(&self) -> &ReportGenerator<P> {
        &self.generator
    }

    /// Summarize the last `days` days of `project` and save the report next
    /// to the raw export. Returns the report text and where it was written.
    ///
    /// # Errors
    ///
    /// Propagates exporter, generation, and persistence failures unchanged.
    pub async fn export_progress_by_date_range(
        &self,
        project: &str,
        days: u32,
    ) -> Result<(String, PathBuf), ReportError> {
        tracing::info!(project, days, "exporting progress");
        let raw = self.exporter.export(project, days).await?;
        let report = self
            .generator
            .generate_report(&self.system_prompt, &raw.content)
            .await?;
        let path = self.store.persist(&raw.path, &report).await?;
        Ok((report, path))
    }

    /// Same as [`Self::export_progress_by_date_range`] for an export already on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if `raw_path` cannot be read, otherwise
    /// propagates generation and persistence failures.
    pub async fn generate_from_file(&self, raw_path: &Path) -> Result<(String, PathBuf), ReportError> {
        tracing::info!(path = %raw_path.display(), "generating report from file");
        let content = read_activity(raw_path).await?;
        let report = self
            .generator
            .generate_report(&self.system_prompt, &content)
            .await?;
        let path = self.store.persist(raw_path, &report).await?;
        Ok((report, path))
    }
}
