use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// Writes generated reports next to the raw export they summarize.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportStore;

impl ReportStore {
    /// `a/b/2026-01-01_to_2026-01-03.md` becomes `a/b/2026-01-01_to_2026-01-03_report.md`.
    #[must_use]
    pub fn report_path_for(raw: &Path) -> PathBuf {
        let stem = raw
            .file_stem()
            .map_or_else(|| "activity".into(), |s| s.to_string_lossy());
        raw.with_file_name(format!("{stem}_report.md"))
    }

    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the report file cannot be written.
    pub async fn persist(&self, raw: &Path, report: &str) -> Result<PathBuf, ReportError> {
        let path = Self::report_path_for(raw);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, report).await?;
        tracing::info!(path = %path.display(), bytes = report.len(), "report saved");
        Ok(path)
    }
}
