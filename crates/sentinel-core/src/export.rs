//! Boundary to the activity exporter.
//!
//! Fetching issues and pull requests from GitHub happens out of process; this
//! module only locates and reads the Markdown files the exporter leaves behind
//! under `<export_dir>/<owner>_<repo>/<since>_to_<until>.md`.

use std::future::Future;
use std::path::{Path, PathBuf};

use chrono::{Days, Local, NaiveDate};

use crate::error::ReportError;

/// Raw activity for one project and date window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawActivity {
    pub project: String,
    pub days: u32,
    pub path: PathBuf,
    pub content: String,
}

pub trait ActivityExporter: Send + Sync {
    /// Produce the raw activity export for `project` covering the last `days` days.
    fn export(
        &self,
        project: &str,
        days: u32,
    ) -> impl Future<Output = Result<RawActivity, ReportError>> + Send;
}

/// Reads exports from a directory tree populated by the external exporter.
#[derive(Debug, Clone)]
pub struct FileExporter {
    root: PathBuf,
    today: Option<NaiveDate>,
}

impl FileExporter {
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            today: None,
        }
    }

    /// Pin the window end date instead of using the local clock.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// # Errors
    ///
    /// Returns [`ReportError::InvalidProject`] unless `project` is `owner/repo`.
    pub fn activity_path(&self, project: &str, days: u32) -> Result<PathBuf, ReportError> {
        let (owner, repo) = split_project(project)?;
        let until = self.today.unwrap_or_else(|| Local::now().date_naive());
        let since = until
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Ok(self
            .root
            .join(format!("{owner}_{repo}"))
            .join(format!("{since}_to_{until}.md")))
    }
}

impl ActivityExporter for FileExporter {
    async fn export(&self, project: &str, days: u32) -> Result<RawActivity, ReportError> {
        let path = self.activity_path(project, days)?;
        if !tokio::fs::try_exists(&path).await? {
            return Err(ReportError::ActivityNotFound {
                project: project.to_owned(),
                path,
            });
        }
        let content = tokio::fs::read_to_string(&path).await?;
        tracing::debug!(project, days, path = %path.display(), bytes = content.len(), "activity loaded");
        Ok(RawActivity {
            project: project.to_owned(),
            days,
            path,
            content,
        })
    }
}

/// Read an export that was produced out of band.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be read.
pub async fn read_activity(path: &Path) -> Result<String, ReportError> {
    Ok(tokio::fs::read_to_string(path).await?)
}

fn split_project(project: &str) -> Result<(&str, &str), ReportError> {
    let invalid = || ReportError::InvalidProject(project.to_owned());
    let (owner, repo) = project.trim().split_once('/').ok_or_else(invalid)?;
    if is_valid_segment(owner) && is_valid_segment(repo) {
        Ok((owner, repo))
    } else {
        Err(invalid())
    }
}

fn is_valid_segment(s: &str) -> bool {
    !s.is_empty()
        && s != "."
        && s != ".."
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
