//! Persistent list of subscribed repositories, stored as a JSON array.

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::error::ReportError;

pub struct SubscriptionManager {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SubscriptionManager {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a JSON
    /// array of strings.
    pub async fn list_subscriptions(&self) -> Result<Vec<String>, ReportError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    /// Returns `false` if `project` was already subscribed.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidProject`] for a blank name, or an I/O or
    /// JSON error from the backing file.
    pub async fn add_subscription(&self, project: &str) -> Result<bool, ReportError> {
        let project = project.trim();
        if project.is_empty() {
            return Err(ReportError::InvalidProject(project.to_owned()));
        }
        let _guard = self.lock.lock().await;
        let mut subs = self.read().await?;
        if subs.iter().any(|s| s == project) {
            tracing::debug!(project, "already subscribed");
            return Ok(false);
        }
        subs.push(project.to_owned());
        self.write(&subs).await?;
        tracing::info!(project, total = subs.len(), "subscription added");
        Ok(true)
    }

    /// Returns `false` if `project` was not subscribed.
    ///
    /// # Errors
    ///
    /// Returns an I/O or JSON error from the backing file.
    pub async fn remove_subscription(&self, project: &str) -> Result<bool, ReportError> {
        let project = project.trim();
        let _guard = self.lock.lock().await;
        let mut subs = self.read().await?;
        let before = subs.len();
        subs.retain(|s| s != project);
        if subs.len() == before {
            tracing::debug!(project, "not subscribed");
            return Ok(false);
        }
        self.write(&subs).await?;
        tracing::info!(project, total = subs.len(), "subscription removed");
        Ok(true)
    }

    async fn read(&self) -> Result<Vec<String>, ReportError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, subs: &[String]) -> Result<(), ReportError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(subs)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(dir: &tempfile::TempDir) -> SubscriptionManager {
        SubscriptionManager::new(dir.path().join("subscriptions.json"))
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(manager(&dir).list_subscriptions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let subs = manager(&dir);

        assert!(subs.add_subscription("octocat/hello-world").await.unwrap());
        assert!(!subs.add_subscription("octocat/hello-world").await.unwrap());
        assert!(subs.add_subscription("rust-lang/rust").await.unwrap());

        assert_eq!(
            subs.list_subscriptions().await.unwrap(),
            vec!["octocat/hello-world", "rust-lang/rust"]
        );
    }

    #[tokio::test]
    async fn remove_reports_absence() {
        let dir = tempfile::tempdir().unwrap();
        let subs = manager(&dir);
        subs.add_subscription("octocat/hello-world").await.unwrap();

        assert!(!subs.remove_subscription("nobody/nothing").await.unwrap());
        assert!(subs.remove_subscription("octocat/hello-world").await.unwrap());
        assert!(subs.list_subscriptions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        manager(&dir).add_subscription("a/b").await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("subscriptions.json")).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, vec!["a/b"]);
        assert_eq!(manager(&dir).list_subscriptions().await.unwrap(), vec!["a/b"]);
    }

    #[tokio::test]
    async fn blank_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = manager(&dir).add_subscription("   ").await.unwrap_err();
        assert!(matches!(err, ReportError::InvalidProject(_)));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_subscriptions_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("subscriptions.json"), "{not json").unwrap();
        let err = manager(&dir).list_subscriptions().await.unwrap_err();
        assert!(matches!(err, ReportError::Subscriptions(_)));
    }
}
