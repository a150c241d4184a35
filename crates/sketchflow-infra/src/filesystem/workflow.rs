//! Workflow store backed by one JSON file per workflow.
//!
//! Layout:
//! ```text
//! {dir}/
//!   checkout.json
//!   onboarding.json
//! ```

use std::path::PathBuf;

use sketchflow_core::storage::validate_name;
use sketchflow_core::storage::workflow_store::WorkflowStore;
use sketchflow_types::error::StorageError;
use sketchflow_types::workflow::WorkflowRecord;

const EXTENSION: &str = ".json";

pub struct FsWorkflowStore {
    dir: PathBuf,
}

impl FsWorkflowStore {
    /// Create a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}{EXTENSION}"))
    }
}

impl WorkflowStore for FsWorkflowStore {
    async fn save(&self, record: &WorkflowRecord) -> Result<(), StorageError> {
        validate_name(&record.name)?;
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.path_for(&record.name), record.data.as_bytes()).await?;
        tracing::debug!(name = %record.name, bytes = record.data.len(), "workflow saved");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            if let Some(name) = file_name.to_str().and_then(|f| f.strip_suffix(EXTENSION)) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    async fn load(&self, name: &str) -> Result<String, StorageError> {
        validate_name(name)?;
        match tokio::fs::read_to_string(self.path_for(name)).await {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(name: &str, data: &str) -> WorkflowRecord {
        WorkflowRecord {
            name: name.to_string(),
            data: data.to_string(),
        }
    }

    #[tokio::test]
    async fn save_then_list_and_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = FsWorkflowStore::new(tmp.path().join("workflows"));
        let data = r#"{"nodes":[{"id":"node_0"}],"edges":[],"workflowName":"foo"}"#;

        store.save(&record("foo", data)).await.unwrap();

        assert_eq!(store.list().await.unwrap(), vec!["foo".to_string()]);
        assert_eq!(store.load("foo").await.unwrap(), data);
    }

    #[tokio::test]
    async fn last_write_wins() {
        let tmp = TempDir::new().unwrap();
        let store = FsWorkflowStore::new(tmp.path().to_path_buf());

        store.save(&record("foo", "first")).await.unwrap();
        store.save(&record("foo", "second")).await.unwrap();

        assert_eq!(store.load("foo").await.unwrap(), "second");
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_missing_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FsWorkflowStore::new(tmp.path().join("never-created"));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_ignores_other_files_and_sorts() {
        let tmp = TempDir::new().unwrap();
        let store = FsWorkflowStore::new(tmp.path().to_path_buf());
        store.save(&record("zeta", "{}")).await.unwrap();
        store.save(&record("alpha", "{}")).await.unwrap();
        tokio::fs::write(tmp.path().join("notes.txt"), "x").await.unwrap();
        tokio::fs::create_dir(tmp.path().join("dir.json")).await.unwrap();

        assert_eq!(
            store.list().await.unwrap(),
            vec!["alpha".to_string(), "zeta".to_string()]
        );
    }

    #[tokio::test]
    async fn load_missing_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let store = FsWorkflowStore::new(tmp.path().to_path_buf());
        let err = store.load("ghost").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(name) if name == "ghost"));
    }

    #[tokio::test]
    async fn double_dot_inside_name_is_allowed() {
        let tmp = TempDir::new().unwrap();
        let store = FsWorkflowStore::new(tmp.path().to_path_buf());

        store.save(&record("v1..v2", "{}")).await.unwrap();
        assert_eq!(store.list().await.unwrap(), vec!["v1..v2".to_string()]);
        assert_eq!(store.load("v1..v2").await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn traversal_names_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let store = FsWorkflowStore::new(tmp.path().join("workflows"));

        let err = store.save(&record("../escape", "{}")).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidName(_)));
        assert!(!tmp.path().join("escape.json").exists());

        let err = store.load("../escape").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidName(_)));
    }
}
