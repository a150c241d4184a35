//! Workflow store trait definition.

use sketchflow_types::error::StorageError;
use sketchflow_types::workflow::WorkflowRecord;

/// Persistence for named workflow snapshots.
///
/// No concurrency control: concurrent saves of one name are last-write-wins.
pub trait WorkflowStore: Send + Sync {
    /// Write `record.data` under `record.name`, replacing any previous data.
    fn save(
        &self,
        record: &WorkflowRecord,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Names of all stored workflows, sorted.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<String>, StorageError>> + Send;

    /// The data previously saved under `name`, unchanged.
    ///
    /// Returns `StorageError::NotFound` if nothing is stored under `name`.
    fn load(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<String, StorageError>> + Send;
}
