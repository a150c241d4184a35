//! Upload store trait definition.

use std::path::PathBuf;

use sketchflow_types::error::StorageError;

/// Storage for files attached to diagram nodes.
///
/// No dedup, no overwrite protection, no size or type validation.
pub trait UploadStore: Send + Sync {
    /// Store `data` for `node_id` as `<node_id>-<filename>` and return the
    /// path written.
    fn store(
        &self,
        node_id: &str,
        filename: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf, StorageError>> + Send;
}
