//! Upload store writing node attachments into a flat directory.
//!
//! Each file lands at `{dir}/{node_id}-{filename}`; a second upload with
//! the same pair overwrites the first.

use std::path::PathBuf;

use sketchflow_core::storage::upload_store::UploadStore;
use sketchflow_core::storage::validate_name;
use sketchflow_types::error::StorageError;

pub struct FsUploadStore {
    dir: PathBuf,
}

impl FsUploadStore {
    /// Create a store rooted at `dir`. The directory is created on first upload.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

/// Final path component of a client-supplied filename.
///
/// Browsers may send a full path (`C:\Users\me\model.json`); only the last
/// segment is kept.
fn base_filename(filename: &str) -> &str {
    filename.rsplit(['/', '\\']).next().unwrap_or(filename)
}

impl UploadStore for FsUploadStore {
    async fn store(
        &self,
        node_id: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<PathBuf, StorageError> {
        validate_name(node_id)?;
        let filename = base_filename(filename);
        validate_name(filename)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(format!("{node_id}-{filename}"));
        tokio::fs::write(&path, data).await?;

        tracing::debug!(node_id, path = %path.display(), bytes = data.len(), "upload stored");
        Ok(path)
    }
}
