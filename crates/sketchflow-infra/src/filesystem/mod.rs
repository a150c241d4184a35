//! Filesystem adapters for Sketchflow.
//!
//! Implements the storage ports from `sketchflow-core` on the local disk,
//! plus helpers that resolve where those directories live.

pub mod upload;
pub mod workflow;

use std::path::{Path, PathBuf};

pub use upload::FsUploadStore;
pub use workflow::FsWorkflowStore;

/// Resolve the data directory.
///
/// Priority:
/// 1. Explicit override (the `--data-dir` flag)
/// 2. `SKETCHFLOW_DATA_DIR` environment variable
/// 3. The current working directory
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }

    if let Ok(dir) = std::env::var("SKETCHFLOW_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(".")
}

/// Resolve a configured storage directory.
///
/// `~/` expands to the home directory, absolute paths are kept, and
/// anything else is taken relative to `data_dir`.
pub fn resolve_storage_dir(data_dir: &Path, configured: &str) -> PathBuf {
    if let Some(rest) = configured.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    let path = Path::new(configured);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}
