//! Storage ports for the file-backed collaborators.
//!
//! Implementations live in `sketchflow-infra::filesystem`.

pub mod upload_store;
pub mod workflow_store;

use sketchflow_types::error::StorageError;

/// Reject names that are empty or could escape their storage directory.
///
/// Dots inside a name (`v1..v2`) are fine; only `.` and `..` on their own
/// refer to a directory.
pub fn validate_name(name: &str) -> Result<(), StorageError> {
    if name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0')
    {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}
