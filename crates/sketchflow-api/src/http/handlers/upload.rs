//! Node attachment upload.

use axum::extract::{Multipart, Path, State};

use sketchflow_core::storage::upload_store::UploadStore;

use crate::http::error::AppError;
use crate::state::AppState;

/// Name of the multipart part carrying the file.
const FILE_FIELD: &str = "file";

/// POST /upload/{node_id} - Store the `file` part for a diagram node.
pub async fn upload_file(
    State(state): State<AppState>,
    Path(node_id): Path<String>,
    mut multipart: Multipart,
) -> Result<String, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Internal(format!("Upload failed: {}", e.body_text())))?;

        let path = state
            .upload_store
            .store(&node_id, &filename, &data)
            .await
            .map_err(|e| AppError::storage(e, "Upload failed"))?;

        tracing::info!(node_id = %node_id, path = %path.display(), "file uploaded");
        return Ok(format!("File uploaded for node {node_id}"));
    }

    Err(AppError::BadRequest(format!(
        "missing multipart part '{FILE_FIELD}'"
    )))
}
