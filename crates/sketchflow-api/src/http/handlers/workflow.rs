//! Workflow store endpoints: save, list, load.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use sketchflow_core::storage::workflow_store::WorkflowStore;
use sketchflow_types::error::StorageError;
use sketchflow_types::workflow::WorkflowRecord;

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /workflow/save - Store `data` under `name`, replacing any previous copy.
pub async fn save_workflow(
    State(state): State<AppState>,
    payload: Result<Json<WorkflowRecord>, JsonRejection>,
) -> Result<String, AppError> {
    let Json(record) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    state
        .workflow_store
        .save(&record)
        .await
        .map_err(|e| AppError::storage(e, "Save failed"))?;

    tracing::info!(name = %record.name, "workflow saved");
    Ok(format!("Workflow saved: {}", record.name))
}

/// GET /workflow/list - Names of all saved workflows.
pub async fn list_workflows(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let names = state
        .workflow_store
        .list()
        .await
        .map_err(|e| AppError::storage(e, "List failed"))?;
    Ok(Json(names))
}

/// GET /workflow/load/{name} - The saved data, byte-for-byte.
pub async fn load_workflow(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let data = state.workflow_store.load(&name).await.map_err(|e| match e {
        StorageError::NotFound(_) => AppError::NotFound(format!("Workflow not found: {name}")),
        other => AppError::storage(other, "Load failed"),
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tempfile::TempDir;

    use crate::http::test_support::{body_text, test_state, Scripted};

    fn record(name: &str, data: &str) -> Result<Json<WorkflowRecord>, JsonRejection> {
        Ok(Json(WorkflowRecord {
            name: name.to_string(),
            data: data.to_string(),
        }))
    }

    #[tokio::test]
    async fn save_list_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(&tmp, Scripted::Reply(String::new()));
        let data = r#"{"nodes":[],"edges":[],"workflowName":"foo"}"#;

        let msg = save_workflow(State(state.clone()), record("foo", data))
            .await
            .unwrap();
        assert_eq!(msg, "Workflow saved: foo");
        assert!(tmp.path().join("workflows").join("foo.json").exists());

        let Json(names) = list_workflows(State(state.clone())).await.unwrap();
        assert_eq!(names, vec!["foo".to_string()]);

        let resp = load_workflow(State(state), Path("foo".to_string()))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, data);
    }

    #[tokio::test]
    async fn list_before_any_save_is_empty() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(&tmp, Scripted::Reply(String::new()));

        let Json(names) = list_workflows(State(state)).await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn load_missing_is_404_with_name() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(&tmp, Scripted::Reply(String::new()));

        let resp = load_workflow(State(state), Path("ghost".to_string()))
            .await
            .map(IntoResponse::into_response)
            .unwrap_err()
            .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(resp).await, "Workflow not found: ghost");
    }

    #[tokio::test]
    async fn traversal_name_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(&tmp, Scripted::Reply(String::new()));

        let resp = save_workflow(State(state), record("../../etc/evil", "{}"))
            .await
            .unwrap_err()
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(!tmp.path().join("etc").exists());
    }

    #[tokio::test]
    async fn unwritable_directory_is_save_failed() {
        let tmp = TempDir::new().unwrap();
        // A regular file where the workflows directory should be.
        std::fs::write(tmp.path().join("workflows"), "not a dir").unwrap();
        let state = test_state(&tmp, Scripted::Reply(String::new()));

        let resp = save_workflow(State(state), record("foo", "{}"))
            .await
            .unwrap_err()
            .into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(resp).await.starts_with("Save failed: "));
    }
}
