//! Application error type mapping to HTTP status codes.
//!
//! Every error body is a plain-text sentence.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use sketchflow_types::error::StorageError;
use sketchflow_types::llm::GatewayError;

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The model backend call failed.
    Gateway(GatewayError),
    /// Malformed request body, path or form.
    BadRequest(String),
    /// Requested resource does not exist.
    NotFound(String),
    /// Local failure (disk, encoding).
    Internal(String),
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        AppError::Gateway(e)
    }
}

impl AppError {
    /// Map a store failure; I/O messages are prefixed with `context`
    /// (e.g. "Save failed").
    pub fn storage(err: StorageError, context: &str) -> Self {
        match err {
            StorageError::InvalidName(_) => AppError::BadRequest(err.to_string()),
            StorageError::NotFound(_) => AppError::NotFound(err.to_string()),
            StorageError::Io(msg) => AppError::Internal(format!("{context}: {msg}")),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Gateway(GatewayError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Gateway(GatewayError::InvalidRequest(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Gateway(_) => StatusCode::BAD_GATEWAY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Gateway(e) => e.to_string(),
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Internal(msg) => {
                msg.clone()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %message, "request failed");
        }

        (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_errors_map_to_upstream_statuses() {
        assert_eq!(
            AppError::from(GatewayError::Timeout(60)).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            AppError::from(GatewayError::Transport("refused".into())).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::from(GatewayError::MissingCredential("OPENAI_API_KEY".into())).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::from(GatewayError::Status {
                status: 500,
                body: "boom".into()
            })
            .status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn storage_errors_keep_their_meaning() {
        let err = AppError::storage(StorageError::InvalidName("../x".into()), "Save failed");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = AppError::storage(StorageError::Io("disk full".into()), "Save failed");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Save failed: disk full");

        let err = AppError::storage(StorageError::NotFound("x".into()), "Load failed");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_body_is_plain_text() {
        let resp = AppError::BadRequest("missing field `message`".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], TEXT_PLAIN);
    }
}
