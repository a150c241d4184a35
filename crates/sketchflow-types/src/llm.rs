//! Model prompt and gateway error types.
//!
//! These types model the boundary between the pipeline and the external
//! chat-completion backend. The backend wire format itself lives with the
//! gateway implementation in `sketchflow-infra`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of a message in a chat-completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// The combined system instruction and user message sent to the backend.
///
/// `system_instruction` is the same constant on every call. `user_content`
/// is the user's message escaped for embedding inside a JSON string
/// literal (the text between the quotes), not the raw message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPrompt {
    pub system_instruction: &'static str,
    pub user_content: String,
}

/// Errors from the Model Gateway.
///
/// An upstream "too many requests" reply is deliberately absent: the
/// gateway converts it into a synthetic `{"error": ...}` completion so it
/// flows through interpretation like any other reply.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("model backend unreachable: {0}")]
    Transport(String),

    #[error("model backend did not respond within {0}s")]
    Timeout(u64),

    #[error("model backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse model backend response: {0}")]
    Deserialization(String),

    #[error("model backend returned no completion text")]
    EmptyCompletion,

    #[error("no model API key configured (set {0})")]
    MissingCredential(String),

    #[error("invalid model request: {0}")]
    InvalidRequest(String),
}
