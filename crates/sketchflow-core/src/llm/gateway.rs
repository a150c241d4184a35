//! ModelGateway trait definition.

use sketchflow_types::llm::{GatewayError, ModelPrompt};

/// Message carried by the synthetic reply for an upstream rate limit.
pub const RATE_LIMIT_MESSAGE: &str = "OpenAI rate limit exceeded. Please try again later.";

/// The completion text a gateway returns in place of an upstream
/// "too many requests" reply: `{"error":"<RATE_LIMIT_MESSAGE>"}`.
pub fn rate_limit_reply() -> String {
    serde_json::json!({ "error": RATE_LIMIT_MESSAGE }).to_string()
}

/// A chat-completion backend.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in sketchflow-infra.
///
/// Contract for `send`:
/// - exactly one outbound request per call, no retries;
/// - an upstream rate limit is returned as `Ok(rate_limit_reply())`;
/// - every other failure is an `Err`.
pub trait ModelGateway: Send + Sync {
    /// Human-readable backend name (e.g., "openai").
    fn name(&self) -> &str;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;

    /// Send one prompt and return the raw completion text.
    fn send(
        &self,
        prompt: &ModelPrompt,
    ) -> impl std::future::Future<Output = Result<String, GatewayError>> + Send;
}
