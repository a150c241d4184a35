//! Outcome of interpreting one raw model completion.

use serde_json::Value;

/// Result of the Response Interpreter for a single call.
///
/// Produced once per request and consumed immediately by the HTTP layer;
/// never persisted.
///
/// `Success` carries whatever structured value the model produced. It does
/// NOT imply the value conforms to [`crate::diagram::ActionList`]: schema
/// conformance is only requested in the prompt. Callers that need typed
/// actions must re-validate (see `sketchflow_core::diagram`).
#[derive(Debug, Clone, PartialEq)]
pub enum InterpretationOutcome {
    /// The completion parsed as structured data without an `error` field.
    Success(Value),
    /// The completion carried a top-level `error` field; holds its text.
    RateLimited(String),
    /// The completion was not valid structured data; holds it unchanged.
    RawFallback(String),
}

impl InterpretationOutcome {
    /// Short label for logs and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            InterpretationOutcome::Success(_) => "success",
            InterpretationOutcome::RateLimited(_) => "rate_limited",
            InterpretationOutcome::RawFallback(_) => "raw_fallback",
        }
    }
}
