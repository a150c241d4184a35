//! Response Interpreter.
//!
//! Turns the raw completion text into an [`InterpretationOutcome`]:
//!
//! 1. Text that is not valid JSON is passed through unchanged as
//!    [`InterpretationOutcome::RawFallback`].
//! 2. A JSON object with a top-level `error` field becomes
//!    [`InterpretationOutcome::RateLimited`] carrying that field as text.
//! 3. Anything else is [`InterpretationOutcome::Success`] with the parsed
//!    value as-is.
//!
//! Step 3 does not check the value against the action schema. `Success`
//! means "structured", not "conforms"; use [`crate::diagram::parse_actions`]
//! when typed actions are required.

use serde_json::Value;

use sketchflow_types::interpret::InterpretationOutcome;

/// Shape of a parsed completion.
#[derive(Debug)]
enum ModelReply {
    /// Object carrying a top-level `error` field; holds that field.
    Error(Value),
    /// Any other JSON value.
    Structured(Value),
}

impl From<Value> for ModelReply {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => match map.remove("error") {
                Some(error) => ModelReply::Error(error),
                None => ModelReply::Structured(Value::Object(map)),
            },
            other => ModelReply::Structured(other),
        }
    }
}

/// Interpret one raw completion. Pure over its input.
pub fn interpret(raw: &str) -> InterpretationOutcome {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return InterpretationOutcome::RawFallback(raw.to_string()),
    };

    match ModelReply::from(value) {
        ModelReply::Error(error) => InterpretationOutcome::RateLimited(error_text(&error)),
        ModelReply::Structured(value) => InterpretationOutcome::Success(value),
    }
}

/// Render the `error` field as text.
///
/// Strings are taken verbatim; scalars use their JSON spelling; containers
/// have no textual form and render empty.
fn error_text(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}
