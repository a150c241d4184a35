//! OpenTelemetry GenAI Semantic Convention attribute names.
//!
//! Span naming convention: `"{operation} {model}"` (e.g., `"chat gpt-3.5-turbo"`).
//!
//! Only fields recorded after the span is opened need a constant here;
//! static fields are written inline in `info_span!`.

/// The number of input tokens consumed.
pub const GEN_AI_USAGE_INPUT_TOKENS: &str = "gen_ai.usage.input_tokens";

/// The number of output tokens generated.
pub const GEN_AI_USAGE_OUTPUT_TOKENS: &str = "gen_ai.usage.output_tokens";

/// The unique response ID from the provider.
pub const GEN_AI_RESPONSE_ID: &str = "gen_ai.response.id";

/// Standard chat completion operation.
pub const OP_CHAT: &str = "chat";

/// Build the span name for an operation against a model.
pub fn span_name(operation: &str, model: &str) -> String {
    format!("{operation} {model}")
}
