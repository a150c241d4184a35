//! Observability for Sketchflow: tracing subscriber setup and GenAI
//! semantic-convention attribute names.

pub mod genai_attrs;
pub mod tracing_setup;
