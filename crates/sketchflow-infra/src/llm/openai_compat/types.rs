//! Chat-completion wire types for OpenAI-compatible backends.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use sketchflow_types::llm::MessageRole;

/// Body of `POST {base}/chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatRequestMessage>,
}

/// One message in the request.
///
/// `content` is a pre-encoded JSON string literal so the prompt's
/// already-escaped user content is embedded without a second escaping pass.
#[derive(Debug, Serialize)]
pub struct ChatRequestMessage {
    pub role: MessageRole,
    pub content: Box<RawValue>,
}

/// Non-streaming completion response. Only the fields we read are modeled.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_tolerates_missing_optional_fields() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"hi"}}]}"#;
        let resp: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.first_content(), Some("hi"));
        assert!(resp.id.is_none());
        assert!(resp.usage.is_none());
    }

    #[test]
    fn response_without_choices_has_no_content() {
        let resp: ChatCompletionResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert_eq!(resp.first_content(), None);
    }
}
