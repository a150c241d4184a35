//! OpenAI-compatible Model Gateway.
//!
//! Sends one `POST {base}/chat/completions` per prompt with bearer
//! authentication and returns the first choice's text. An HTTP 429 from
//! the backend is not an error here: it is replaced by the synthetic
//! `{"error": ...}` completion so the interpreter sees it as a normal reply.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! when building the `Authorization` header.

pub mod config;
pub mod types;

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde_json::value::RawValue;
use tracing::{field, info_span, warn, Instrument};

use sketchflow_core::llm::gateway::{rate_limit_reply, ModelGateway};
use sketchflow_observe::genai_attrs;
use sketchflow_types::llm::{GatewayError, MessageRole, ModelPrompt};

use self::config::OpenAiCompatConfig;
use self::types::{ChatCompletionRequest, ChatCompletionResponse, ChatRequestMessage};

/// Gateway for any backend speaking the OpenAI chat-completions protocol.
///
/// Built once at startup and shared read-only across requests. Does NOT
/// derive Debug to keep the API key out of logs.
pub struct OpenAiCompatGateway {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    api_key_env: String,
    base_url: String,
    provider_name: String,
    model: String,
    timeout_secs: u64,
}

impl OpenAiCompatGateway {
    /// Create a gateway from a configuration.
    ///
    /// The configured timeout bounds the whole request, so a hung backend
    /// cannot hold a caller indefinitely.
    pub fn new(config: OpenAiCompatConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key,
            api_key_env: config.api_key_env,
            base_url: config.base_url,
            provider_name: config.provider_name,
            model: config.model,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Whether a credential was supplied.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Build the chat request body.
    ///
    /// The user content is already escaped for a JSON string literal, so it
    /// is embedded as a raw literal rather than re-serialized.
    fn build_request(&self, prompt: &ModelPrompt) -> Result<ChatCompletionRequest, GatewayError> {
        let system = serde_json::value::to_raw_value(prompt.system_instruction)
            .map_err(|e| GatewayError::InvalidRequest(e.to_string()))?;
        let user = RawValue::from_string(format!("\"{}\"", prompt.user_content)).map_err(|e| {
            GatewayError::InvalidRequest(format!("user content is not a valid JSON string: {e}"))
        })?;

        Ok(ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatRequestMessage {
                    role: MessageRole::System,
                    content: system,
                },
                ChatRequestMessage {
                    role: MessageRole::User,
                    content: user,
                },
            ],
        })
    }

    /// One POST to the backend, inside the caller's span.
    async fn post_chat(
        &self,
        api_key: &SecretString,
        body: &ChatCompletionRequest,
    ) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(self.url())
            .bearer_auth(api_key.expose_secret())
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!(provider = %self.provider_name, "model backend rate limited the request");
            return Ok(rate_limit_reply());
        }

        let text = response.text().await.map_err(|e| self.map_send_error(e))?;
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::Deserialization(e.to_string()))?;

        let span = tracing::Span::current();
        if let Some(id) = completion.id.as_deref() {
            span.record(genai_attrs::GEN_AI_RESPONSE_ID, id);
        }
        if let Some(usage) = &completion.usage {
            span.record(genai_attrs::GEN_AI_USAGE_INPUT_TOKENS, usage.prompt_tokens);
            span.record(genai_attrs::GEN_AI_USAGE_OUTPUT_TOKENS, usage.completion_tokens);
        }

        // Blank text is still a reply; the interpreter decides what it means.
        completion
            .first_content()
            .map(str::to_string)
            .ok_or(GatewayError::EmptyCompletion)
    }

    fn map_send_error(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(self.timeout_secs)
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

impl ModelGateway for OpenAiCompatGateway {
    fn name(&self) -> &str {
        &self.provider_name
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, prompt: &ModelPrompt) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| GatewayError::MissingCredential(self.api_key_env.clone()))?;
        let body = self.build_request(prompt)?;

        let span = info_span!(
            "gen_ai.chat",
            otel.name = %genai_attrs::span_name(genai_attrs::OP_CHAT, &self.model),
            gen_ai.operation.name = genai_attrs::OP_CHAT,
            gen_ai.provider.name = %self.provider_name,
            gen_ai.request.model = %self.model,
            gen_ai.response.id = field::Empty,
            gen_ai.usage.input_tokens = field::Empty,
            gen_ai.usage.output_tokens = field::Empty,
        );

        self.post_chat(api_key, &body).instrument(span).await
    }
}
