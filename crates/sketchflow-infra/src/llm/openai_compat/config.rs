//! Configuration for the OpenAI-compatible gateway.

use secrecy::SecretString;

use sketchflow_types::config::LlmConfig;

/// Everything the gateway needs, fixed at construction.
///
/// Does NOT derive Debug: it holds the API key.
pub struct OpenAiCompatConfig {
    /// Human-readable backend name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// Bearer credential; `None` makes every call fail with `MissingCredential`.
    pub api_key: Option<SecretString>,
    /// Where the credential was expected to come from, for error messages.
    pub api_key_env: String,
    /// Chat-completion model identifier.
    pub model: String,
    /// Outbound request timeout.
    pub timeout_secs: u64,
}

impl OpenAiCompatConfig {
    /// Build from the `[llm]` section of `config.toml` and a resolved key.
    pub fn from_llm_config(llm: &LlmConfig, api_key: Option<SecretString>) -> Self {
        Self {
            provider_name: provider_name_for(&llm.base_url).to_string(),
            base_url: llm.base_url.trim_end_matches('/').to_string(),
            api_key,
            api_key_env: llm.api_key_env.clone(),
            model: llm.model.clone(),
            timeout_secs: llm.timeout_secs,
        }
    }
}

/// OpenAI default configuration.
///
/// Base URL: `https://api.openai.com/v1`
pub fn openai_defaults(api_key: &str, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: "https://api.openai.com/v1".into(),
        api_key: Some(SecretString::from(api_key)),
        api_key_env: "OPENAI_API_KEY".into(),
        model: model.into(),
        timeout_secs: 60,
    }
}

/// Best-effort backend label from the base URL, for logs and spans.
fn provider_name_for(base_url: &str) -> &'static str {
    if base_url.contains("api.openai.com") {
        "openai"
    } else if base_url.contains("mistral.ai") {
        "mistral"
    } else if base_url.contains("generativelanguage.googleapis.com") {
        "gemini"
    } else {
        "openai_compatible"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn from_default_llm_config() {
        let config = OpenAiCompatConfig::from_llm_config(
            &LlmConfig::default(),
            Some(SecretString::from("sk-test")),
        );
        assert_eq!(config.provider_name, "openai");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.api_key.unwrap().expose_secret(), "sk-test");
    }

    #[test]
    fn trailing_slash_is_trimmed_and_local_backend_labelled() {
        let llm = LlmConfig {
            base_url: "http://localhost:11434/v1/".to_string(),
            ..LlmConfig::default()
        };
        let config = OpenAiCompatConfig::from_llm_config(&llm, None);
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.provider_name, "openai_compatible");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn openai_defaults_fill_base_url() {
        let config = openai_defaults("sk-test", "gpt-4o-mini");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
    }
}
