//! Anthropic API client struct and builder.

use std::future::Future;

use chatstream_sse::pipeline;
use chatstream_types::{
    ChatMessage, Provider, ProviderConfig, ProviderError, StreamHandle,
};
use tokio_util::sync::CancellationToken;

use crate::error::{map_http_status, map_reqwest_error};
use crate::streaming::MessagesDecoder;

/// Default model used when none is configured.
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default Anthropic API base URL.
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Anthropic API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default completion token budget per request.
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Client for the Anthropic Messages API.
///
/// Implements [`Provider`] for use anywhere a provider is accepted.
///
/// # Example
///
/// ```no_run
/// use chatstream_provider_anthropic::Anthropic;
///
/// let client = Anthropic::new("sk-ant-...")
///     .model("claude-sonnet-4-20250514")
///     .base_url("https://api.anthropic.com");
/// ```
pub struct Anthropic {
    /// Configured instance name, reported via [`Provider::name`].
    pub(crate) name: String,
    /// Anthropic API key (`ANTHROPIC_API_KEY`).
    pub(crate) api_key: String,
    /// Model identifier.
    pub(crate) model: String,
    /// API base URL (override for testing or proxies).
    pub(crate) base_url: String,
    /// System prompt sent as the top-level `system` field when set.
    pub(crate) system_prompt: Option<String>,
    /// Completion token budget per request.
    pub(crate) max_tokens: u32,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl Anthropic {
    /// Create a new client with the given API key and sensible defaults.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            name: "anthropic".into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_BASE_URL.into(),
            system_prompt: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from a configuration entry, keyed by its name.
    #[must_use]
    pub fn from_config(name: impl Into<String>, config: &ProviderConfig) -> Self {
        let mut client = Self::new(config.api_key.clone())
            .model(config.model.clone())
            .base_url(config.base_url.clone())
            .max_tokens(config.max_tokens);
        client.name = name.into();
        client.system_prompt = config.system_prompt.clone();
        client
    }

    /// Override the default model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL.
    ///
    /// Useful for testing with a local mock server or an API proxy.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a system prompt to inject into every request.
    #[must_use]
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Override the completion token budget.
    #[must_use]
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Build the messages endpoint URL.
    pub(crate) fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

impl Provider for Anthropic {
    /// Send a streaming request to the Anthropic Messages API.
    ///
    /// A non-success status terminates here with the mapped error; on success
    /// the response body is handed to the stream pipeline bound to the
    /// event-typed decoder.
    fn stream_chat(
        &self,
        cancel: CancellationToken,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<StreamHandle, ProviderError>> + Send {
        let url = self.messages_url();
        let api_key = self.api_key.clone();
        let model = self.model.clone();
        let system_prompt = self.system_prompt.clone();
        let max_tokens = self.max_tokens;
        let http_client = self.client.clone();

        async move {
            let mut body = serde_json::json!({
                "model": model,
                "max_tokens": max_tokens,
                "stream": true,
                "messages": messages,
            });
            if let Some(system) = system_prompt {
                body["system"] = serde_json::Value::String(system);
            }

            tracing::debug!(url = %url, model = %body["model"], "sending streaming chat request");

            let response = http_client
                .post(&url)
                .header("x-api-key", &api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .await
                .map_err(map_reqwest_error)?;

            let status = response.status();
            if !status.is_success() {
                let body_text = response.text().await.map_err(map_reqwest_error)?;
                return Err(map_http_status(status, &body_text));
            }

            Ok(pipeline::spawn(cancel, response.bytes_stream(), MessagesDecoder))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatstream_types::ProviderKind;

    #[test]
    fn defaults_are_set() {
        let client = Anthropic::new("test-key");
        assert_eq!(client.model, DEFAULT_MODEL);
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.max_tokens, DEFAULT_MAX_TOKENS);
        assert!(client.system_prompt.is_none());
        assert_eq!(client.name(), "anthropic");
    }

    #[test]
    fn builder_overrides() {
        let client = Anthropic::new("test-key")
            .model("claude-opus-4-5")
            .base_url("http://localhost:9999")
            .system_prompt("be brief")
            .max_tokens(512);
        assert_eq!(client.model, "claude-opus-4-5");
        assert_eq!(client.base_url, "http://localhost:9999");
        assert_eq!(client.system_prompt.as_deref(), Some("be brief"));
        assert_eq!(client.max_tokens, 512);
    }

    #[test]
    fn messages_url_includes_path() {
        let client = Anthropic::new("test-key").base_url("http://localhost:9999");
        assert_eq!(client.messages_url(), "http://localhost:9999/v1/messages");
    }

    #[test]
    fn from_config_copies_all_fields() {
        let config = ProviderConfig {
            kind: ProviderKind::Anthropic,
            api_key: "sk-ant-test".into(),
            base_url: "http://localhost:1234".into(),
            model: "claude-opus-4-5".into(),
            system_prompt: Some("You are terse.".into()),
            max_tokens: 256,
        };
        let client = Anthropic::from_config("work", &config);
        assert_eq!(client.name(), "work");
        assert_eq!(client.api_key, "sk-ant-test");
        assert_eq!(client.base_url, "http://localhost:1234");
        assert_eq!(client.model, "claude-opus-4-5");
        assert_eq!(client.system_prompt.as_deref(), Some("You are terse."));
        assert_eq!(client.max_tokens, 256);
    }
}
