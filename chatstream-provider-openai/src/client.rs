//! OpenAI API client struct and builder.

use std::future::Future;

use chatstream_sse::pipeline;
use chatstream_types::{
    ChatMessage, Provider, ProviderConfig, ProviderError, StreamHandle,
};
use tokio_util::sync::CancellationToken;

use crate::error::{map_http_status, map_reqwest_error};
use crate::streaming::ChatCompletionsDecoder;

/// Default model used when none is configured.
const DEFAULT_MODEL: &str = "gpt-4o";

/// Default OpenAI API base URL (includes the `/v1` prefix).
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default completion token budget per request.
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Client for OpenAI-compatible Chat Completions APIs.
///
/// Implements [`Provider`] for use anywhere a provider is accepted. The
/// protocol has no dedicated system field, so a configured system prompt is
/// prepended to the message list as a synthetic `system` message before the
/// request is serialized.
///
/// # Example
///
/// ```no_run
/// use chatstream_provider_openai::OpenAi;
///
/// let client = OpenAi::new("sk-...")
///     .model("gpt-4o")
///     .base_url("https://api.openai.com/v1");
/// ```
pub struct OpenAi {
    /// Configured instance name, reported via [`Provider::name`].
    pub(crate) name: String,
    /// API key sent as a bearer token.
    pub(crate) api_key: String,
    /// Model identifier.
    pub(crate) model: String,
    /// API base URL (override for compatible endpoints, proxies, tests).
    pub(crate) base_url: String,
    /// System prompt prepended to the message list when set.
    pub(crate) system_prompt: Option<String>,
    /// Completion token budget per request.
    pub(crate) max_tokens: u32,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl OpenAi {
    /// Create a new client with the given API key and sensible defaults.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            name: "openai".into(),
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

    /// Build the chat completions endpoint URL.
    pub(crate) fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl Provider for OpenAi {
    /// Send a streaming request to the Chat Completions API.
    ///
    /// A non-success status terminates here with the mapped error; on success
    /// the response body is handed to the stream pipeline bound to the
    /// delta-typed decoder.
    fn stream_chat(
        &self,
        cancel: CancellationToken,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<StreamHandle, ProviderError>> + Send {
        let url = self.chat_completions_url();
        let api_key = self.api_key.clone();
        let model = self.model.clone();
        let system_prompt = self.system_prompt.clone();
        let max_tokens = self.max_tokens;
        let http_client = self.client.clone();

        async move {
            // System prompt injection happens here, before serialization —
            // never in the decoder.
            let mut all_messages = Vec::with_capacity(messages.len() + 1);
            if let Some(system) = system_prompt {
                all_messages.push(ChatMessage::system(system));
            }
            all_messages.extend(messages);

            let body = serde_json::json!({
                "model": model,
                "max_tokens": max_tokens,
                "stream": true,
                "messages": all_messages,
            });

            tracing::debug!(url = %url, model = %body["model"], "sending streaming chat request");

            let response = http_client
                .post(&url)
                .header("Authorization", format!("Bearer {api_key}"))
                .header("Content-Type", "application/json")
                .json(&body)
                .send()
                .await
                .map_err(map_reqwest_error)?;

            let status = response.status();
            if !status.is_success() {
                let body_text = response.text().await.map_err(map_reqwest_error)?;
                return Err(map_http_status(status, &body_text));
            }

            Ok(pipeline::spawn(cancel, response.bytes_stream(), ChatCompletionsDecoder))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
