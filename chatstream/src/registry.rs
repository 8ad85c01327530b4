//! Configuration-time provider registry.
//!
//! Turns a map of named [`ProviderConfig`] entries into ready-to-use
//! providers. Which client backs an entry is decided by its explicit
//! [`ProviderKind`], never inferred from the URL.

use std::collections::HashMap;
use std::future::Future;

use chatstream_provider_anthropic::Anthropic;
use chatstream_provider_openai::OpenAi;
use chatstream_types::{
    ChatMessage, Provider, ProviderConfig, ProviderError, ProviderKind, StreamHandle,
};
use tokio_util::sync::CancellationToken;

/// A provider built from configuration.
///
/// Enum dispatch over the concrete clients so heterogeneous providers can
/// live in one collection without boxing.
pub enum ChatProvider {
    /// Anthropic Messages API client.
    Anthropic(Anthropic),
    /// OpenAI-compatible Chat Completions client.
    OpenAi(OpenAi),
}

impl Provider for ChatProvider {
    fn stream_chat(
        &self,
        cancel: CancellationToken,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<StreamHandle, ProviderError>> + Send {
        async move {
            match self {
                Self::Anthropic(p) => p.stream_chat(cancel, messages).await,
                Self::OpenAi(p) => p.stream_chat(cancel, messages).await,
            }
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Anthropic(p) => p.name(),
            Self::OpenAi(p) => p.name(),
        }
    }
}

/// Build a provider for every configuration entry, keyed by entry name.
///
/// The entry name becomes the provider's reported name, so two entries with
/// different keys can point at the same backend.
pub fn build_providers(configs: HashMap<String, ProviderConfig>) -> HashMap<String, ChatProvider> {
    configs
        .into_iter()
        .map(|(name, config)| {
            tracing::debug!(name = %name, kind = ?config.kind, "building provider");
            let provider = match config.kind {
                ProviderKind::Anthropic => {
                    ChatProvider::Anthropic(Anthropic::from_config(&name, &config))
                }
                ProviderKind::OpenAi => ChatProvider::OpenAi(OpenAi::from_config(&name, &config)),
            };
            (name, provider)
        })
        .collect()
}
