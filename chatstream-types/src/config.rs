//! Provider configuration types.
//!
//! Loading (TOML files, env substitution) happens outside this workspace;
//! these types only define the shape a loader deserializes into.

use serde::{Deserialize, Serialize};

/// Which wire protocol a configured endpoint speaks.
///
/// Chosen explicitly at configuration time — routing is never inferred from
/// the endpoint URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Event-typed SSE protocol (Anthropic Messages API).
    Anthropic,
    /// Delta-typed SSE protocol with a `[DONE]` sentinel (OpenAI-compatible
    /// Chat Completions APIs).
    OpenAi,
}

/// Configuration for one chat backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Protocol family of the endpoint.
    pub kind: ProviderKind,
    /// API key sent with every request.
    pub api_key: String,
    /// Base URL of the endpoint, without the per-protocol path suffix.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Optional system prompt injected into every request.
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// Completion token budget per request.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_max_tokens() -> u32 {
    4096
}
