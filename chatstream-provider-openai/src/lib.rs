//! OpenAI-compatible Chat Completions provider for chatstream.
//!
//! Implements the [`Provider`] trait from `chatstream-types` for the
//! [Chat Completions API](https://platform.openai.com/docs/api-reference/chat),
//! decoding its delta-typed SSE stream into provider-neutral chunks.

pub mod client;
pub mod error;
pub mod streaming;

pub use client::OpenAi;

// Re-export chatstream-types for convenience
pub use chatstream_types::{Chunk, Provider, ProviderError, StreamHandle};
