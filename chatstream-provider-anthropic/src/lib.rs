//! Anthropic Messages API provider for chatstream.
//!
//! Implements the [`Provider`] trait from `chatstream-types` for the
//! [Anthropic Messages API](https://docs.anthropic.com/en/api/messages),
//! decoding its event-typed SSE stream into provider-neutral chunks.

pub mod client;
pub mod error;
pub mod streaming;

pub use client::Anthropic;

// Re-export chatstream-types for convenience
pub use chatstream_types::{Chunk, Provider, ProviderError, StreamHandle};
