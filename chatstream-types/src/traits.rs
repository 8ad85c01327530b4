//! Core trait: Provider.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::ProviderError;
use crate::stream::StreamHandle;
use crate::types::ChatMessage;

/// A chat backend that can stream a completion.
///
/// Uses RPITIT (return position impl trait in trait) — Rust 2024 native async.
/// Not object-safe by design; for heterogeneous collections use the
/// `ChatProvider` enum in the umbrella crate.
///
/// The returned error covers request construction and dispatch only (bad
/// serialization, connection refused, non-success HTTP status). Everything
/// that goes wrong after the stream starts arrives as an error-bearing chunk
/// on the handle, never as a second error surface.
pub trait Provider: Send + Sync {
    /// Send the conversation and stream back the response.
    ///
    /// Cancelling `cancel` stops the stream promptly and releases the
    /// underlying connection. The handle is returned immediately; chunks
    /// arrive as the model produces them.
    fn stream_chat(
        &self,
        cancel: CancellationToken,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<StreamHandle, ProviderError>> + Send;

    /// The configured name of this provider instance.
    fn name(&self) -> &str;
}
