//! Stream handle and in-stream error types.

use std::fmt;

use tokio::sync::mpsc;

use crate::types::Chunk;

/// An error that occurred after a stream started.
///
/// Carried inside a [`Chunk`] rather than returned from the request call, so
/// callers only ever inspect one failure surface per request. Nothing in this
/// layer retries; `is_retryable` is advisory metadata for callers that do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamError {
    /// Human-readable description of the failure.
    pub message: String,
    /// Whether a caller-level retry of the whole request is likely to help.
    pub is_retryable: bool,
}

impl StreamError {
    /// An error worth retrying at the caller's discretion (transport drops,
    /// overload).
    #[must_use]
    pub fn retryable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_retryable: true,
        }
    }

    /// An error a retry will not fix (malformed payloads, protocol errors).
    #[must_use]
    pub fn non_retryable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_retryable: false,
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for StreamError {}

/// Handle to one in-flight streaming response.
///
/// The receiving half of a bounded channel (capacity 1): the producer never
/// blocks on a caller that has not begun consuming, but back-pressure applies
/// once the slot is full. The channel closes exactly once, whichever way the
/// stream ends.
///
/// Cancellation is cooperative. A caller that cancels may still observe one
/// already-decoded chunk that was in flight when the signal landed; do not
/// assume strict silence after cancelling.
pub struct StreamHandle {
    /// The chunk channel. Consume with [`StreamHandle::recv`].
    pub receiver: mpsc::Receiver<Chunk>,
}

impl StreamHandle {
    /// Receive the next chunk, or `None` once the stream has ended.
    pub async fn recv(&mut self) -> Option<Chunk> {
        self.receiver.recv().await
    }
}

impl fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamHandle").finish_non_exhaustive()
    }
}
