//! Error types for chatstream crates.

use std::time::Duration;

/// Errors surfaced synchronously by a provider, before any stream exists.
///
/// Failures that occur after a stream has started are delivered as an
/// error-bearing [`Chunk`](crate::Chunk) on the channel instead.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    // Retryable errors
    /// Network-level error (connection refused, reset, DNS failure).
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Rate limited by the provider.
    #[error("rate limited: {message}")]
    RateLimit {
        /// Status and response body from the API.
        message: String,
        /// Suggested retry delay, if the API provided one.
        retry_after: Option<Duration>,
    },
    /// Request timed out.
    #[error("timeout after {0:?}")]
    Timeout(Duration),
    /// Provider service is temporarily unavailable or overloaded.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    // Terminal errors
    /// Authentication/authorization failure.
    #[error("authentication failed: {0}")]
    Authentication(String),
    /// Malformed or invalid request, including body serialization failures.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Requested model does not exist.
    #[error("model not found: {0}")]
    ModelNotFound(String),
}

impl ProviderError {
    /// Whether this error is likely transient and the request can be retried.
    ///
    /// This layer never retries; the classification is for callers.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::RateLimit { .. } | Self::Timeout(_) | Self::ServiceUnavailable(_)
        )
    }
}
