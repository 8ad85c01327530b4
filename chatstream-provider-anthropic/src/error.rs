//! Internal error helpers for mapping HTTP/reqwest errors to [`ProviderError`].

use std::time::Duration;

use chatstream_types::ProviderError;

/// Map an HTTP status code (from the Anthropic API) to a [`ProviderError`].
///
/// The status is kept in the message so callers see it without matching on
/// variants. Reference: <https://docs.anthropic.com/en/api/errors>
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> ProviderError {
    let detail = format!("HTTP {status}: {body}");
    match status.as_u16() {
        401 | 403 => ProviderError::Authentication(detail),
        400 => ProviderError::InvalidRequest(detail),
        404 => ProviderError::ModelNotFound(detail),
        // The retry delay comes in the Retry-After header, not the body
        429 => ProviderError::RateLimit {
            message: detail,
            retry_after: None,
        },
        // 529 is Anthropic's overloaded status
        500..=599 => ProviderError::ServiceUnavailable(detail),
        _ => ProviderError::InvalidRequest(detail),
    }
}

/// Map a [`reqwest::Error`] to a [`ProviderError`].
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(Duration::from_secs(30))
    } else {
        ProviderError::Network(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_401_to_authentication_with_status_in_message() {
        let err = map_http_status(reqwest::StatusCode::UNAUTHORIZED, "Invalid API key");
        assert!(matches!(err, ProviderError::Authentication(_)));
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Invalid API key"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn map_400_to_invalid_request() {
        let err = map_http_status(reqwest::StatusCode::BAD_REQUEST, "Bad request");
        assert!(matches!(err, ProviderError::InvalidRequest(_)));
    }

    #[test]
    fn map_404_to_model_not_found() {
        let err = map_http_status(reqwest::StatusCode::NOT_FOUND, "Model not found");
        assert!(matches!(err, ProviderError::ModelNotFound(_)));
    }

    #[test]
    fn map_429_to_rate_limit() {
        let err = map_http_status(reqwest::StatusCode::TOO_MANY_REQUESTS, "Too many requests");
        assert!(matches!(err, ProviderError::RateLimit { .. }));
        assert!(err.is_retryable());
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn map_529_to_service_unavailable() {
        let status = reqwest::StatusCode::from_u16(529).unwrap();
        let err = map_http_status(status, "Overloaded");
        assert!(matches!(err, ProviderError::ServiceUnavailable(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn map_unknown_status_to_invalid_request() {
        let err = map_http_status(reqwest::StatusCode::IM_A_TEAPOT, "teapot");
        assert!(matches!(err, ProviderError::InvalidRequest(_)));
        assert!(err.to_string().contains("418"));
    }
}
