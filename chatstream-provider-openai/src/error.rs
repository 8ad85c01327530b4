//! Internal error helpers for mapping HTTP/reqwest errors to [`ProviderError`].

use std::time::Duration;

use chatstream_types::ProviderError;

/// Map an HTTP status code (from an OpenAI-compatible API) to a
/// [`ProviderError`].
///
/// The status is kept in the message so callers see it without matching on
/// variants. Reference: <https://platform.openai.com/docs/guides/error-codes>
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> ProviderError {
    let detail = format!("HTTP {status}: {body}");
    match status.as_u16() {
        401 | 403 => ProviderError::Authentication(detail),
        400 => ProviderError::InvalidRequest(detail),
        404 => ProviderError::ModelNotFound(detail),
        429 => ProviderError::RateLimit {
            message: detail,
            retry_after: parse_retry_after(body),
        },
        500 | 502 | 503 => ProviderError::ServiceUnavailable(detail),
        _ => ProviderError::InvalidRequest(detail),
    }
}

/// Attempt to parse a retry delay from an OpenAI error body.
///
/// OpenAI sometimes includes "Please retry after X seconds" in the error
/// message. Best-effort; returns `None` if no delay can be extracted.
fn parse_retry_after(body: &str) -> Option<Duration> {
    let lower = body.to_lowercase();
    let idx = lower.find("retry after ")?;
    let after = &lower[idx + 12..];
    let num_str: String = after.chars().take_while(|c| c.is_ascii_digit()).collect();
    num_str.parse::<u64>().ok().map(Duration::from_secs)
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
        let err = map_http_status(reqwest::StatusCode::UNAUTHORIZED, "Incorrect API key");
        assert!(matches!(err, ProviderError::Authentication(_)));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn map_404_to_model_not_found() {
        let err = map_http_status(reqwest::StatusCode::NOT_FOUND, "Model does not exist");
        assert!(matches!(err, ProviderError::ModelNotFound(_)));
    }

    #[test]
    fn map_429_with_retry_after() {
        let err = map_http_status(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            "Please retry after 60 seconds",
        );
        match &err {
            ProviderError::RateLimit { retry_after, .. } => {
                assert_eq!(*retry_after, Some(Duration::from_secs(60)));
            }
            other => panic!("expected RateLimit, got: {other:?}"),
        }
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("retry after 60 seconds"));
    }

    #[test]
    fn map_503_to_service_unavailable() {
        let err = map_http_status(reqwest::StatusCode::SERVICE_UNAVAILABLE, "busy");
        assert!(matches!(err, ProviderError::ServiceUnavailable(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn parse_retry_after_extracts_seconds() {
        assert_eq!(
            parse_retry_after("Please retry after 30 seconds"),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn parse_retry_after_returns_none_when_not_found() {
        assert_eq!(parse_retry_after("Generic error message"), None);
    }
}
