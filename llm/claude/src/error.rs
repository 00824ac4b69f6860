//! Anthropic error normalization.

use llm::{ErrorKind, ProviderError, ProviderKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Map a non-success HTTP response to one canonical error.
///
/// The native `error.type` wins over the bare status; anything unrecognized
/// falls back to `UNKNOWN_ERROR` with message and status kept.
pub fn normalize(status: u16, body: &str) -> ProviderError {
    let detail = serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error);
    let message = detail
        .as_ref()
        .and_then(|d| d.message.clone())
        .unwrap_or_else(|| format!("Anthropic API error (HTTP {status})"));
    let native = detail.as_ref().and_then(|d| d.kind.clone());

    let kind = match native.as_deref() {
        Some("authentication_error" | "permission_error") => ErrorKind::InvalidApiKey,
        Some("rate_limit_error") => ErrorKind::RateLimited,
        Some("not_found_error") => ErrorKind::ModelNotFound,
        Some("request_too_large") => ErrorKind::TokenLimitExceeded,
        Some("invalid_request_error") => ErrorKind::InvalidRequest,
        Some("overloaded_error" | "api_error") => ErrorKind::ProviderUnavailable,
        Some("billing_error") => ErrorKind::QuotaExceeded,
        _ => from_status(status),
    };

    if kind == ErrorKind::UnknownError {
        tracing::warn!(status, native = ?native, "unclassified Anthropic error");
    }
    ProviderError::for_provider(kind, ProviderKind::Claude, message).with_status(status)
}

fn from_status(status: u16) -> ErrorKind {
    match status {
        401 | 403 => ErrorKind::InvalidApiKey,
        404 => ErrorKind::ModelNotFound,
        408 => ErrorKind::Timeout,
        413 => ErrorKind::TokenLimitExceeded,
        429 => ErrorKind::RateLimited,
        400 | 422 => ErrorKind::InvalidRequest,
        500..=599 => ErrorKind::ProviderUnavailable,
        _ => ErrorKind::UnknownError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_error_maps_to_invalid_api_key() {
        let err = normalize(
            401,
            r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#,
        );
        assert_eq!(err.kind, ErrorKind::InvalidApiKey);
        assert_eq!(err.message, "invalid x-api-key");
        assert!(!err.is_retryable());
    }

    #[test]
    fn overloaded_error_is_retryable() {
        let err = normalize(
            529,
            r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#,
        );
        assert_eq!(err.kind, ErrorKind::ProviderUnavailable);
        assert!(err.is_retryable());
        assert_eq!(err.status, Some(529));
    }

    #[test]
    fn rate_limit_error_maps() {
        let err = normalize(
            429,
            r#"{"type":"error","error":{"type":"rate_limit_error","message":"Too many requests"}}"#,
        );
        assert_eq!(err.kind, ErrorKind::RateLimited);
    }

    #[test]
    fn request_too_large_maps_to_token_limit() {
        let err = normalize(
            413,
            r#"{"type":"error","error":{"type":"request_too_large","message":"Prompt too long"}}"#,
        );
        assert_eq!(err.kind, ErrorKind::TokenLimitExceeded);
    }

    #[test]
    fn unparseable_body_falls_back_to_status() {
        let err = normalize(500, "upstream blew up");
        assert_eq!(err.kind, ErrorKind::ProviderUnavailable);
        assert!(err.message.contains("500"));
    }
}
