//! OpenAI error normalization.

use llm::{ErrorKind, ProviderError, ProviderKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

/// Map a non-success HTTP response to one canonical error.
///
/// The native `error.code`/`error.type` wins over the bare status; anything
/// unrecognized falls back to `UNKNOWN_ERROR` with message and status kept.
pub fn normalize(status: u16, body: &str) -> ProviderError {
    let detail = serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error);
    let message = detail
        .as_ref()
        .and_then(|d| d.message.clone())
        .unwrap_or_else(|| format!("OpenAI API error (HTTP {status})"));
    let code = detail
        .as_ref()
        .and_then(|d| d.code.as_deref().or(d.kind.as_deref()).map(str::to_owned));

    let kind = match code.as_deref() {
        Some("invalid_api_key" | "authentication_error" | "invalid_organization") => {
            ErrorKind::InvalidApiKey
        }
        Some("insufficient_quota" | "quota_exceeded" | "billing_hard_limit_reached") => {
            ErrorKind::QuotaExceeded
        }
        Some("rate_limit_exceeded" | "rate_limit_error") => ErrorKind::RateLimited,
        Some("model_not_found") => ErrorKind::ModelNotFound,
        Some("context_length_exceeded" | "max_tokens_exceeded") => ErrorKind::TokenLimitExceeded,
        Some("content_filter" | "content_policy_violation") => ErrorKind::ContentFilter,
        _ => from_status(status),
    };

    if kind == ErrorKind::UnknownError {
        tracing::warn!(status, code = ?code, "unclassified OpenAI error");
    }
    ProviderError::for_provider(kind, ProviderKind::OpenAI, message).with_status(status)
}

fn from_status(status: u16) -> ErrorKind {
    match status {
        401 | 403 => ErrorKind::InvalidApiKey,
        404 => ErrorKind::ModelNotFound,
        408 => ErrorKind::Timeout,
        429 => ErrorKind::RateLimited,
        400 | 413 | 422 => ErrorKind::InvalidRequest,
        500..=599 => ErrorKind::ProviderUnavailable,
        _ => ErrorKind::UnknownError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_code_wins_over_status() {
        let err = normalize(
            400,
            r#"{"error":{"message":"bad key","code":"invalid_api_key"}}"#,
        );
        assert_eq!(err.kind, ErrorKind::InvalidApiKey);
        assert_eq!(err.message, "bad key");
        assert_eq!(err.status, Some(400));
    }

    #[test]
    fn insufficient_quota_maps_to_quota_exceeded() {
        let err = normalize(
            429,
            r#"{"error":{"message":"out of credits","code":"insufficient_quota"}}"#,
        );
        assert_eq!(err.kind, ErrorKind::QuotaExceeded);
    }

    #[test]
    fn bare_429_is_rate_limited() {
        let err = normalize(429, r#"{"error":{"message":"slow down"}}"#);
        assert_eq!(err.kind, ErrorKind::RateLimited);
        assert!(err.is_retryable());
    }

    #[test]
    fn context_length_maps_to_token_limit() {
        let err = normalize(
            400,
            r#"{"error":{"message":"too long","code":"context_length_exceeded"}}"#,
        );
        assert_eq!(err.kind, ErrorKind::TokenLimitExceeded);
    }

    #[test]
    fn error_type_field_is_honored() {
        let err = normalize(
            401,
            r#"{"error":{"message":"nope","type":"authentication_error"}}"#,
        );
        assert_eq!(err.kind, ErrorKind::InvalidApiKey);
    }

    #[test]
    fn server_error_is_provider_unavailable() {
        let err = normalize(503, "not json at all");
        assert_eq!(err.kind, ErrorKind::ProviderUnavailable);
        assert!(err.message.contains("503"));
    }

    #[test]
    fn unparseable_body_falls_back_to_status_classification() {
        let err = normalize(418, "<html>teapot</html>");
        assert_eq!(err.kind, ErrorKind::UnknownError);
        assert_eq!(err.status, Some(418));
    }
}
