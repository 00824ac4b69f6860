//! Gemini error normalization.

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
    status: Option<String>,
}

/// Map a non-success HTTP response to one canonical error.
///
/// The gRPC-style `error.status` wins over the bare HTTP status; a
/// `RESOURCE_EXHAUSTED` splits into quota vs. rate limiting on the message.
pub fn normalize(status: u16, body: &str) -> ProviderError {
    let detail = serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error);
    let message = detail
        .as_ref()
        .and_then(|d| d.message.clone())
        .unwrap_or_else(|| format!("Gemini API error (HTTP {status})"));
    let native = detail.as_ref().and_then(|d| d.status.clone());

    let kind = match native.as_deref() {
        Some("UNAUTHENTICATED" | "PERMISSION_DENIED") => ErrorKind::InvalidApiKey,
        Some("RESOURCE_EXHAUSTED") => {
            let lower = message.to_ascii_lowercase();
            if lower.contains("quota") {
                ErrorKind::QuotaExceeded
            } else {
                ErrorKind::RateLimited
            }
        }
        Some("NOT_FOUND") => ErrorKind::ModelNotFound,
        Some("INVALID_ARGUMENT" | "FAILED_PRECONDITION") => ErrorKind::InvalidRequest,
        Some("DEADLINE_EXCEEDED") => ErrorKind::Timeout,
        Some("UNAVAILABLE" | "INTERNAL") => ErrorKind::ProviderUnavailable,
        _ => from_status(status),
    };

    if kind == ErrorKind::UnknownError {
        tracing::warn!(status, native = ?native, "unclassified Gemini error");
    }
    ProviderError::for_provider(kind, ProviderKind::Gemini, message).with_status(status)
}

fn from_status(status: u16) -> ErrorKind {
    match status {
        401 | 403 => ErrorKind::InvalidApiKey,
        404 => ErrorKind::ModelNotFound,
        408 => ErrorKind::Timeout,
        429 => ErrorKind::RateLimited,
        400 => ErrorKind::InvalidRequest,
        500..=599 => ErrorKind::ProviderUnavailable,
        _ => ErrorKind::UnknownError,
    }
}
