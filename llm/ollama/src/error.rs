//! Ollama error normalization.

use llm::{ErrorKind, ProviderError, ProviderKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Map a non-success HTTP response to one canonical error.
///
/// Ollama reports a bare `{"error": "..."}` body; the message text is the
/// only discriminator beyond the status code.
pub fn normalize(status: u16, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| format!("Ollama server error (HTTP {status})"));
    let lower = message.to_ascii_lowercase();

    let kind = if lower.contains("not found") && (lower.contains("model") || status == 404) {
        ErrorKind::ModelNotFound
    } else {
        match status {
            404 => ErrorKind::ModelNotFound,
            408 => ErrorKind::Timeout,
            400 => ErrorKind::InvalidRequest,
            500..=599 => ErrorKind::ProviderUnavailable,
            _ => ErrorKind::UnknownError,
        }
    };

    if kind == ErrorKind::UnknownError {
        tracing::warn!(status, "unclassified Ollama error: {message}");
    }
    ProviderError::for_provider(kind, ProviderKind::Ollama, message).with_status(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_maps_to_model_not_found() {
        let err = normalize(404, r#"{"error":"model 'nope' not found, try pulling it first"}"#);
        assert_eq!(err.kind, ErrorKind::ModelNotFound);
        assert!(err.message.contains("try pulling it"));
    }

    #[test]
    fn server_error_is_provider_unavailable() {
        let err = normalize(500, r#"{"error":"something went wrong"}"#);
        assert_eq!(err.kind, ErrorKind::ProviderUnavailable);
    }

    #[test]
    fn bad_request_maps_to_invalid_request() {
        let err = normalize(400, r#"{"error":"missing request body"}"#);
        assert_eq!(err.kind, ErrorKind::InvalidRequest);
    }

    #[test]
    fn unparseable_body_keeps_status_in_message() {
        let err = normalize(502, "bad gateway");
        assert_eq!(err.kind, ErrorKind::ProviderUnavailable);
        assert!(err.message.contains("502"));
    }
}
