//! Canonical error taxonomy.
//!
//! Every backend failure is normalized into exactly one [`ProviderError`]
//! at the adapter boundary; native transport or API errors never cross it.
//! The kind set is closed so callers can match on it for transport-agnostic
//! handling and retry decisions.

use crate::ProviderKind;
use thiserror::Error;

/// Canonical error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The credential is missing, malformed, or rejected.
    InvalidApiKey,
    /// The account's usage quota is exhausted.
    QuotaExceeded,
    /// The backend throttled the request.
    RateLimited,
    /// The requested model does not exist or is not accessible.
    ModelNotFound,
    /// The backend refused to generate for the given content.
    ContentFilter,
    /// The prompt exceeds the model's context window.
    TokenLimitExceeded,
    /// Transport-level failure reaching the backend.
    NetworkError,
    /// The request timed out; no partial result is available.
    Timeout,
    /// The request was malformed (including template validation failures).
    InvalidRequest,
    /// No provider can serve the request, or the backend is down.
    ProviderUnavailable,
    /// Anything the per-backend lookup tables could not classify.
    UnknownError,
}

impl ErrorKind {
    /// Stable wire identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::QuotaExceeded => "QUOTA_EXCEEDED",
            Self::RateLimited => "RATE_LIMITED",
            Self::ModelNotFound => "MODEL_NOT_FOUND",
            Self::ContentFilter => "CONTENT_FILTER",
            Self::TokenLimitExceeded => "TOKEN_LIMIT_EXCEEDED",
            Self::NetworkError => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::ProviderUnavailable => "PROVIDER_UNAVAILABLE",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }

    /// Stable human-readable summary, one per kind.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => "the API key is invalid or missing",
            Self::QuotaExceeded => "the usage quota has been exceeded",
            Self::RateLimited => "the provider is rate limiting requests",
            Self::ModelNotFound => "the requested model was not found",
            Self::ContentFilter => "the content was blocked by the provider's filter",
            Self::TokenLimitExceeded => "the input exceeds the model's token limit",
            Self::NetworkError => "a network error occurred while contacting the provider",
            Self::Timeout => "the request to the provider timed out",
            Self::InvalidRequest => "the request was invalid",
            Self::ProviderUnavailable => "no provider is available to serve the request",
            Self::UnknownError => "an unknown provider error occurred",
        }
    }

    /// Whether retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::Timeout | Self::NetworkError | Self::ProviderUnavailable
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized provider error.
///
/// Carries the canonical kind, the identity of the adapter that produced it
/// (absent for registry-level failures), a human-readable message, and the
/// transport status plus wrapped original error when available, so no
/// diagnostic fidelity is lost in normalization.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct ProviderError {
    /// Canonical kind.
    pub kind: ErrorKind,
    /// Which adapter raised this, when one was involved.
    pub provider: Option<ProviderKind>,
    /// Human-readable detail.
    pub message: String,
    /// HTTP status code, when the failure came off the wire.
    pub status: Option<u16>,
    /// The original error, preserved for diagnostics.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ProviderError {
    /// Create an error with no provider attribution.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            provider: None,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Create an error raised by a specific adapter.
    pub fn for_provider(kind: ErrorKind, provider: ProviderKind, message: impl Into<String>) -> Self {
        Self {
            provider: Some(provider),
            ..Self::new(kind, message)
        }
    }

    /// Attach the transport status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the wrapped original error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Whether retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    /// Classify a transport error from `reqwest`.
    ///
    /// Timeouts map to [`ErrorKind::Timeout`]; everything else that never
    /// produced a response is a [`ErrorKind::NetworkError`].
    pub fn from_transport(provider: ProviderKind, err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else {
            ErrorKind::NetworkError
        };
        let status = err.status().map(|s| s.as_u16());
        let mut out = Self::for_provider(kind, provider, err.to_string()).with_source(err);
        out.status = status;
        out
    }
}
