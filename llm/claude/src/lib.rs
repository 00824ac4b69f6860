//! Claude (Anthropic) description provider.
//!
//! Binds the generation contract to the Anthropic Messages API.

use llm::{
    ErrorKind, ProviderCapabilities, ProviderConfig, ProviderError, ProviderKind,
    reqwest::{Client, header::HeaderMap},
};
pub use request::{Request, Response};

mod error;
mod provider;
mod request;

/// Claude endpoint URLs.
pub mod endpoint {
    /// Anthropic API base.
    pub const ANTHROPIC: &str = "https://api.anthropic.com";
}

/// The Messages API version header value.
pub const API_VERSION: &str = "2023-06-01";

/// Default output budget when a call does not supply one; the Messages API
/// requires an explicit `max_tokens`.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Models this adapter advertises, first is the default.
pub const MODELS: &[&str] = &[
    "claude-sonnet-4-5",
    "claude-opus-4-1",
    "claude-3-5-haiku-latest",
];

/// A Claude description provider.
#[derive(Clone, Debug)]
pub struct Claude {
    /// The HTTP client, timeout baked in. Never mutated after construction.
    client: Client,
    /// Request headers (x-api-key, anthropic-version, content-type).
    headers: HeaderMap,
    /// API base URL.
    base: String,
    /// Owned configuration.
    config: ProviderConfig,
}

impl Claude {
    /// Create an adapter from config.
    ///
    /// Fails fast with `INVALID_API_KEY` when the credential is missing —
    /// no network call is made here.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        use llm::reqwest::header;

        if config.api_key.trim().is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::InvalidApiKey,
                ProviderKind::Claude,
                "an Anthropic API key is required",
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            "anthropic-version",
            header::HeaderValue::from_static(API_VERSION),
        );
        headers.insert(
            "x-api-key",
            config.api_key.parse().map_err(|_| {
                ProviderError::for_provider(
                    ErrorKind::InvalidApiKey,
                    ProviderKind::Claude,
                    "the Anthropic API key contains invalid header characters",
                )
            })?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::for_provider(
                    ErrorKind::NetworkError,
                    ProviderKind::Claude,
                    "failed to build HTTP client",
                )
                .with_source(e)
            })?;

        let base = config
            .base_url
            .clone()
            .unwrap_or_else(|| endpoint::ANTHROPIC.to_owned());

        Ok(Self {
            client,
            headers,
            base,
            config,
        })
    }

    /// The API base URL in use.
    pub fn base(&self) -> &str {
        &self.base
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base.trim_end_matches('/'))
    }

    fn models_url(&self) -> String {
        format!("{}/v1/models", self.base.trim_end_matches('/'))
    }

    fn static_capabilities() -> ProviderCapabilities {
        ProviderCapabilities {
            max_context: 200_000,
            models: MODELS.to_vec(),
            streaming: true,
            cost_per_1k_tokens: Some(0.003),
            requests_per_minute: Some(50),
        }
    }
}
