//! OpenAI description provider.
//!
//! Binds the generation contract to the OpenAI chat completions API.

use llm::{
    ErrorKind, ProviderCapabilities, ProviderConfig, ProviderError, ProviderKind,
    reqwest::{Client, header::HeaderMap},
};
pub use request::{Request, Response};

mod error;
mod provider;
mod request;

/// OpenAI endpoint URLs.
pub mod endpoint {
    /// OpenAI API base.
    pub const OPENAI: &str = "https://api.openai.com/v1";
}

/// Models this adapter advertises, first is the default.
pub const MODELS: &[&str] = &["gpt-4o", "gpt-4o-mini", "gpt-4-turbo", "gpt-3.5-turbo"];

/// An OpenAI description provider.
#[derive(Clone, Debug)]
pub struct OpenAI {
    /// The HTTP client, timeout baked in. Never mutated after construction.
    client: Client,
    /// Request headers (authorization, content-type).
    headers: HeaderMap,
    /// API base URL.
    base: String,
    /// Owned configuration.
    config: ProviderConfig,
}

impl OpenAI {
    /// Create an adapter from config.
    ///
    /// Fails fast with `INVALID_API_KEY` when the credential is missing —
    /// no network call is made here.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        use llm::reqwest::header;

        if config.api_key.trim().is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::InvalidApiKey,
                ProviderKind::OpenAI,
                "an OpenAI API key is required",
            ));
        }

        let json = header::HeaderValue::from_static("application/json");
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, json.clone());
        headers.insert(header::ACCEPT, json);
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", config.api_key).parse().map_err(|_| {
                ProviderError::for_provider(
                    ErrorKind::InvalidApiKey,
                    ProviderKind::OpenAI,
                    "the OpenAI API key contains invalid header characters",
                )
            })?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::for_provider(
                    ErrorKind::NetworkError,
                    ProviderKind::OpenAI,
                    "failed to build HTTP client",
                )
                .with_source(e)
            })?;

        let base = config
            .base_url
            .clone()
            .unwrap_or_else(|| endpoint::OPENAI.to_owned());

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

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base.trim_end_matches('/'))
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.base.trim_end_matches('/'))
    }

    fn static_capabilities() -> ProviderCapabilities {
        ProviderCapabilities {
            max_context: 128_000,
            models: MODELS.to_vec(),
            streaming: true,
            cost_per_1k_tokens: Some(0.0025),
            requests_per_minute: Some(500),
        }
    }
}
