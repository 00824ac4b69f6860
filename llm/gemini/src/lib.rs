//! Google Gemini description provider.
//!
//! Binds the generation contract to the Gemini `generateContent` API.

use llm::{
    ErrorKind, ProviderCapabilities, ProviderConfig, ProviderError, ProviderKind,
    reqwest::{Client, header::HeaderMap},
};
pub use request::{Request, Response};

mod error;
mod provider;
mod request;

/// Gemini endpoint URLs.
pub mod endpoint {
    /// Generative Language API base.
    pub const GEMINI: &str = "https://generativelanguage.googleapis.com";
}

/// Models this adapter advertises, first is the default.
pub const MODELS: &[&str] = &["gemini-2.0-flash", "gemini-2.0-pro", "gemini-1.5-flash"];

/// A Gemini description provider.
#[derive(Clone, Debug)]
pub struct Gemini {
    /// The HTTP client, timeout baked in. Never mutated after construction.
    client: Client,
    /// Request headers (x-goog-api-key, content-type).
    headers: HeaderMap,
    /// API base URL.
    base: String,
    /// Owned configuration.
    config: ProviderConfig,
}

impl Gemini {
    /// Create an adapter from config.
    ///
    /// Fails fast with `INVALID_API_KEY` when the credential is missing —
    /// no network call is made here.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        use llm::reqwest::header;

        if config.api_key.trim().is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::InvalidApiKey,
                ProviderKind::Gemini,
                "a Gemini API key is required",
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            "x-goog-api-key",
            config.api_key.parse().map_err(|_| {
                ProviderError::for_provider(
                    ErrorKind::InvalidApiKey,
                    ProviderKind::Gemini,
                    "the Gemini API key contains invalid header characters",
                )
            })?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::for_provider(
                    ErrorKind::NetworkError,
                    ProviderKind::Gemini,
                    "failed to build HTTP client",
                )
                .with_source(e)
            })?;

        let base = config
            .base_url
            .clone()
            .unwrap_or_else(|| endpoint::GEMINI.to_owned());

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

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{model}:generateContent",
            self.base.trim_end_matches('/')
        )
    }

    fn models_url(&self) -> String {
        format!("{}/v1beta/models", self.base.trim_end_matches('/'))
    }

    fn static_capabilities() -> ProviderCapabilities {
        ProviderCapabilities {
            max_context: 1_000_000,
            models: MODELS.to_vec(),
            streaming: true,
            cost_per_1k_tokens: Some(0.0001),
            requests_per_minute: Some(15),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Gemini, endpoint};
    use llm::{ErrorKind, ProviderConfig};

    #[test]
    fn missing_key_fails_fast() {
        let err = Gemini::new(ProviderConfig::new("", "gemini-2.0-flash")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidApiKey);
    }

    #[test]
    fn default_base_url() {
        let provider =
            Gemini::new(ProviderConfig::new("AIza-test", "gemini-2.0-flash")).expect("provider");
        assert_eq!(provider.base(), endpoint::GEMINI);
    }

    #[test]
    fn generate_url_embeds_model() {
        let provider =
            Gemini::new(ProviderConfig::new("AIza-test", "gemini-2.0-flash")).expect("provider");
        assert_eq!(
            provider.generate_url("gemini-2.0-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
