//! Ollama description provider.
//!
//! Binds the generation contract to a local or self-hosted Ollama server.
//! No credential is required, but the endpoint URL and model name must be
//! configured explicitly.

use llm::{
    ErrorKind, ProviderCapabilities, ProviderConfig, ProviderError, ProviderKind, reqwest::Client,
};
pub use request::{Request, Response};

mod error;
mod provider;
mod request;

/// Models this adapter advertises, first is the default. A local install
/// may carry any subset; this list is descriptive only.
pub const MODELS: &[&str] = &["llama3.1", "mistral", "codellama", "qwen2.5-coder"];

/// An Ollama description provider.
#[derive(Clone, Debug)]
pub struct Ollama {
    /// The HTTP client, timeout baked in. Never mutated after construction.
    client: Client,
    /// Server base URL.
    base: String,
    /// Owned configuration.
    config: ProviderConfig,
}

impl Ollama {
    /// Create an adapter from config.
    ///
    /// Fails fast with `INVALID_REQUEST` when the endpoint URL or the model
    /// name is missing — a self-hosted backend has no usable defaults to
    /// fall back on.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let base = match config.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_owned(),
            _ => {
                return Err(ProviderError::for_provider(
                    ErrorKind::InvalidRequest,
                    ProviderKind::Ollama,
                    "an Ollama endpoint URL is required",
                ));
            }
        };
        if config.model.trim().is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::InvalidRequest,
                ProviderKind::Ollama,
                "an Ollama model name is required",
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::for_provider(
                    ErrorKind::NetworkError,
                    ProviderKind::Ollama,
                    "failed to build HTTP client",
                )
                .with_source(e)
            })?;

        Ok(Self {
            client,
            base,
            config,
        })
    }

    /// The server base URL in use.
    pub fn base(&self) -> &str {
        &self.base
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base.trim_end_matches('/'))
    }

    fn tags_url(&self) -> String {
        format!("{}/api/tags", self.base.trim_end_matches('/'))
    }

    fn static_capabilities() -> ProviderCapabilities {
        ProviderCapabilities {
            max_context: 8_192,
            models: MODELS.to_vec(),
            streaming: true,
            cost_per_1k_tokens: None,
            requests_per_minute: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ollama;
    use llm::{ErrorKind, ProviderConfig};

    fn local_config() -> ProviderConfig {
        let mut config = ProviderConfig::new("", "llama3.1");
        config.base_url = Some("http://localhost:11434".into());
        config
    }

    #[test]
    fn missing_endpoint_fails_fast() {
        let err = Ollama::new(ProviderConfig::new("", "llama3.1")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRequest);
        assert!(err.message.contains("endpoint"));
    }

    #[test]
    fn missing_model_fails_fast() {
        let mut config = ProviderConfig::new("", "");
        config.base_url = Some("http://localhost:11434".into());
        let err = Ollama::new(config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRequest);
        assert!(err.message.contains("model"));
    }

    #[test]
    fn no_credential_is_required() {
        let provider = Ollama::new(local_config()).expect("provider");
        assert_eq!(provider.generate_url(), "http://localhost:11434/api/generate");
    }
}
