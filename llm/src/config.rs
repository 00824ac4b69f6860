//! Provider configuration.
//!
//! One `ProviderConfig` is owned by each adapter instance for the process
//! lifetime. Partial updates go through [`ProviderConfig::merge`] so callers
//! never have to rebuild a full record to change one field.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default retry budget passed through to the HTTP transport.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Configuration for a single provider instance.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key or token. Empty for backends that need none (e.g. Ollama).
    #[serde(default)]
    pub api_key: String,
    /// Optional base URL override for the provider endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout. Baked into the adapter's HTTP client.
    #[serde(default = "default_timeout", with = "seconds")]
    pub timeout: Duration,
    /// Max retry count, forwarded to the transport. Not re-implemented here.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Default model identifier, used when a call supplies no override.
    pub model: String,
}

impl ProviderConfig {
    /// Create a config with the given credential and model, defaults elsewhere.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            model: model.into(),
        }
    }

    /// Apply a partial update in place. Only the `Some` fields of `update`
    /// are written; everything else keeps its current value.
    pub fn merge(&mut self, update: ConfigUpdate) {
        if let Some(api_key) = update.api_key {
            self.api_key = api_key;
        }
        if let Some(base_url) = update.base_url {
            self.base_url = Some(base_url);
        }
        if let Some(timeout) = update.timeout {
            self.timeout = timeout;
        }
        if let Some(max_retries) = update.max_retries {
            self.max_retries = max_retries;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
    }
}

// Credential material must never reach logs, so Debug redacts it.
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("model", &self.model)
            .finish()
    }
}

/// Partial update for [`ProviderConfig::merge`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigUpdate {
    /// Replacement API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Replacement base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Replacement timeout.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_seconds")]
    pub timeout: Option<Duration>,
    /// Replacement retry budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
    /// Replacement default model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

fn redact(key: &str) -> &'static str {
    if key.is_empty() { "<empty>" } else { "<redacted>" }
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

mod seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(deserializer)?))
    }
}

mod opt_seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
    }
}
