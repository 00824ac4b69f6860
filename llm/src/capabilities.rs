//! Static provider capability descriptions.

use serde::Serialize;

/// Describes what an adapter's backend can do.
///
/// These are adapter-owned constants, descriptive metadata only — nothing
/// here is enforced at runtime.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderCapabilities {
    /// Maximum context window in tokens.
    pub max_context: usize,
    /// Supported models, ordered. The first entry is the conventional default.
    pub models: Vec<&'static str>,
    /// Whether the backend supports streaming token delivery.
    pub streaming: bool,
    /// Indicative cost per 1k tokens in USD, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_1k_tokens: Option<f64>,
    /// Indicative request-per-minute limit, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_per_minute: Option<u32>,
}

impl ProviderCapabilities {
    /// The conventional default model (first of the ordered list).
    pub fn default_model(&self) -> Option<&'static str> {
        self.models.first().copied()
    }
}
