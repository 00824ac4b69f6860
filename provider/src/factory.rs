//! Provider construction and fallback resolution.

use crate::{Provider, ProviderRegistry};
use claude::Claude;
use gemini::Gemini;
use llm::{ErrorKind, Generator, ProviderConfig, ProviderError, ProviderKind};
use ollama::Ollama;
use openai::OpenAI;
use serde::{Deserialize, Serialize};

/// Construct a [`Provider`] of the given kind from config.
///
/// Construction is local and fails fast on missing configuration; no
/// network call is made.
pub fn build_provider(
    kind: ProviderKind,
    config: ProviderConfig,
) -> Result<Provider, ProviderError> {
    let provider = match kind {
        ProviderKind::OpenAI => Provider::OpenAI(OpenAI::new(config)?),
        ProviderKind::Claude => Provider::Claude(Claude::new(config)?),
        ProviderKind::Gemini => Provider::Gemini(Gemini::new(config)?),
        ProviderKind::Ollama => Provider::Ollama(Ollama::new(config)?),
    };
    Ok(provider)
}

/// Construct a provider and register it in one step.
pub fn create_and_register(
    registry: &mut ProviderRegistry,
    key: impl Into<String>,
    kind: ProviderKind,
    config: ProviderConfig,
    make_default: bool,
) -> Result<(), ProviderError> {
    let provider = build_provider(kind, config)?;
    registry.register(key, provider, make_default);
    Ok(())
}

/// One entry of a batch initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInit {
    /// Registry key for this entry.
    pub key: String,
    /// Which backend family to construct.
    pub kind: ProviderKind,
    /// Adapter configuration.
    pub config: ProviderConfig,
    /// Whether this entry becomes the registry default.
    #[serde(default)]
    pub default: bool,
}

/// Construct and register a batch, all-or-nothing.
///
/// Every entry is built and has its config validated before anything is
/// registered; the first failure propagates and leaves the registry
/// untouched.
pub fn initialize(
    registry: &mut ProviderRegistry,
    batch: Vec<ProviderInit>,
) -> Result<(), ProviderError> {
    let mut built = Vec::with_capacity(batch.len());
    for init in batch {
        let provider = build_provider(init.kind, init.config)?;
        provider.validate_config()?;
        built.push((init.key, provider, init.default));
    }
    for (key, provider, default) in built {
        registry.register(key, provider, default);
    }
    Ok(())
}

/// Resolve a provider in strict fallback order: the preferred key, then the
/// first provider of the fallback kind, then the registry default.
///
/// Raises `PROVIDER_UNAVAILABLE` when nothing resolves.
pub fn with_fallback<'a>(
    registry: &'a ProviderRegistry,
    preferred: Option<&str>,
    fallback: Option<ProviderKind>,
) -> Result<&'a Provider, ProviderError> {
    if let Some(key) = preferred
        && let Some(provider) = registry.get(key)
    {
        return Ok(provider);
    }
    if let Some(kind) = fallback
        && let Some(provider) = registry.get_by_kind(kind)
    {
        return Ok(provider);
    }
    registry.get_default().ok_or_else(|| {
        ProviderError::new(
            ErrorKind::ProviderUnavailable,
            "no provider could be resolved",
        )
    })
}
