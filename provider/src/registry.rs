//! `ProviderRegistry` — named provider map with a default pointer.
//!
//! Entries keep insertion order so kind-based lookup is deterministic.
//! Mutation goes through `&mut self`; read-only lookups take `&self` and may
//! interleave freely. A registry shared across tasks must be wrapped by the
//! caller — no internal locking here.

use crate::Provider;
use llm::{Generator, ProviderCapabilities, ProviderKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// A named map of provider instances, at most one marked default.
#[derive(Default)]
pub struct ProviderRegistry {
    /// Entries in insertion order. Keys are unique.
    entries: Vec<(String, Provider)>,
    /// Key of the designated default entry, when one exists.
    default: Option<String>,
}

/// Per-key outcome of [`ProviderRegistry::health_check`].
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    /// Whether the backend answered the probe.
    pub healthy: bool,
    /// Failure detail, when unhealthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Per-key outcome of [`ProviderRegistry::discover_capabilities`].
#[derive(Debug, Clone, Serialize)]
pub struct Discovered {
    /// Which backend family serves this key.
    pub kind: ProviderKind,
    /// The adapter's static capability description.
    pub capabilities: ProviderCapabilities,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under `key`. Re-registering an existing key
    /// replaces the instance in place, keeping its position.
    pub fn register(&mut self, key: impl Into<String>, provider: Provider, make_default: bool) {
        let key = key.into();
        tracing::debug!(key = %key, kind = %provider.kind(), make_default, "registering provider");
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = provider,
            None => self.entries.push((key.clone(), provider)),
        }
        if make_default {
            self.default = Some(key);
        }
    }

    /// Remove the entry under `key`. Clears the default pointer when it
    /// pointed at that key. Returns whether an entry was removed.
    pub fn unregister(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        let removed = self.entries.len() < before;
        if removed && self.default.as_deref() == Some(key) {
            self.default = None;
        }
        removed
    }

    /// Look up a provider by key.
    pub fn get(&self, key: &str) -> Option<&Provider> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p)
    }

    /// First provider of the given kind, in insertion order.
    pub fn get_by_kind(&self, kind: ProviderKind) -> Option<&Provider> {
        self.entries
            .iter()
            .find(|(_, p)| p.kind() == kind)
            .map(|(_, p)| p)
    }

    /// The designated default provider, when one exists.
    pub fn get_default(&self) -> Option<&Provider> {
        self.default.as_deref().and_then(|key| self.get(key))
    }

    /// The key of the designated default entry.
    pub fn default_key(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Registered keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Probe every entry, capturing per-key outcomes. One entry's failure
    /// never aborts the batch.
    pub async fn test_all(&self) -> BTreeMap<String, bool> {
        let mut results = BTreeMap::new();
        for (key, provider) in &self.entries {
            let ok = provider.test_connection().await.unwrap_or(false);
            results.insert(key.clone(), ok);
        }
        results
    }

    /// Like [`test_all`](Self::test_all), but keeps the failure detail for
    /// operational surfacing.
    pub async fn health_check(&self) -> BTreeMap<String, Health> {
        let mut results = BTreeMap::new();
        for (key, provider) in &self.entries {
            let health = match provider.test_connection().await {
                Ok(true) => Health {
                    healthy: true,
                    error: None,
                },
                Ok(false) => Health {
                    healthy: false,
                    error: Some("connection test failed".to_owned()),
                },
                Err(e) => Health {
                    healthy: false,
                    error: Some(e.to_string()),
                },
            };
            results.insert(key.clone(), health);
        }
        results
    }

    /// Static capability description per key, for status endpoints.
    pub fn discover_capabilities(&self) -> BTreeMap<String, Discovered> {
        self.entries
            .iter()
            .map(|(key, provider)| {
                (
                    key.clone(),
                    Discovered {
                        kind: provider.kind(),
                        capabilities: provider.capabilities(),
                    },
                )
            })
            .collect()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .field("default", &self.default)
            .finish()
    }
}
