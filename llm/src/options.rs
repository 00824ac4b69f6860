//! Per-call generation options.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default bound on the size-governed input field, in bytes.
pub const DEFAULT_INPUT_LIMIT: usize = 30_000;

/// Options for a single `generate` call.
///
/// Created per call and discarded after the caller consumes the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model override. Falls back to the adapter's configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Maximum output size in tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Bound for the size-governed input field. Defaults to
    /// [`DEFAULT_INPUT_LIMIT`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_limit: Option<usize>,
    /// Raw template string with `{NAME}` placeholders.
    pub template: String,
    /// Placeholder name to replacement text. Keys are unique, insertion
    /// order irrelevant.
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl GenerationOptions {
    /// Create options for the given template.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Default::default()
        }
    }

    /// Add one placeholder binding.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Set the model override.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the input size limit.
    pub fn with_input_limit(mut self, limit: usize) -> Self {
        self.input_limit = Some(limit);
        self
    }
}
