//! Generation output records.

use crate::ProviderKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The partial result an adapter's backend hook returns.
///
/// The pipeline merges this with its own truncation bookkeeping to produce
/// the final [`GeneratedResult`].
#[derive(Debug, Clone, Default)]
pub struct BackendOutput {
    /// Generated text.
    pub text: String,
    /// Model that actually served the request.
    pub model: String,
    /// Token/usage count, when the backend reports one.
    pub tokens_used: Option<u32>,
    /// Backend-specific metadata (finish reason, request id, ...).
    pub metadata: BTreeMap<String, Value>,
}

/// The final output of a `generate` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedResult {
    /// Generated text.
    pub text: String,
    /// Model that actually served the request.
    pub model: String,
    /// Which backend family produced this result.
    pub provider: ProviderKind,
    /// Token/usage count, when the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
    /// Whether the size-governed input field was cut.
    pub truncated: bool,
    /// Size of the input field before truncation, in bytes.
    pub original_input_size: usize,
    /// Size of the input field actually sent, marker included.
    pub final_input_size: usize,
    /// Free-form metadata from the backend.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}
