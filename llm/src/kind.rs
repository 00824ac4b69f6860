//! Provider identity.

use serde::{Deserialize, Serialize};

/// Identifies which backend family an adapter belongs to.
///
/// Fixed at construction time; every [`GeneratedResult`](crate::GeneratedResult)
/// and [`ProviderError`](crate::ProviderError) carries the kind of the adapter
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// OpenAI chat completions API.
    #[serde(rename = "openai")]
    OpenAI,
    /// Claude (Anthropic) Messages API.
    Claude,
    /// Google Gemini API.
    Gemini,
    /// Local inference via an Ollama server.
    Ollama,
}

impl ProviderKind {
    /// Stable string form, used in logs and protocol messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Claude => "claude",
            Self::Gemini => "gemini",
            Self::Ollama => "ollama",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
