//! Unified `Provider` enum with enum dispatch over concrete adapters.

use claude::Claude;
use gemini::Gemini;
use llm::{
    BackendOutput, GenerationOptions, Generator, ProviderCapabilities, ProviderError, ProviderKind,
};
use ollama::Ollama;
use openai::OpenAI;

/// Unified description provider.
///
/// Callers construct the appropriate variant via
/// [`build_provider`](crate::build_provider); the generation pipeline is
/// monomorphized on `Provider`.
#[derive(Clone)]
pub enum Provider {
    /// OpenAI chat completions API.
    OpenAI(OpenAI),
    /// Claude (Anthropic) Messages API.
    Claude(Claude),
    /// Google Gemini API.
    Gemini(Gemini),
    /// Local inference via an Ollama server.
    Ollama(Ollama),
}

impl Generator for Provider {
    fn kind(&self) -> ProviderKind {
        match self {
            Self::OpenAI(p) => p.kind(),
            Self::Claude(p) => p.kind(),
            Self::Gemini(p) => p.kind(),
            Self::Ollama(p) => p.kind(),
        }
    }

    fn capabilities(&self) -> ProviderCapabilities {
        match self {
            Self::OpenAI(p) => p.capabilities(),
            Self::Claude(p) => p.capabilities(),
            Self::Gemini(p) => p.capabilities(),
            Self::Ollama(p) => p.capabilities(),
        }
    }

    fn validate_config(&self) -> Result<(), ProviderError> {
        match self {
            Self::OpenAI(p) => p.validate_config(),
            Self::Claude(p) => p.validate_config(),
            Self::Gemini(p) => p.validate_config(),
            Self::Ollama(p) => p.validate_config(),
        }
    }

    async fn test_connection(&self) -> Result<bool, ProviderError> {
        match self {
            Self::OpenAI(p) => p.test_connection().await,
            Self::Claude(p) => p.test_connection().await,
            Self::Gemini(p) => p.test_connection().await,
            Self::Ollama(p) => p.test_connection().await,
        }
    }

    async fn execute(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<BackendOutput, ProviderError> {
        match self {
            Self::OpenAI(p) => p.execute(prompt, options).await,
            Self::Claude(p) => p.execute(prompt, options).await,
            Self::Gemini(p) => p.execute(prompt, options).await,
            Self::Ollama(p) => p.execute(prompt, options).await,
        }
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Provider").field(&self.kind()).finish()
    }
}
