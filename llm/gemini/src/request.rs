//! Request and response bodies for the Gemini `generateContent` API.

use llm::{ErrorKind, GenerationOptions, ProviderError, ProviderKind};
use serde::{Deserialize, Serialize};

/// The request body for `generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// The conversation contents.
    pub contents: Vec<Content>,
    /// Generation parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One content entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// The parts of the content.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a content entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Text payload.
    #[serde(default)]
    pub text: Option<String>,
}

/// Generation parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum output tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl Request {
    /// Build a single-turn request carrying the final prompt.
    pub fn new(prompt: &str, options: &GenerationOptions) -> Self {
        let generation_config =
            if options.temperature.is_some() || options.max_tokens.is_some() {
                Some(GenerationConfig {
                    temperature: options.temperature,
                    max_output_tokens: options.max_tokens,
                })
            } else {
                None
            };
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_owned()),
                }],
            }],
            generation_config,
        }
    }
}

/// The response body for `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// The generated candidates.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Prompt-level feedback (safety blocks).
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    /// Token usage.
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
    /// The model version that served the request.
    #[serde(default)]
    pub model_version: Option<String>,
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The candidate content.
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Prompt-level safety feedback.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked, if it was.
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Token usage accounting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Total tokens consumed by the request.
    #[serde(default)]
    pub total_token_count: u32,
}

impl Response {
    /// Extract the generated text, enforcing safety blocks.
    pub fn text(&self) -> Result<String, ProviderError> {
        if let Some(feedback) = &self.prompt_feedback
            && let Some(reason) = &feedback.block_reason
        {
            return Err(ProviderError::for_provider(
                ErrorKind::ContentFilter,
                ProviderKind::Gemini,
                format!("prompt blocked: {reason}"),
            ));
        }

        let candidate = self.candidates.first().ok_or_else(|| {
            ProviderError::for_provider(
                ErrorKind::UnknownError,
                ProviderKind::Gemini,
                "response contained no candidates",
            )
        })?;
        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(ProviderError::for_provider(
                ErrorKind::ContentFilter,
                ProviderKind::Gemini,
                "generation stopped for safety reasons",
            ));
        }

        Ok(candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join(""))
    }
}
