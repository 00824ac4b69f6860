//! Request and response bodies for the Anthropic Messages API.

use crate::DEFAULT_MAX_TOKENS;
use llm::{ErrorKind, GenerationOptions, ProviderError, ProviderKind};
use serde::{Deserialize, Serialize};

/// The request body for the Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: String,
    /// Output token budget. Required by the API.
    pub max_tokens: u32,
    /// The messages to send.
    pub messages: Vec<RequestMessage>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A single message.
#[derive(Debug, Clone, Serialize)]
pub struct RequestMessage {
    /// The role of the message.
    pub role: &'static str,
    /// The content of the message.
    pub content: String,
}

impl Request {
    /// Build a single-turn request carrying the final prompt.
    pub fn new(model: &str, prompt: &str, options: &GenerationOptions) -> Self {
        Self {
            model: model.to_owned(),
            max_tokens: options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            messages: vec![RequestMessage {
                role: "user",
                content: prompt.to_owned(),
            }],
            temperature: options.temperature,
        }
    }
}

/// The response body for the Messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// The content blocks of the reply.
    pub content: Vec<ContentBlock>,
    /// The model that served the request.
    #[serde(default)]
    pub model: Option<String>,
    /// Why generation stopped.
    #[serde(default)]
    pub stop_reason: Option<String>,
    /// Token usage.
    #[serde(default)]
    pub usage: Option<Usage>,
    /// Request identifier.
    #[serde(default)]
    pub id: Option<String>,
}

/// One content block of a reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    /// The block type (`"text"` for generated prose).
    #[serde(rename = "type")]
    pub kind: String,
    /// The text payload, present for text blocks.
    #[serde(default)]
    pub text: Option<String>,
}

/// Token usage accounting.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt.
    #[serde(default)]
    pub input_tokens: u32,
    /// Tokens in the reply.
    #[serde(default)]
    pub output_tokens: u32,
}

impl Usage {
    /// Combined token count.
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

impl Response {
    /// Extract the generated text, enforcing the refusal stop reason.
    pub fn text(&self) -> Result<String, ProviderError> {
        if self.stop_reason.as_deref() == Some("refusal") {
            return Err(ProviderError::for_provider(
                ErrorKind::ContentFilter,
                ProviderKind::Claude,
                "the model declined to generate for this content",
            ));
        }
        let text = self
            .content
            .iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text.as_deref())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::UnknownError,
                ProviderKind::Claude,
                "response contained no text blocks",
            ));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_max_tokens() {
        let req = Request::new("claude-sonnet-4-5", "hi", &GenerationOptions::new("t"));
        assert_eq!(req.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn response_text_joins_text_blocks() {
        let response: Response = serde_json::from_str(
            r#"{"content":[{"type":"text","text":"part one "},{"type":"text","text":"part two"}],
                "stop_reason":"end_turn","usage":{"input_tokens":10,"output_tokens":5}}"#,
        )
        .unwrap();
        assert_eq!(response.text().unwrap(), "part one part two");
        assert_eq!(response.usage.unwrap().total(), 15);
    }

    #[test]
    fn refusal_stop_reason_is_content_filter() {
        let response: Response = serde_json::from_str(
            r#"{"content":[],"stop_reason":"refusal"}"#,
        )
        .unwrap();
        assert_eq!(response.text().unwrap_err().kind, ErrorKind::ContentFilter);
    }

    #[test]
    fn missing_text_blocks_is_unknown_error() {
        let response: Response =
            serde_json::from_str(r#"{"content":[{"type":"thinking"}]}"#).unwrap();
        assert_eq!(response.text().unwrap_err().kind, ErrorKind::UnknownError);
    }
}
