//! Request and response bodies for the OpenAI chat completions API.

use llm::{ErrorKind, GenerationOptions, ProviderError, ProviderKind};
use serde::{Deserialize, Serialize};

/// The request body for chat completions.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: String,
    /// The messages to send.
    pub messages: Vec<RequestMessage>,
    /// Maximum completion tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A single chat message.
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
            messages: vec![RequestMessage {
                role: "user",
                content: prompt.to_owned(),
            }],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        }
    }
}

/// The response body for chat completions.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// The completion choices.
    pub choices: Vec<Choice>,
    /// The model that served the request.
    #[serde(default)]
    pub model: Option<String>,
    /// Token usage.
    #[serde(default)]
    pub usage: Option<Usage>,
    /// Request identifier.
    #[serde(default)]
    pub id: Option<String>,
}

/// A completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The completion message.
    pub message: ChoiceMessage,
    /// Why generation stopped.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// The generated content.
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage accounting.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Total tokens consumed by the request.
    pub total_tokens: u32,
}

impl Response {
    /// Extract the generated text, enforcing the content-filter finish reason.
    pub fn text(&self) -> Result<String, ProviderError> {
        let choice = self.choices.first().ok_or_else(|| {
            ProviderError::for_provider(
                ErrorKind::UnknownError,
                ProviderKind::OpenAI,
                "response contained no choices",
            )
        })?;
        if choice.finish_reason.as_deref() == Some("content_filter") {
            return Err(ProviderError::for_provider(
                ErrorKind::ContentFilter,
                ProviderKind::OpenAI,
                "generation stopped by the content filter",
            ));
        }
        Ok(choice.message.content.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_options() {
        let options = GenerationOptions {
            max_tokens: Some(512),
            temperature: Some(0.4),
            ..GenerationOptions::new("t")
        };
        let req = Request::new("gpt-4o", "hello", &options);
        assert_eq!(req.model, "gpt-4o");
        assert_eq!(req.messages[0].content, "hello");
        assert_eq!(req.max_tokens, Some(512));
    }

    #[test]
    fn response_text_happy_path() {
        let response: Response = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"done"},"finish_reason":"stop"}],
                "usage":{"total_tokens":7},"model":"gpt-4o"}"#,
        )
        .unwrap();
        assert_eq!(response.text().unwrap(), "done");
        assert_eq!(response.usage.unwrap().total_tokens, 7);
    }

    #[test]
    fn content_filter_finish_reason_is_an_error() {
        let response: Response = serde_json::from_str(
            r#"{"choices":[{"message":{},"finish_reason":"content_filter"}]}"#,
        )
        .unwrap();
        let err = response.text().unwrap_err();
        assert_eq!(err.kind, ErrorKind::ContentFilter);
    }

    #[test]
    fn empty_choices_is_unknown_error() {
        let response: Response = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(response.text().unwrap_err().kind, ErrorKind::UnknownError);
    }
}
