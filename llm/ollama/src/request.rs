//! Request and response bodies for the Ollama generate API.

use llm::GenerationOptions;
use serde::{Deserialize, Serialize};

/// The request body for `/api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: String,
    /// The final prompt.
    pub prompt: String,
    /// Always false; the adapter consumes a single JSON response.
    pub stream: bool,
    /// Runtime options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RequestOptions>,
}

/// Runtime options for generation.
#[derive(Debug, Clone, Serialize)]
pub struct RequestOptions {
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to predict.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

impl Request {
    /// Build a request carrying the final prompt.
    pub fn new(model: &str, prompt: &str, options: &GenerationOptions) -> Self {
        let runtime = if options.temperature.is_some() || options.max_tokens.is_some() {
            Some(RequestOptions {
                temperature: options.temperature,
                num_predict: options.max_tokens,
            })
        } else {
            None
        };
        Self {
            model: model.to_owned(),
            prompt: prompt.to_owned(),
            stream: false,
            options: runtime,
        }
    }
}

/// The response body for `/api/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// The model that served the request.
    #[serde(default)]
    pub model: Option<String>,
    /// The generated text.
    #[serde(default)]
    pub response: String,
    /// Whether generation finished.
    #[serde(default)]
    pub done: bool,
    /// Tokens generated.
    #[serde(default)]
    pub eval_count: Option<u32>,
    /// Tokens in the prompt.
    #[serde(default)]
    pub prompt_eval_count: Option<u32>,
}

impl Response {
    /// Combined token count, when the server reports one.
    pub fn total_tokens(&self) -> Option<u32> {
        match (self.prompt_eval_count, self.eval_count) {
            (None, None) => None,
            (prompt, eval) => Some(prompt.unwrap_or(0) + eval.unwrap_or(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_disables_streaming() {
        let req = Request::new("llama3.1", "hi", &GenerationOptions::new("t"));
        let body = serde_json::to_string(&req).unwrap();
        assert!(body.contains(r#""stream":false"#));
        assert!(!body.contains("options"));
    }

    #[test]
    fn response_total_tokens_sums_both_counts() {
        let response: Response = serde_json::from_str(
            r#"{"model":"llama3.1","response":"ok","done":true,
                "eval_count":20,"prompt_eval_count":80}"#,
        )
        .unwrap();
        assert_eq!(response.total_tokens(), Some(100));
    }

    #[test]
    fn response_without_counts_has_no_usage() {
        let response: Response =
            serde_json::from_str(r#"{"response":"ok","done":true}"#).unwrap();
        assert_eq!(response.total_tokens(), None);
    }
}
