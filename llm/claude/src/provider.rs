//! Generator implementation for the Claude adapter.

use crate::{Claude, Request, Response, error, request::Usage};
use llm::{
    BackendOutput, ErrorKind, GenerationOptions, Generator, ProviderCapabilities, ProviderError,
    ProviderKind,
};
use serde_json::json;

impl Generator for Claude {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Claude
    }

    fn capabilities(&self) -> ProviderCapabilities {
        Self::static_capabilities()
    }

    fn validate_config(&self) -> Result<(), ProviderError> {
        if self.config.api_key.trim().is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::InvalidApiKey,
                ProviderKind::Claude,
                "an Anthropic API key is required",
            ));
        }
        if self.config.model.trim().is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::InvalidRequest,
                ProviderKind::Claude,
                "a default model is required",
            ));
        }
        Ok(())
    }

    async fn test_connection(&self) -> Result<bool, ProviderError> {
        let response = self
            .client
            .get(self.models_url())
            .headers(self.headers.clone())
            .send()
            .await;
        match response {
            Ok(r) => Ok(r.status().is_success()),
            Err(e) => {
                tracing::debug!(provider = "claude", "connection test failed: {e}");
                Ok(false)
            }
        }
    }

    async fn execute(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<BackendOutput, ProviderError> {
        let model = options
            .model
            .clone()
            .unwrap_or_else(|| self.config.model.clone());
        let body = Request::new(&model, prompt, options);
        tracing::debug!(provider = "claude", model = %model, "dispatching generation request");

        let response = self
            .client
            .post(self.messages_url())
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(ProviderKind::Claude, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::from_transport(ProviderKind::Claude, e))?;
        tracing::debug!(provider = "claude", status = %status, "response: {text}");

        if !status.is_success() {
            return Err(error::normalize(status.as_u16(), &text));
        }

        let parsed: Response = serde_json::from_str(&text).map_err(|e| {
            ProviderError::for_provider(
                ErrorKind::UnknownError,
                ProviderKind::Claude,
                format!("unparseable Anthropic response: {e}"),
            )
        })?;

        let generated = parsed.text()?;
        let mut metadata = std::collections::BTreeMap::new();
        if let Some(id) = &parsed.id {
            metadata.insert("request_id".to_owned(), json!(id));
        }
        if let Some(stop) = &parsed.stop_reason {
            metadata.insert("stop_reason".to_owned(), json!(stop));
        }

        Ok(BackendOutput {
            text: generated,
            model: parsed.model.unwrap_or(model),
            tokens_used: parsed.usage.as_ref().map(Usage::total),
            metadata,
        })
    }
}
