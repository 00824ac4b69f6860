//! Generator implementation for the OpenAI adapter.

use crate::{OpenAI, Request, Response, error};
use llm::{
    BackendOutput, ErrorKind, GenerationOptions, Generator, ProviderCapabilities, ProviderError,
    ProviderKind,
};
use serde_json::json;

impl Generator for OpenAI {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAI
    }

    fn capabilities(&self) -> ProviderCapabilities {
        Self::static_capabilities()
    }

    fn validate_config(&self) -> Result<(), ProviderError> {
        if self.config.api_key.trim().is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::InvalidApiKey,
                ProviderKind::OpenAI,
                "an OpenAI API key is required",
            ));
        }
        if self.config.model.trim().is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::InvalidRequest,
                ProviderKind::OpenAI,
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
                tracing::debug!(provider = "openai", "connection test failed: {e}");
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
        tracing::debug!(provider = "openai", model = %model, "dispatching generation request");

        let response = self
            .client
            .post(self.chat_url())
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(ProviderKind::OpenAI, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::from_transport(ProviderKind::OpenAI, e))?;
        tracing::debug!(provider = "openai", status = %status, "response: {text}");

        if !status.is_success() {
            return Err(error::normalize(status.as_u16(), &text));
        }

        let parsed: Response = serde_json::from_str(&text).map_err(|e| {
            ProviderError::for_provider(
                ErrorKind::UnknownError,
                ProviderKind::OpenAI,
                format!("unparseable OpenAI response: {e}"),
            )
        })?;

        let generated = parsed.text()?;
        let mut metadata = std::collections::BTreeMap::new();
        if let Some(id) = &parsed.id {
            metadata.insert("request_id".to_owned(), json!(id));
        }
        if let Some(finish) = parsed.choices.first().and_then(|c| c.finish_reason.clone()) {
            metadata.insert("finish_reason".to_owned(), json!(finish));
        }

        Ok(BackendOutput {
            text: generated,
            model: parsed.model.unwrap_or(model),
            tokens_used: parsed.usage.map(|u| u.total_tokens),
            metadata,
        })
    }
}
