//! Generator implementation for the Gemini adapter.

use crate::{Gemini, Request, Response, error};
use llm::{
    BackendOutput, ErrorKind, GenerationOptions, Generator, ProviderCapabilities, ProviderError,
    ProviderKind,
};
use serde_json::json;

impl Generator for Gemini {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn capabilities(&self) -> ProviderCapabilities {
        Self::static_capabilities()
    }

    fn validate_config(&self) -> Result<(), ProviderError> {
        if self.config.api_key.trim().is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::InvalidApiKey,
                ProviderKind::Gemini,
                "a Gemini API key is required",
            ));
        }
        if self.config.model.trim().is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::InvalidRequest,
                ProviderKind::Gemini,
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
                tracing::debug!(provider = "gemini", "connection test failed: {e}");
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
        let body = Request::new(prompt, options);
        tracing::debug!(provider = "gemini", model = %model, "dispatching generation request");

        let response = self
            .client
            .post(self.generate_url(&model))
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(ProviderKind::Gemini, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::from_transport(ProviderKind::Gemini, e))?;
        tracing::debug!(provider = "gemini", status = %status, "response: {text}");

        if !status.is_success() {
            return Err(error::normalize(status.as_u16(), &text));
        }

        let parsed: Response = serde_json::from_str(&text).map_err(|e| {
            ProviderError::for_provider(
                ErrorKind::UnknownError,
                ProviderKind::Gemini,
                format!("unparseable Gemini response: {e}"),
            )
        })?;

        let generated = parsed.text()?;
        let mut metadata = std::collections::BTreeMap::new();
        if let Some(finish) = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.clone())
        {
            metadata.insert("finish_reason".to_owned(), json!(finish));
        }

        Ok(BackendOutput {
            text: generated,
            model: parsed.model_version.unwrap_or(model),
            tokens_used: parsed.usage_metadata.map(|u| u.total_token_count),
            metadata,
        })
    }
}
