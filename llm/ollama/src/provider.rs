//! Generator implementation for the Ollama adapter.

use crate::{Ollama, Request, Response, error};
use llm::{
    BackendOutput, ErrorKind, GenerationOptions, Generator, ProviderCapabilities, ProviderError,
    ProviderKind,
};
use serde_json::json;

impl Generator for Ollama {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Ollama
    }

    fn capabilities(&self) -> ProviderCapabilities {
        Self::static_capabilities()
    }

    fn validate_config(&self) -> Result<(), ProviderError> {
        // Endpoint and model were checked at construction; re-assert so a
        // merged-in config update cannot silently clear them.
        if self.base.trim().is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::InvalidRequest,
                ProviderKind::Ollama,
                "an Ollama endpoint URL is required",
            ));
        }
        if self.config.model.trim().is_empty() {
            return Err(ProviderError::for_provider(
                ErrorKind::InvalidRequest,
                ProviderKind::Ollama,
                "an Ollama model name is required",
            ));
        }
        Ok(())
    }

    async fn test_connection(&self) -> Result<bool, ProviderError> {
        match self.client.get(self.tags_url()).send().await {
            Ok(r) => Ok(r.status().is_success()),
            Err(e) => {
                tracing::debug!(provider = "ollama", "connection test failed: {e}");
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
        tracing::debug!(provider = "ollama", model = %model, "dispatching generation request");

        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(ProviderKind::Ollama, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::from_transport(ProviderKind::Ollama, e))?;
        tracing::debug!(provider = "ollama", status = %status, "response: {text}");

        if !status.is_success() {
            return Err(error::normalize(status.as_u16(), &text));
        }

        let parsed: Response = serde_json::from_str(&text).map_err(|e| {
            ProviderError::for_provider(
                ErrorKind::UnknownError,
                ProviderKind::Ollama,
                format!("unparseable Ollama response: {e}"),
            )
        })?;

        let mut metadata = std::collections::BTreeMap::new();
        metadata.insert("done".to_owned(), json!(parsed.done));

        Ok(BackendOutput {
            tokens_used: parsed.total_tokens(),
            model: parsed.model.clone().unwrap_or(model),
            text: parsed.response,
            metadata,
        })
    }
}
