//! The generation contract.
//!
//! Every backend adapter implements [`Generator`]. The four-stage pipeline
//! (validate, truncate, substitute, delegate) lives here as a provided
//! method so adapters only supply the backend hook plus their static
//! metadata — the pipeline itself is never reimplemented per backend.

use crate::{
    BackendOutput, ErrorKind, GeneratedResult, GenerationOptions, ProviderCapabilities,
    ProviderError, ProviderKind, options::DEFAULT_INPUT_LIMIT, template, truncate,
};

/// A backend adapter for description generation.
pub trait Generator: Sized + Clone + Send + Sync {
    /// Which backend family this adapter belongs to.
    fn kind(&self) -> ProviderKind;

    /// Static capability description for this adapter.
    fn capabilities(&self) -> ProviderCapabilities;

    /// Supported models, ordered. The first entry is the default.
    fn available_models(&self) -> Vec<&'static str> {
        self.capabilities().models
    }

    /// Check the adapter's configuration without any network call.
    fn validate_config(&self) -> Result<(), ProviderError>;

    /// Probe the backend with a cheap request. `Ok(false)` means the backend
    /// is reachable-in-principle but rejected the probe; transport failures
    /// also surface as `Ok(false)` rather than an error.
    fn test_connection(&self) -> impl Future<Output = Result<bool, ProviderError>> + Send;

    /// The backend hook: send the final prompt and return the partial result.
    ///
    /// Implementations must normalize every backend failure into one
    /// [`ProviderError`]; the pipeline does not interpret native errors.
    fn execute(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> impl Future<Output = Result<BackendOutput, ProviderError>> + Send;

    /// Run the fixed generation pipeline.
    ///
    /// 1. Validate the template; on failure raise `INVALID_REQUEST` with the
    ///    aggregated error list and make no backend call.
    /// 2. Truncate the `DIFF_CONTENT` field against the input limit,
    ///    recording original/final sizes and the truncation flag. An unbound
    ///    field reports zero sizes and stays unbound, so its placeholder
    ///    survives substitution verbatim.
    /// 3. Substitute all placeholders, with the truncated value injected
    ///    under its reserved key.
    /// 4. Delegate the final prompt to [`Generator::execute`] and merge the
    ///    truncation bookkeeping into the result.
    fn generate(
        &self,
        options: &GenerationOptions,
    ) -> impl Future<Output = Result<GeneratedResult, ProviderError>> + Send {
        async move {
            let validation = template::validate(&options.template);
            if !validation.is_valid {
                return Err(ProviderError::for_provider(
                    ErrorKind::InvalidRequest,
                    self.kind(),
                    format!(
                        "template validation failed: {}",
                        validation.errors.join("; ")
                    ),
                ));
            }

            let limit = options.input_limit.unwrap_or(DEFAULT_INPUT_LIMIT);
            let mut data = options.data.clone();
            let mut truncated = false;
            let mut original_input_size = 0;
            let mut final_input_size = 0;
            if let Some(diff) = options.data.get(template::DIFF_CONTENT) {
                original_input_size = diff.len();
                let bounded = truncate::truncate(diff, limit);
                final_input_size = bounded.text.len();
                truncated = bounded.was_truncated;
                if truncated {
                    tracing::debug!(
                        provider = %self.kind(),
                        original = original_input_size,
                        bounded = final_input_size,
                        "input field truncated"
                    );
                }
                data.insert(template::DIFF_CONTENT.to_owned(), bounded.text);
            }
            let prompt = template::substitute(&options.template, &data);

            let output = self.execute(&prompt, options).await?;
            Ok(GeneratedResult {
                text: output.text,
                model: output.model,
                provider: self.kind(),
                tokens_used: output.tokens_used,
                truncated,
                original_input_size,
                final_input_size,
                metadata: output.metadata,
            })
        }
    }
}
