//! Core Generator implementation

use crate::config::GenerationConfig;
use crate::error::ExtractorError;
use crate::parser::extract_yaml;
use crate::prompt::PromptBuilder;
use crate::stream::collect_response;
use crate::types::{GenerationMetadata, GenerationOutcome};
use configgen_domain::{GenerationRequest, YamlDocument};
use configgen_llm::{ChatCompletionRequest, CompletionClient};
use std::time::Instant;
use tracing::{debug, info, warn};

/// The Generator turns a request into a YAML configuration
pub struct Generator<C>
where
    C: CompletionClient,
{
    client: C,
    config: GenerationConfig,
    assistant_id: Option<String>,
}

impl<C> Generator<C>
where
    C: CompletionClient,
{
    /// Create a new Generator
    pub fn new(client: C, config: GenerationConfig) -> Self {
        Self {
            client,
            config,
            assistant_id: None,
        }
    }

    /// Route requests to a specific assistant
    pub fn with_assistant_id(mut self, assistant_id: impl Into<String>) -> Self {
        self.assistant_id = Some(assistant_id.into());
        self
    }

    /// The underlying completion client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Generate a configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The sampling configuration is invalid
    /// - The stream cannot be started or breaks mid-way
    /// - No YAML could be extracted from the response
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutcome, ExtractorError> {
        self.config.validate().map_err(ExtractorError::Config)?;

        let start_time = Instant::now();

        info!(
            "Generating {} configuration (schema {} bytes, context {} chars)",
            request.device_type,
            request.schema_text.len(),
            request.context.len()
        );

        let prompt = PromptBuilder::new(request).build();
        debug!("Prompt length: {} chars", prompt.len());

        let completion = ChatCompletionRequest::user_prompt(prompt.as_str(), self.assistant_id.clone())
            .with_sampling(self.config.temperature, self.config.top_p);

        let stream = self
            .client
            .stream_chat(completion)
            .await
            .map_err(ExtractorError::StreamStart)?;

        let response = collect_response(stream).await?;
        debug!("Response length: {} chars", response.text.len());

        let yaml = extract_yaml(&response.text);
        if yaml.is_empty() {
            warn!(
                "No YAML found in {} chars of response",
                response.text.len()
            );
        }
        let document = YamlDocument::new(yaml)?;

        let metadata = GenerationMetadata {
            prompt_chars: prompt.len(),
            chunk_count: response.chunk_count,
            response_chars: response.text.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Generation complete: {} lines of YAML from {} chunks",
            document.line_count(),
            metadata.chunk_count
        );

        Ok(GenerationOutcome { document, metadata })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configgen_llm::MockClient;

    fn create_test_generator(deltas: &[&str]) -> Generator<MockClient> {
        Generator::new(MockClient::new(deltas.iter().copied()), GenerationConfig::default())
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("{}", "switch", "access layer")
    }

    #[tokio::test]
    async fn test_generate_simple_response() {
        let generator = create_test_generator(&["vlan: 10"]);

        let outcome = generator.generate(&request()).await.unwrap();
        assert_eq!(outcome.document.as_str(), "vlan: 10");
        assert_eq!(outcome.metadata.chunk_count, 1);
        assert_eq!(outcome.metadata.response_chars, 8);
    }

    #[tokio::test]
    async fn test_generate_empty_response() {
        let generator = create_test_generator(&["I cannot help with that."]);

        let result = generator.generate(&request()).await;
        assert!(matches!(result, Err(ExtractorError::EmptyDocument)));
    }

    #[tokio::test]
    async fn test_generate_invalid_config() {
        let config = GenerationConfig {
            temperature: -1.0,
            ..GenerationConfig::default()
        };
        let generator = Generator::new(MockClient::new(["a: 1"]), config);

        let result = generator.generate(&request()).await;
        assert!(matches!(result, Err(ExtractorError::Config(_))));
        assert_eq!(generator.client().call_count(), 0);
    }
}
