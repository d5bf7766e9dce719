use std::sync::Arc;

use tracing::debug;

use super::prompt::render_extraction_prompt;
use crate::domain::llm::{FunctionSpec, LlmProvider, LlmRequest};
use crate::domain::schema::{ExtractionSchema, StructuredRecord};
use crate::domain::DomainError;

/// The one function the model is allowed to answer through
pub const OUTPUT_FORMATTER: &str = "output_formatter";

/// Transcript-to-record pipeline.
///
/// Conceptually a two-state exchange: prompt sent, structured response
/// received. One synchronous model call per invocation, no caching, no
/// re-prompt on failure.
#[derive(Debug, Clone)]
pub struct ExtractionPipeline {
    provider: Arc<dyn LlmProvider>,
    schema: ExtractionSchema,
    model: String,
    temperature: f64,
}

impl ExtractionPipeline {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        schema: ExtractionSchema,
        model: impl Into<String>,
        temperature: f64,
    ) -> Self {
        Self {
            provider,
            schema,
            model: model.into(),
            temperature,
        }
    }

    pub fn schema(&self) -> &ExtractionSchema {
        &self.schema
    }

    /// Extract a structured record from a transcript.
    ///
    /// The model is forced into a single `output_formatter` call whose
    /// parameters are the schema's derived constraint, so there is no
    /// ambiguity about which part of the response to parse.
    pub async fn extract_record(
        &self,
        transcript: &str,
    ) -> Result<StructuredRecord, DomainError> {
        let prompt = render_extraction_prompt(transcript)?;

        let request = LlmRequest::builder()
            .user(prompt)
            .temperature(self.temperature)
            .function(
                FunctionSpec::new(OUTPUT_FORMATTER, self.schema.to_json_schema())
                    .with_description("Properly format the extracted output"),
            )
            .force_function(OUTPUT_FORMATTER)
            .build();

        let response = self.provider.chat(&self.model, request).await?;

        let call = response.function_call.ok_or_else(|| {
            DomainError::malformed_model_output("Model response contains no function call")
        })?;

        if call.name != OUTPUT_FORMATTER {
            return Err(DomainError::malformed_model_output(format!(
                "Model called unexpected function '{}'",
                call.name
            )));
        }

        debug!(
            model = %self.model,
            arguments_len = call.arguments.len(),
            "Parsing function-call arguments"
        );

        let arguments: serde_json::Value = serde_json::from_str(&call.arguments)
            .map_err(|e| {
                DomainError::malformed_model_output(format!(
                    "Function arguments are not valid JSON: {}",
                    e
                ))
            })?;

        self.schema.parse_record(arguments)
    }
}
