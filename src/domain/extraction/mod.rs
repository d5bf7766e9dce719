//! Transcript-to-record extraction
//!
//! Renders the instruction prompt, invokes the language model under a
//! forced single-function constraint, and validates the returned
//! arguments against the extraction schema.

mod pipeline;
mod prompt;
mod template;

pub use pipeline::{ExtractionPipeline, OUTPUT_FORMATTER};
pub use prompt::render_extraction_prompt;
pub use template::{PromptTemplate, TemplateError};
