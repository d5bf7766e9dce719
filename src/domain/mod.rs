//! Domain layer - Core business logic and entities

pub mod credentials;
pub mod document;
mod error;
pub mod extraction;
pub mod llm;
pub mod schema;
pub mod transcription;

pub use credentials::{Credential, CredentialProvider, CredentialType};
pub use document::{DocumentPayload, ExtractionStrategy, MediaCategory, Transcript};
pub use error::DomainError;
pub use extraction::ExtractionPipeline;
pub use schema::{ExtractionSchema, StructuredRecord};
pub use transcription::{OcrEngine, PdfParser, TextAnnotation};
