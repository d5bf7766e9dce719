//! Text extraction traits
//!
//! The two ways readable text leaves a document: an external OCR engine
//! for images, and a text-layer parse for PDFs. Both are traits so the
//! transcription service can be exercised without network or native
//! parser involvement.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// One ranked text annotation from an OCR result.
///
/// The first annotation is the full-document transcription; the service
/// consumes only that one and discards confidence and geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnnotation {
    pub description: String,
    pub locale: Option<String>,
}

impl TextAnnotation {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            locale: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Trait for optical-character-recognition engines
#[async_trait]
pub trait OcrEngine: Send + Sync + Debug {
    /// Detect text in raw image bytes, returning ranked annotations.
    /// An empty result list means the engine found no text at all.
    async fn detect_text(&self, image: &[u8]) -> Result<Vec<TextAnnotation>, DomainError>;

    /// Get the engine name for logging/debugging
    fn engine_name(&self) -> &'static str;
}

/// Trait for PDF text-layer parsers. Synchronous CPU work, no suspension.
pub trait PdfParser: Send + Sync + Debug {
    /// Concatenate the embedded text layer of a PDF byte stream
    fn extract_text(&self, pdf: &[u8]) -> Result<String, DomainError>;
}
