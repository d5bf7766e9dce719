use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    DocumentPayload, DomainError, ExtractionStrategy, OcrEngine, PdfParser, Transcript,
};

/// Text extraction service: raw document bytes in, transcript out.
///
/// Dispatches on the payload's extraction strategy. Each request makes
/// at most one external call (the OCR annotate request); PDF parsing is
/// local CPU work. Failures surface immediately - no retries on a paid
/// per-call API without a backoff policy.
#[derive(Debug, Clone)]
pub struct TranscriptionService {
    ocr: Arc<dyn OcrEngine>,
    pdf: Arc<dyn PdfParser>,
}

impl TranscriptionService {
    pub fn new(ocr: Arc<dyn OcrEngine>, pdf: Arc<dyn PdfParser>) -> Self {
        Self { ocr, pdf }
    }

    /// Decode the payload and produce its transcript.
    ///
    /// The transcript text is verbatim output of the chosen strategy;
    /// prompt construction downstream owns any cleanup.
    pub async fn transcribe(&self, payload: &DocumentPayload) -> Result<Transcript, DomainError> {
        let (bytes, strategy) = payload.decode()?;

        debug!(
            category = %payload.category(),
            bytes = bytes.len(),
            "Decoded document payload"
        );

        let text = match strategy {
            ExtractionStrategy::Optical => self.transcribe_optical(&bytes).await?,
            ExtractionStrategy::TextLayer => self.pdf.extract_text(&bytes)?,
        };

        info!(
            category = %payload.category(),
            chars = text.len(),
            "Produced transcript"
        );

        Ok(Transcript::new(text, payload.category()))
    }

    async fn transcribe_optical(&self, image: &[u8]) -> Result<String, DomainError> {
        let annotations = self.ocr.detect_text(image).await?;

        // First annotation is the full-document transcription; the rest
        // are per-word entries and are discarded along with confidence
        // and bounding boxes.
        let first = annotations.into_iter().next().ok_or(DomainError::NoTextDetected)?;

        Ok(first.description)
    }
}
