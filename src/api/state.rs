//! Application state for shared services

use std::sync::Arc;

use crate::domain::ExtractionPipeline;
use crate::infrastructure::services::TranscriptionService;

/// Application state containing the two request-serving services.
///
/// Both are immutable after construction; concurrent requests share
/// them without locking because nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub extraction_pipeline: Arc<ExtractionPipeline>,
}

impl AppState {
    pub fn new(
        transcription_service: Arc<TranscriptionService>,
        extraction_pipeline: Arc<ExtractionPipeline>,
    ) -> Self {
        Self {
            transcription_service,
            extraction_pipeline,
        }
    }
}
