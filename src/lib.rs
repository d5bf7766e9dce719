//! Tenancy Extract API
//!
//! Turns uploaded rental agreements into structured records in two
//! stages: document to transcript (OCR for images, text-layer parse for
//! PDFs), then transcript to record through a schema-constrained model
//! call.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use domain::{CredentialProvider, ExtractionPipeline, ExtractionSchema};
use infrastructure::credentials::EnvCredentialProvider;
use infrastructure::llm::OpenAiProvider;
use infrastructure::ocr::GoogleVisionOcr;
use infrastructure::pdf::PdfExtractParser;
use infrastructure::services::TranscriptionService;
use infrastructure::HttpClient;

/// Create the application state with all services wired up.
///
/// Credentials stay behind the injected provider and are resolved per
/// request, so a missing key surfaces on the first call that needs it
/// rather than at startup.
pub fn create_app_state(config: &AppConfig) -> AppState {
    let credentials: Arc<dyn CredentialProvider> =
        Arc::new(EnvCredentialProvider::new().with_defaults());

    let timeout = Duration::from_secs(config.llm.request_timeout_secs);

    let ocr = match &config.llm.vision_base_url {
        Some(base_url) => GoogleVisionOcr::with_base_url(
            HttpClient::with_timeout(timeout),
            credentials.clone(),
            base_url,
        ),
        None => GoogleVisionOcr::new(HttpClient::with_timeout(timeout), credentials.clone()),
    };

    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::new(ocr),
        Arc::new(PdfExtractParser::new()),
    ));

    let llm = match &config.llm.openai_base_url {
        Some(base_url) => OpenAiProvider::with_base_url(
            HttpClient::with_timeout(timeout),
            credentials,
            base_url,
        ),
        None => OpenAiProvider::new(HttpClient::with_timeout(timeout), credentials),
    };

    let extraction_pipeline = Arc::new(ExtractionPipeline::new(
        Arc::new(llm),
        ExtractionSchema::tenancy(),
        config.llm.model.clone(),
        config.llm.temperature,
    ));

    AppState::new(transcription_service, extraction_pipeline)
}
