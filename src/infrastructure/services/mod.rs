//! Services wiring domain logic to infrastructure

mod transcription_service;

pub use transcription_service::TranscriptionService;
