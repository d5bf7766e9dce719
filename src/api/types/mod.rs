//! HTTP request and response types

pub mod error;
pub mod extract;
pub mod json;
pub mod ocr;

pub use error::{ApiError, ApiErrorResponse};
pub use extract::{ExtractRequest, IncomingMessage};
pub use json::Json;
pub use ocr::{OcrRequest, OcrResponse};
