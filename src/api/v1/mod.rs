//! Versioned API endpoints

pub mod extract;
pub mod ocr;

use axum::routing::post;
use axum::Router;

use crate::api::state::AppState;

/// Create the v1 router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/ocr", post(ocr::extract_document_text))
        .route("/extract", post(extract::extract_structured_record))
}
