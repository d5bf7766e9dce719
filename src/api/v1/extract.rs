//! Text-to-record endpoint handler

use axum::extract::State;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ExtractRequest, Json};
use crate::domain::StructuredRecord;

/// POST /v1/extract
///
/// Runs the transcript from the last message through the extraction
/// pipeline and returns the structured record as-is. Absent fields are
/// omitted from the response body rather than serialized as null.
///
/// An empty transcript is a valid one (an empty PDF text layer produces
/// exactly that) and still goes to the model; only a missing message is
/// rejected.
pub async fn extract_structured_record(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<StructuredRecord>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    let transcript = request.current_message_content().ok_or_else(|| {
        warn!(request_id = %request_id, "No message content found in request");
        ApiError::bad_request("No message content found in request")
    })?;

    info!(
        request_id = %request_id,
        transcript_chars = transcript.len(),
        "Processing structured extraction"
    );

    let record = state.extraction_pipeline.extract_record(transcript).await?;

    info!(request_id = %request_id, "Structured extraction complete");

    Ok(Json(record))
}
