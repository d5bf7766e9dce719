//! Document-to-text endpoint handler

use axum::extract::State;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, OcrRequest, OcrResponse};
use crate::domain::{DocumentPayload, MediaCategory};

/// POST /v1/ocr
///
/// Validates the request fields before anything else: a missing or
/// unsupported field must never reach an external service.
pub async fn extract_document_text(
    State(state): State<AppState>,
    Json(request): Json<OcrRequest>,
) -> Result<Json<OcrResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    let file = match request.file.as_deref() {
        Some(file) if !file.is_empty() => file,
        _ => {
            warn!(request_id = %request_id, "No file data found in request");
            return Err(ApiError::bad_request("No file data found in request"));
        }
    };

    let file_type = request.file_type.as_deref().ok_or_else(|| {
        warn!(request_id = %request_id, "No file type found in request");
        ApiError::bad_request("No file type found in request")
    })?;

    let category: MediaCategory = file_type.parse()?;

    info!(
        request_id = %request_id,
        category = %category,
        "Processing document text extraction"
    );

    let payload = DocumentPayload::new(file, category);
    let transcript = state.transcription_service.transcribe(&payload).await?;

    info!(
        request_id = %request_id,
        chars = transcript.text.len(),
        "Document text extraction complete"
    );

    Ok(Json(OcrResponse {
        text: transcript.text,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::router::create_router;
    use crate::api::state::AppState;
    use crate::domain::extraction::ExtractionPipeline;
    use crate::domain::llm::MockLlmProvider;
    use crate::domain::transcription::mock::MockOcrEngine;
    use crate::domain::transcription::TextAnnotation;
    use crate::domain::{DomainError, ExtractionSchema, PdfParser};
    use crate::infrastructure::services::TranscriptionService;

    #[derive(Debug)]
    struct StubPdfParser(Result<String, String>);

    impl PdfParser for StubPdfParser {
        fn extract_text(&self, _pdf: &[u8]) -> Result<String, DomainError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(DomainError::pdf_parse(message.clone())),
            }
        }
    }

    fn state_with(ocr: Arc<MockOcrEngine>, pdf: StubPdfParser) -> AppState {
        AppState::new(
            Arc::new(TranscriptionService::new(ocr, Arc::new(pdf))),
            Arc::new(ExtractionPipeline::new(
                Arc::new(MockLlmProvider::new("openai")),
                ExtractionSchema::tenancy(),
                "gpt-4o-mini",
                0.1,
            )),
        )
    }

    fn ocr_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/ocr")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_image_upload_returns_first_annotation() {
        let ocr = Arc::new(
            MockOcrEngine::new()
                .with_annotations(vec![TextAnnotation::new("Mieter: Hans Schmidt")]),
        );
        let app = create_router(state_with(ocr, StubPdfParser(Ok(String::new()))));

        let response = app
            .oneshot(ocr_request(
                r#"{"file": "data:image/png;base64,aGVsbG8=", "fileType": "image"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["text"], "Mieter: Hans Schmidt");
    }

    #[tokio::test]
    async fn test_empty_file_is_rejected_before_any_external_call() {
        let ocr = Arc::new(MockOcrEngine::new());
        let app = create_router(state_with(ocr.clone(), StubPdfParser(Ok(String::new()))));

        let response = app
            .oneshot(ocr_request(r#"{"file": "", "fileType": "image"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "No file data found in request");
        assert_eq!(ocr.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_file_type_is_rejected() {
        let app = create_router(state_with(
            Arc::new(MockOcrEngine::new()),
            StubPdfParser(Ok(String::new())),
        ));

        let response = app
            .oneshot(ocr_request(r#"{"file": "data:image/png;base64,aGk="}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "No file type found in request");
    }

    #[tokio::test]
    async fn test_unsupported_file_type_never_reaches_extraction() {
        let ocr = Arc::new(MockOcrEngine::new());
        let app = create_router(state_with(ocr.clone(), StubPdfParser(Ok(String::new()))));

        let response = app
            .oneshot(ocr_request(
                r#"{"file": "data:text/plain;base64,aGk=", "fileType": "docx"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Unsupported media category: docx");
        assert_eq!(ocr.call_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_pdf_returns_500_with_parse_message() {
        let app = create_router(state_with(
            Arc::new(MockOcrEngine::new()),
            StubPdfParser(Err("invalid xref table".to_string())),
        ));

        let response = app
            .oneshot(ocr_request(
                r#"{"file": "data:application/pdf;base64,bm90YXBkZg==", "fileType": "pdf"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "PDF parse error: invalid xref table");
    }

    #[tokio::test]
    async fn test_missing_ocr_credential_returns_500_without_network() {
        // Real Vision engine over a mock transport and an empty
        // credential store: the request must fail before any post.
        let credentials = Arc::new(crate::domain::credentials::mock::MockCredentialProvider::new(
            "mock",
        ));
        let engine = crate::infrastructure::ocr::GoogleVisionOcr::new(
            crate::infrastructure::http_client::mock::MockHttpClient::new(),
            credentials,
        );

        let app = create_router(AppState::new(
            Arc::new(TranscriptionService::new(
                Arc::new(engine),
                Arc::new(StubPdfParser(Ok(String::new()))),
            )),
            Arc::new(ExtractionPipeline::new(
                Arc::new(MockLlmProvider::new("openai")),
                ExtractionSchema::tenancy(),
                "gpt-4o-mini",
                0.1,
            )),
        ));

        let response = app
            .oneshot(ocr_request(
                r#"{"file": "data:image/png;base64,aGVsbG8=", "fileType": "image"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("Credential not found"));
    }

    #[tokio::test]
    async fn test_non_post_method_is_rejected() {
        let app = create_router(state_with(
            Arc::new(MockOcrEngine::new()),
            StubPdfParser(Ok(String::new())),
        ));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/v1/ocr")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
