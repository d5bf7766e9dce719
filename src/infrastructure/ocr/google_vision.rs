use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{CredentialProvider, CredentialType, DomainError, OcrEngine, TextAnnotation};
use crate::infrastructure::http_client::HttpClientTrait;

const DEFAULT_VISION_BASE_URL: &str = "https://vision.googleapis.com";

/// Google Cloud Vision text-detection engine.
///
/// The credential is resolved through the injected provider on every
/// call, before the request body is even built: a missing credential
/// must fail without any network attempt. One annotate call per
/// invocation, no retries - text detection is billed per request.
#[derive(Debug)]
pub struct GoogleVisionOcr<C: HttpClientTrait> {
    client: C,
    credentials: Arc<dyn CredentialProvider>,
    base_url: String,
}

impl<C: HttpClientTrait> GoogleVisionOcr<C> {
    pub fn new(client: C, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self::with_base_url(client, credentials, DEFAULT_VISION_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        credentials: Arc<dyn CredentialProvider>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn annotate_url(&self) -> String {
        format!("{}/v1/images:annotate", self.base_url)
    }

    fn build_request(&self, image: &[u8]) -> serde_json::Value {
        serde_json::json!({
            "requests": [{
                "image": { "content": BASE64.encode(image) },
                "features": [{ "type": "TEXT_DETECTION" }],
            }]
        })
    }
}

#[async_trait]
impl<C: HttpClientTrait> OcrEngine for GoogleVisionOcr<C> {
    async fn detect_text(&self, image: &[u8]) -> Result<Vec<TextAnnotation>, DomainError> {
        let credential = self
            .credentials
            .get_credential(&CredentialType::GoogleVision)
            .await?;

        debug!(
            image_bytes = image.len(),
            credential_provider = self.credentials.provider_name(),
            "Submitting image for text detection"
        );

        let body = self.build_request(image);
        let headers = vec![
            ("X-Goog-Api-Key", credential.api_key()),
            ("Content-Type", "application/json"),
        ];

        let json = self
            .client
            .post_json(&self.annotate_url(), headers, &body)
            .await
            .map_err(|e| match e {
                DomainError::Provider { message, .. } => {
                    DomainError::provider("google-vision", message)
                }
                other => other,
            })?;

        let response: AnnotateResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("google-vision", format!("Failed to parse response: {}", e))
        })?;

        let result = response
            .responses
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::provider("google-vision", "No result in response"))?;

        if let Some(error) = result.error {
            return Err(DomainError::provider(
                "google-vision",
                format!("Annotate failed: {}", error.message),
            ));
        }

        Ok(result
            .text_annotations
            .into_iter()
            .map(|a| TextAnnotation {
                description: a.description,
                locale: a.locale,
            })
            .collect())
    }

    fn engine_name(&self) -> &'static str {
        "google-vision"
    }
}

// Vision API types

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateResult {
    #[serde(default)]
    text_annotations: Vec<VisionTextAnnotation>,
    error: Option<VisionStatus>,
}

#[derive(Debug, Deserialize)]
struct VisionTextAnnotation {
    description: String,
    locale: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VisionStatus {
    #[serde(default)]
    message: String,
}
