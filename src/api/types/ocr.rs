//! Document-to-text request and response types

use serde::{Deserialize, Serialize};

/// Request body for document text extraction.
///
/// Both fields are optional at the serde level so their absence can be
/// answered with a 400 and a precise message instead of a generic
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct OcrRequest {
    /// Data URI of the uploaded document
    pub file: Option<String>,
    /// Declared media category: "image" or "pdf"
    #[serde(rename = "fileType")]
    pub file_type: Option<String>,
}

/// Response body: the extracted transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResponse {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let request: OcrRequest = serde_json::from_str(
            r#"{"file": "data:image/png;base64,aGk=", "fileType": "image"}"#,
        )
        .unwrap();

        assert_eq!(request.file.as_deref(), Some("data:image/png;base64,aGk="));
        assert_eq!(request.file_type.as_deref(), Some("image"));
    }

    #[test]
    fn test_request_tolerates_missing_fields() {
        let request: OcrRequest = serde_json::from_str("{}").unwrap();
        assert!(request.file.is_none());
        assert!(request.file_type.is_none());
    }

    #[test]
    fn test_response_serialization() {
        let response = OcrResponse {
            text: "Miete: 950".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"text":"Miete: 950"}"#
        );
    }
}
