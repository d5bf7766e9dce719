//! Text-to-record request types

use serde::{Deserialize, Serialize};

/// One message of the conversational payload. Only `content` matters to
/// extraction; the role is accepted for compatibility with chat clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub content: String,
}

/// Request body for structured extraction. The transcript consumed is
/// the content of the last message.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub messages: Vec<IncomingMessage>,
}

impl ExtractRequest {
    /// Content of the most recent message, if any
    pub fn current_message_content(&self) -> Option<&str> {
        self.messages.last().map(|m| m.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_message_is_consumed() {
        let request: ExtractRequest = serde_json::from_str(
            r#"{"messages": [
                {"role": "assistant", "content": "Please upload the agreement."},
                {"role": "user", "content": "Mieter: Hans Schmidt"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            request.current_message_content(),
            Some("Mieter: Hans Schmidt")
        );
    }

    #[test]
    fn test_role_is_optional() {
        let request: ExtractRequest =
            serde_json::from_str(r#"{"messages": [{"content": "text"}]}"#).unwrap();
        assert_eq!(request.current_message_content(), Some("text"));
    }

    #[test]
    fn test_empty_messages() {
        let request: ExtractRequest = serde_json::from_str(r#"{"messages": []}"#).unwrap();
        assert_eq!(request.current_message_content(), None);
    }
}
