use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unsupported media category: {category}")]
    UnsupportedMedia { category: String },

    #[error("Decode error: {message}")]
    Decode { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("No text detected in document")]
    NoTextDetected,

    #[error("PDF parse error: {message}")]
    PdfParse { message: String },

    #[error("Malformed model output: {message}")]
    MalformedModelOutput { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unsupported_media(category: impl Into<String>) -> Self {
        Self::UnsupportedMedia {
            category: category.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn pdf_parse(message: impl Into<String>) -> Self {
        Self::PdfParse {
            message: message.into(),
        }
    }

    pub fn malformed_model_output(message: impl Into<String>) -> Self {
        Self::MalformedModelOutput {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
