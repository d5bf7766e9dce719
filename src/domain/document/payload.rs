use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Marker separating the data-URI header from its base64 payload
const BASE64_MARKER: &str = "base64,";

/// Top-level media category of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Image,
    Pdf,
}

impl MediaCategory {
    /// Extraction strategy for this category. Total by construction:
    /// a category that exists always maps to exactly one strategy.
    pub fn strategy(&self) -> ExtractionStrategy {
        match self {
            Self::Image => ExtractionStrategy::Optical,
            Self::Pdf => ExtractionStrategy::TextLayer,
        }
    }

}

impl FromStr for MediaCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "pdf" => Ok(Self::Pdf),
            other => Err(DomainError::unsupported_media(other)),
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Pdf => write!(f, "pdf"),
        }
    }
}

/// How text is pulled out of the raw document bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Optical character recognition via an external service
    Optical,
    /// Embedded text layer parsed directly from the byte stream
    TextLayer,
}

/// An uploaded document: data-URI content plus its declared category.
///
/// Request-scoped. Consumed once by the transcription service and
/// discarded; never persisted.
#[derive(Debug, Clone)]
pub struct DocumentPayload {
    file: String,
    category: MediaCategory,
}

impl DocumentPayload {
    pub fn new(file: impl Into<String>, category: MediaCategory) -> Self {
        Self {
            file: file.into(),
            category,
        }
    }

    pub fn category(&self) -> MediaCategory {
        self.category
    }

    /// Decode the data URI into raw bytes and select the strategy.
    ///
    /// Splits on the `base64,` marker and decodes everything after it.
    /// A missing marker or an undecodable payload is a malformed request
    /// field, not an external failure.
    pub fn decode(&self) -> Result<(Vec<u8>, ExtractionStrategy), DomainError> {
        let (_, encoded) = self.file.split_once(BASE64_MARKER).ok_or_else(|| {
            DomainError::decode("File data is not a base64 data URI")
        })?;

        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| DomainError::decode(format!("Invalid base64 payload: {}", e)))?;

        Ok((bytes, self.category.strategy()))
    }
}
