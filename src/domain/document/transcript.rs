use serde::{Deserialize, Serialize};

use super::MediaCategory;

/// Plain-text result of extracting readable text from one document.
///
/// Always produced, even when extraction yields nothing: an empty
/// document is an empty string, never an absent value. The text is
/// carried verbatim; any cleanup is left to prompt construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub source: MediaCategory,
}

impl Transcript {
    pub fn new(text: impl Into<String>, source: MediaCategory) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
