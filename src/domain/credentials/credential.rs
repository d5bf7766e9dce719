use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Type of credential (which external service it belongs to)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialType {
    /// Language-model provider API key
    OpenAi,
    /// Optical-character-recognition service API key
    GoogleVision,
    /// Anything else
    Custom(String),
}

/// Credential entity containing an API key and optional extra parameters
#[derive(Debug, Clone)]
pub struct Credential {
    credential_type: CredentialType,
    api_key: String,
    additional_params: HashMap<String, String>,
}

impl Credential {
    pub fn new(credential_type: CredentialType, api_key: String) -> Self {
        Self {
            credential_type,
            api_key,
            additional_params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_params.insert(key.into(), value.into());
        self
    }

    pub fn credential_type(&self) -> &CredentialType {
        &self.credential_type
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn get_param(&self, key: &str) -> Option<&String> {
        self.additional_params.get(key)
    }
}

impl std::fmt::Display for CredentialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialType::OpenAi => write!(f, "openai"),
            CredentialType::GoogleVision => write!(f, "google_vision"),
            CredentialType::Custom(name) => write!(f, "custom:{}", name),
        }
    }
}
