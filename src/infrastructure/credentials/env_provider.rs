use async_trait::async_trait;
use std::collections::HashMap;
use std::env;

use crate::domain::{Credential, CredentialProvider, CredentialType, DomainError};

/// Environment variable mappings for each credential type
#[derive(Debug, Clone)]
pub struct EnvMapping {
    pub api_key_var: String,
    pub additional_vars: HashMap<String, String>,
}

impl EnvMapping {
    pub fn new(api_key_var: impl Into<String>) -> Self {
        Self {
            api_key_var: api_key_var.into(),
            additional_vars: HashMap::new(),
        }
    }

    pub fn with_var(mut self, param_name: impl Into<String>, env_var: impl Into<String>) -> Self {
        self.additional_vars.insert(param_name.into(), env_var.into());
        self
    }
}

/// Credential provider that reads from environment variables
#[derive(Debug)]
pub struct EnvCredentialProvider {
    mappings: HashMap<CredentialType, EnvMapping>,
}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    pub fn with_mapping(mut self, credential_type: CredentialType, mapping: EnvMapping) -> Self {
        self.mappings.insert(credential_type, mapping);
        self
    }

    pub fn with_defaults(self) -> Self {
        self.with_mapping(CredentialType::OpenAi, EnvMapping::new("OPENAI_API_KEY"))
            .with_mapping(
                CredentialType::GoogleVision,
                EnvMapping::new("GOOGLE_VISION_API_KEY"),
            )
    }

    fn read_credential(&self, credential_type: &CredentialType) -> Result<Credential, DomainError> {
        let mapping = self.mappings.get(credential_type).ok_or_else(|| {
            DomainError::credential(format!(
                "No environment mapping configured for credential type: {}",
                credential_type
            ))
        })?;

        let api_key = env::var(&mapping.api_key_var).map_err(|_| {
            DomainError::credential(format!(
                "Environment variable '{}' not set for credential type: {}",
                mapping.api_key_var, credential_type
            ))
        })?;

        let mut credential = Credential::new(credential_type.clone(), api_key);

        for (param_name, env_var) in &mapping.additional_vars {
            if let Ok(value) = env::var(env_var) {
                credential = credential.with_param(param_name, value);
            }
        }

        Ok(credential)
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new().with_defaults()
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_credential(
        &self,
        credential_type: &CredentialType,
    ) -> Result<Credential, DomainError> {
        self.read_credential(credential_type)
    }

    async fn supports(&self, credential_type: &CredentialType) -> bool {
        match self.mappings.get(credential_type) {
            Some(mapping) => env::var(&mapping.api_key_var).is_ok(),
            None => false,
        }
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}
