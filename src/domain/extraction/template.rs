//! Prompt template parsing and rendering
//!
//! Supports variable syntax: `${var:variable-name}` - required variable,
//! error if not provided at render time.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Regex to match variable patterns: ${var:name}
static VARIABLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{var:([a-zA-Z0-9][-a-zA-Z0-9]*)\}").unwrap());

/// Template processing errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TemplateError {
    #[error("Missing required variable: {name}")]
    MissingVariable { name: String },
}

/// A parsed prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    content: String,
    variables: Vec<String>,
}

impl PromptTemplate {
    /// Parse a template string and extract its variable names
    pub fn parse(content: impl Into<String>) -> Self {
        let content = content.into();
        let mut variables = Vec::new();

        for cap in VARIABLE_PATTERN.captures_iter(&content) {
            let name = cap.get(1).unwrap().as_str().to_string();
            if !variables.contains(&name) {
                variables.push(name);
            }
        }

        Self { content, variables }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Render the template with provided values
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, TemplateError> {
        let mut result = self.content.clone();

        for name in &self.variables {
            let value = values
                .get(name)
                .ok_or_else(|| TemplateError::MissingVariable { name: name.clone() })?;

            let pattern = format!("${{var:{}}}", name);
            result = result.replace(&pattern, value);
        }

        Ok(result)
    }
}
