//! Extraction schema registry and structured records
//!
//! The target record shape is defined exactly once, as a typed field
//! description. Everything else is derived from it: the JSON Schema
//! constraint handed to the model, and the validation applied to the
//! model's function-call arguments. The two representations cannot drift
//! because neither is written by hand.

mod record;

pub use record::StructuredRecord;

use serde_json::{json, Map, Value};

use crate::domain::DomainError;

/// Semantic type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
}

impl FieldKind {
    fn json_type(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// One field of the extraction schema
#[derive(Debug, Clone)]
pub struct SchemaField {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl SchemaField {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Process-wide, immutable description of the target record.
///
/// Every field is independently optional: the schema constrains shape,
/// not completeness. A field missing from the source document must never
/// fail extraction.
#[derive(Debug, Clone)]
pub struct ExtractionSchema {
    fields: Vec<SchemaField>,
}

impl ExtractionSchema {
    /// The tenancy record schema: parties, address, money, guarantee flag.
    pub fn tenancy() -> Self {
        Self {
            fields: vec![
                SchemaField::new("tenant_first_name", FieldKind::Text),
                SchemaField::new("tenant_last_name", FieldKind::Text),
                SchemaField::new("landlord_first_name", FieldKind::Text),
                SchemaField::new("landlord_last_name", FieldKind::Text),
                SchemaField::new("address", FieldKind::Text),
                SchemaField::new("rent", FieldKind::Number),
                SchemaField::new("deposit", FieldKind::Number),
                SchemaField::new("has_guarantee", FieldKind::Boolean),
            ],
        }
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Project the schema into a JSON Schema constraint object.
    ///
    /// Pure and deterministic: one property per field, same name, JSON
    /// type from the semantic type, and an empty `required` list since
    /// every field is optional.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            properties.insert(
                field.name.to_string(),
                json!({ "type": field.kind.json_type() }),
            );
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": [],
            "additionalProperties": false,
        })
    }

    /// Validate raw function-call arguments and build a record.
    ///
    /// A present field with the wrong type is malformed model output.
    /// Keys outside the schema are dropped; absent or null fields stay
    /// absent, so "unknown" is never confused with false/zero/empty.
    pub fn parse_record(&self, arguments: Value) -> Result<StructuredRecord, DomainError> {
        let object = arguments.as_object().ok_or_else(|| {
            DomainError::malformed_model_output("Function arguments are not a JSON object")
        })?;

        let mut validated = Map::new();
        for field in &self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) => {}
                Some(value) if field.kind.matches(value) => {
                    validated.insert(field.name.to_string(), value.clone());
                }
                Some(value) => {
                    return Err(DomainError::malformed_model_output(format!(
                        "Field '{}' expected {} but got {}",
                        field.name,
                        field.kind.json_type(),
                        value
                    )));
                }
            }
        }

        serde_json::from_value(Value::Object(validated))
            .map_err(|e| DomainError::malformed_model_output(e.to_string()))
    }
}
