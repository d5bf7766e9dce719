use serde::{Deserialize, Serialize};

/// Output of one pipeline invocation: schema field names mapped to the
/// values the model asserted.
///
/// A field is present only when the model reported it. Absent means
/// "unknown" - callers must never read it as false, zero, or empty.
/// Constructed once per request, returned to the caller, not persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landlord_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landlord_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_guarantee: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_not_serialized() {
        let record = StructuredRecord {
            rent: Some(950.0),
            ..Default::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"rent":950.0}"#);
    }

    #[test]
    fn test_empty_record_serializes_to_empty_object() {
        let record = StructuredRecord::default();
        assert_eq!(serde_json::to_string(&record).unwrap(), "{}");
    }
}
