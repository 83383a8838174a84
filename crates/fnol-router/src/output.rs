//! Output record assembly

use crate::{find_missing, route};
use fnol_domain::{Field, FieldMap, Route};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// The JSON-serializable result of processing one claim document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    /// All canonical labels, null where the field is absent
    pub extracted_fields: serde_json::Map<String, Value>,

    /// Missing mandatory field labels, in declared order
    pub missing_fields: Vec<String>,

    /// The routing decision
    pub recommended_route: Route,

    /// Human-readable explanation; starts as the router's machine reason,
    /// replaced by collaborator text when available
    pub reasoning: String,
}

/// Detect missing fields, apply the routing cascade, and assemble the
/// output record. Raw document text never enters the record.
pub fn build_output(fields: &FieldMap) -> OutputRecord {
    let missing = find_missing(fields);
    let (recommended_route, reasoning) = route(fields, &missing);
    debug!(route = %recommended_route, missing = missing.len(), "Routing decision");

    let mut extracted_fields = serde_json::Map::new();
    for field in Field::ALL {
        let value = fields
            .get(&field)
            .and_then(|v| serde_json::to_value(v).ok())
            .unwrap_or(Value::Null);
        extracted_fields.insert(field.label().to_string(), value);
    }

    OutputRecord {
        extracted_fields,
        missing_fields: missing.iter().map(|f| f.label().to_string()).collect(),
        recommended_route,
        reasoning,
    }
}

impl OutputRecord {
    /// Convenience accessor used by tests and the CLI.
    pub fn route(&self) -> Route {
        self.recommended_route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_domain::FieldValue;

    #[test]
    fn test_all_labels_present_with_nulls() {
        let record = build_output(&FieldMap::new());
        assert_eq!(record.extracted_fields.len(), 15);
        assert!(record
            .extracted_fields
            .values()
            .all(|v| v.is_null()));
        assert_eq!(record.recommended_route, Route::ManualReview);
    }

    #[test]
    fn test_json_field_names() {
        let mut fields = FieldMap::new();
        fields.insert(Field::PolicyNumber, FieldValue::Text("ABC-123".to_string()));

        let json = serde_json::to_value(build_output(&fields)).unwrap();
        assert!(json.get("extractedFields").is_some());
        assert!(json.get("missingFields").is_some());
        assert_eq!(json["recommendedRoute"], "Manual Review");
        assert_eq!(json["extractedFields"]["Policy Number"], "ABC-123");
        assert_eq!(json["extractedFields"]["Attachments"], Value::Null);
    }

    #[test]
    fn test_fully_populated_fast_track() {
        let mut fields = FieldMap::new();
        for field in Field::MANDATORY {
            fields.insert(field, FieldValue::Text("filled".to_string()));
        }
        fields.insert(Field::InitialEstimate, FieldValue::Amount(12_500.0));

        let record = build_output(&fields);
        assert!(record.missing_fields.is_empty());
        assert_eq!(record.recommended_route, Route::FastTrack);
        assert_eq!(record.extracted_fields["Initial Estimate"], 12_500.0);
    }
}
