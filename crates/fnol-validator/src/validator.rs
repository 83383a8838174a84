//! Comparison of extraction output against an expected record

use fnol_domain::{Field, FieldValue, Route};
use fnol_extractor::ExtractionResult;
use fnol_router::build_output;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Result of validating one document against an expected record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// All canonical labels, null where the field is absent
    pub extracted_fields: serde_json::Map<String, Value>,

    /// Missing fields followed by inconsistent fields, order preserved
    pub missing_fields: Vec<String>,

    /// Routing decision, computed from the extraction alone
    pub recommended_route: Route,

    /// Explanation text (router reason until a collaborator replaces it)
    pub reasoning: String,

    /// Length of the raw extracted document text, in characters
    #[serde(rename = "raw_text_length")]
    pub raw_text_length: usize,
}

/// Compare an extraction result to an expected record.
///
/// The union of keys is walked deterministically: expected-record keys
/// first, then the remaining canonical labels. Both sides normalize to
/// trimmed strings (numbers through one canonical float rendering, so
/// `12500` and `12500.0` agree); comparison is case-insensitive.
pub fn validate(
    expected: &serde_json::Map<String, Value>,
    mut extraction: ExtractionResult,
) -> ValidationReport {
    // Raw text is read once for its length and discarded before any
    // output assembly.
    let raw_text_length = extraction.raw_text_length();
    drop(extraction.take_raw_text());

    let mut missing: Vec<String> = Vec::new();
    let mut inconsistent: Vec<String> = Vec::new();

    for key in union_of_keys(expected) {
        let exp = expected.get(&key).and_then(normalize_json);
        let ext = Field::from_label(&key)
            .and_then(|field| extraction.fields.get(&field))
            .and_then(normalize_field);

        match (exp, ext) {
            (Some(_), None) => missing.push(key),
            (Some(exp), Some(ext)) if exp.to_lowercase() != ext.to_lowercase() => {
                debug!(field = %key, %exp, %ext, "Inconsistent field value");
                inconsistent.push(key);
            }
            _ => {}
        }
    }

    let record = build_output(&extraction.fields);

    let mut missing_fields = missing;
    missing_fields.extend(inconsistent);

    ValidationReport {
        extracted_fields: record.extracted_fields,
        missing_fields,
        recommended_route: record.recommended_route,
        reasoning: record.reasoning,
        raw_text_length,
    }
}

/// Expected-record keys first, then the canonical labels not already seen.
fn union_of_keys(expected: &serde_json::Map<String, Value>) -> Vec<String> {
    let mut keys: Vec<String> = expected.keys().cloned().collect();
    for field in Field::ALL {
        if !expected.contains_key(field.label()) {
            keys.push(field.label().to_string());
        }
    }
    keys
}

fn normalize_json(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => n.as_f64().map(|f| f.to_string()),
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Array(items) if items.is_empty() => None,
        Value::Object(entries) if entries.is_empty() => None,
        other => serde_json::to_string(other).ok(),
    }
}

fn normalize_field(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        FieldValue::Amount(amount) => Some(amount.to_string()),
        FieldValue::Contact(contact) if contact.is_empty() => None,
        FieldValue::Contact(contact) => serde_json::to_value(contact)
            .ok()
            .map(|v| v.to_string()),
    }
}
