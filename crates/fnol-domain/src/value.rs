//! Field value types

use crate::Field;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from canonical field to its extracted value.
///
/// Absence from the map means the field was not found (or was rejected as
/// placeholder/noise); a present value is always fully sanitized.
pub type FieldMap = BTreeMap<Field, FieldValue>;

/// An extracted, sanitized field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Trimmed, non-empty, non-placeholder text
    Text(String),
    /// Monetary amount (Initial Estimate only)
    Amount(f64),
    /// Structured contact sub-record
    Contact(ContactDetails),
}

impl FieldValue {
    /// Build a text value, trimming the input. Returns `None` for blank input.
    pub fn text(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(FieldValue::Text(trimmed.to_string()))
        }
    }

    /// Whether the value counts as empty for missing-field purposes
    /// (blank text or a contact record with neither phone nor email).
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Amount(_) => false,
            FieldValue::Contact(c) => c.is_empty(),
        }
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric amount, if this is an amount value.
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            FieldValue::Amount(n) => Some(*n),
            _ => None,
        }
    }
}

/// Contact details sub-record: optional phone and/or email.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactDetails {
    /// Phone number, as written in the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactDetails {
    /// True when neither phone nor email is present.
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_trims_and_rejects_blank() {
        assert_eq!(
            FieldValue::text("  ABC-123  "),
            Some(FieldValue::Text("ABC-123".to_string()))
        );
        assert_eq!(FieldValue::text("   "), None);
        assert_eq!(FieldValue::text(""), None);
    }

    #[test]
    fn test_empty_contact_counts_as_empty() {
        let empty = FieldValue::Contact(ContactDetails::default());
        assert!(empty.is_empty());

        let with_phone = FieldValue::Contact(ContactDetails {
            phone: Some("555-0100".to_string()),
            email: None,
        });
        assert!(!with_phone.is_empty());
    }

    #[test]
    fn test_amount_is_never_empty() {
        assert!(!FieldValue::Amount(0.0).is_empty());
    }

    #[test]
    fn test_serialization_shapes() {
        let text = serde_json::to_value(FieldValue::Text("Sedan".to_string())).unwrap();
        assert_eq!(text, serde_json::json!("Sedan"));

        let amount = serde_json::to_value(FieldValue::Amount(12500.0)).unwrap();
        assert_eq!(amount, serde_json::json!(12500.0));

        let contact = serde_json::to_value(FieldValue::Contact(ContactDetails {
            phone: Some("555-0100".to_string()),
            email: None,
        }))
        .unwrap();
        assert_eq!(contact, serde_json::json!({"phone": "555-0100"}));
    }
}
