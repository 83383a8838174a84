//! Structured-field reader: fuzzy-maps interactive form field names onto
//! the canonical label set.

use crate::placeholder::is_placeholder;
use fnol_domain::{Field, FieldMap, FieldValue};
use tracing::debug;

/// Whether a form field name matches a canonical label.
///
/// Every label word longer than 2 characters must appear in the field name,
/// case-insensitively. Short words ("of", "ID") are ignored so that e.g. a
/// form field named `AssetIdentification` still matches "Asset ID".
pub fn matches_label(label: &str, field_name: &str) -> bool {
    let name = field_name.to_lowercase();
    label
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .all(|word| name.contains(&word.to_lowercase()))
}

/// Map raw form field name→value pairs onto the canonical field set.
///
/// For each canonical label, the first form field (in document order) whose
/// name matches by word containment wins; failing that, an exact lookup on
/// the label itself or the label with spaces replaced by underscores.
/// Matched values pass through the placeholder detector; noise maps to
/// absent.
pub fn map_form_fields(form: &[(String, String)]) -> FieldMap {
    let mut mapped = FieldMap::new();

    for field in Field::ALL {
        let label = field.label();

        let mut found = form
            .iter()
            .find(|(name, _)| matches_label(label, name))
            .map(|(_, value)| value.as_str());

        if found.is_none() {
            let underscored = label.replace(' ', "_");
            found = form
                .iter()
                .find(|(name, _)| name == label || name == &underscored)
                .map(|(_, value)| value.as_str());
        }

        if let Some(raw) = found {
            let value = raw.trim();
            if is_placeholder(value) {
                debug!(field = label, "Discarding placeholder form value");
            } else {
                mapped.insert(field, FieldValue::Text(value.to_string()));
            }
        }
    }

    mapped
}
