//! Field sanitization and numeric coercion

use fnol_domain::FieldValue;

/// Normalize a raw candidate string, mapping noise to `None`.
///
/// Rejects empty values, form-template artifacts ("acord", "page"),
/// over-long captures, and bare not-applicable markers. Anything kept is
/// returned trimmed but otherwise untouched.
pub fn sanitize(raw: &str) -> Option<String> {
    let v = raw.trim();
    if v.is_empty() {
        return None;
    }
    let low = v.to_lowercase();
    if low.contains("acord") || low.contains("page") {
        return None;
    }
    if v.chars().count() > 200 {
        return None;
    }
    if low == "n/a" || low == "na" {
        return None;
    }
    Some(v.to_string())
}

/// Coerce a monetary-looking string to a numeric amount.
///
/// Thousands separators and currency symbols are stripped before parsing;
/// a string that still does not parse is retained verbatim, never dropped.
pub fn coerce_amount(raw: &str) -> FieldValue {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(amount) => FieldValue::Amount(amount),
        Err(_) => FieldValue::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_trims() {
        assert_eq!(sanitize("  ABC-123  "), Some("ABC-123".to_string()));
    }

    #[test]
    fn test_sanitize_rejects_blank_and_na() {
        assert_eq!(sanitize(""), None);
        assert_eq!(sanitize("   "), None);
        assert_eq!(sanitize("N/A"), None);
        assert_eq!(sanitize("na"), None);
    }

    #[test]
    fn test_sanitize_rejects_template_artifacts() {
        assert_eq!(sanitize("ACORD 1 (2016/03)"), None);
        assert_eq!(sanitize("see page 3"), None);
    }

    #[test]
    fn test_sanitize_length_boundary() {
        let ok: String = "y".repeat(200);
        let too_long: String = "y".repeat(201);
        assert!(sanitize(&ok).is_some());
        assert!(sanitize(&too_long).is_none());
    }

    #[test]
    fn test_sanitize_keeps_na_inside_words() {
        // Equality check, not containment: names survive
        assert_eq!(sanitize("Nathan Banks"), Some("Nathan Banks".to_string()));
    }

    #[test]
    fn test_coerce_amount_strips_formatting() {
        assert_eq!(coerce_amount("$12,500.00"), FieldValue::Amount(12500.0));
        assert_eq!(coerce_amount("24999.99"), FieldValue::Amount(24999.99));
    }

    #[test]
    fn test_coerce_amount_keeps_unparsable_string() {
        assert_eq!(
            coerce_amount("around five thousand"),
            FieldValue::Text("around five thousand".to_string())
        );
    }
}
