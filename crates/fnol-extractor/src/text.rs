//! Line-anchored deterministic text extraction
//!
//! Expects documents whose lines look like `Policy Number: ABC-123`.
//! Values are recorded raw; the orchestrator sanitizes them afterwards.

use fnol_domain::Field;
use std::collections::BTreeMap;

/// Extract label-anchored values from linearized document text.
///
/// For each physical line and each canonical label: if the line starts
/// (case-insensitively) with the label followed by `:`, `-`, or whitespace,
/// the remainder after the first `:`/`-` is the candidate value; with no
/// separator the label prefix itself is stripped. Non-empty candidates are
/// recorded per label, later lines overwriting earlier ones.
pub fn extract_labeled_lines(text: &str) -> BTreeMap<Field, String> {
    let mut out = BTreeMap::new();

    for line in text.lines() {
        let ln = line.trim();
        for field in Field::ALL {
            let label = field.label();
            if !starts_with_label(ln, label) {
                continue;
            }
            let candidate = match ln.find([':', '-']) {
                Some(idx) => ln[idx + 1..].trim(),
                None => ln[label.len()..].trim(),
            };
            if !candidate.is_empty() {
                out.insert(field, candidate.to_string());
            }
        }
    }

    out
}

/// Whether the line begins with the label followed by a separator
/// (`:`, `-`) or whitespace.
fn starts_with_label(line: &str, label: &str) -> bool {
    if line.len() < label.len() || !line.is_char_boundary(label.len()) {
        return false;
    }
    if !line[..label.len()].eq_ignore_ascii_case(label) {
        return false;
    }
    matches!(
        line[label.len()..].chars().next(),
        Some(c) if c.is_whitespace() || c == ':' || c == '-'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_separated_value() {
        let out = extract_labeled_lines("Policy Number: ABC-123\n");
        assert_eq!(out.get(&Field::PolicyNumber).unwrap(), "ABC-123");
    }

    #[test]
    fn test_dash_separated_value() {
        let out = extract_labeled_lines("Location - 123 Main St\n");
        assert_eq!(out.get(&Field::Location).unwrap(), "123 Main St");
    }

    #[test]
    fn test_case_insensitive_label() {
        let out = extract_labeled_lines("POLICY NUMBER: ABC-123\n");
        assert_eq!(out.get(&Field::PolicyNumber).unwrap(), "ABC-123");
    }

    #[test]
    fn test_label_must_be_at_line_start() {
        let out = extract_labeled_lines("See Policy Number: ABC-123\n");
        assert!(!out.contains_key(&Field::PolicyNumber));
    }

    #[test]
    fn test_date_label_does_not_shadow_effective_dates() {
        let out = extract_labeled_lines("Effective Dates: 01/01/2024-01/01/2025\n");
        assert_eq!(
            out.get(&Field::EffectiveDates).unwrap(),
            "01/01/2024-01/01/2025"
        );
        assert!(!out.contains_key(&Field::Date));
    }

    #[test]
    fn test_value_keeps_internal_separators() {
        // Only the first separator splits; the range survives intact
        let out = extract_labeled_lines("Date: 2024-05-01\n");
        assert_eq!(out.get(&Field::Date).unwrap(), "2024-05-01");
    }

    #[test]
    fn test_bare_label_yields_nothing() {
        let out = extract_labeled_lines("Description:\nClaimant\n");
        assert!(!out.contains_key(&Field::Description));
        assert!(!out.contains_key(&Field::Claimant));
    }

    #[test]
    fn test_later_lines_overwrite() {
        let out = extract_labeled_lines("Claimant: Jane Doe\nClaimant: John Roe\n");
        assert_eq!(out.get(&Field::Claimant).unwrap(), "John Roe");
    }

    #[test]
    fn test_whitespace_separator_strips_label() {
        let out = extract_labeled_lines("Claimant   Jane Doe\n");
        assert_eq!(out.get(&Field::Claimant).unwrap(), "Jane Doe");
    }
}
