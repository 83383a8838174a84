//! Placeholder/noise detection
//!
//! Blank form templates are full of structurally-present but meaningless
//! values: date-format hints, unanswered embedded prompts, boilerplate
//! headings. Both extraction strategies share this detector so that such
//! values surface as missing fields, never as garbage answers.

/// Tokens that mark a value as an unfilled template placeholder.
const PLACEHOLDER_TOKENS: [&str; 4] = ["(mm/dd/yyyy)", "mm/dd/yyyy", "n/a", "na"];

/// Question words that, combined with a colon, indicate an unanswered
/// embedded prompt rather than a filled answer.
const PROMPT_WORDS: [&str; 6] = ["where", "when", "describe", "estimate", "phone", "owner"];

/// Classify a (trimmed) candidate value as template placeholder/noise.
///
/// Rules are applied in a fixed order, first true wins. The order and
/// thresholds affect which fields are reported missing and must not be
/// reshuffled.
pub fn is_placeholder(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }

    let low = value.to_lowercase();
    if PLACEHOLDER_TOKENS.iter().any(|tok| low.contains(tok)) {
        return true;
    }

    let len = value.chars().count();
    if len > 200 {
        return true;
    }

    // Form-template artifacts (headers, page footers)
    if low.contains("acord") || low.contains("page") {
        return true;
    }

    // An embedded colon plus a question word reads as an unanswered prompt
    if value.contains(':') && PROMPT_WORDS.iter().any(|w| low.contains(w)) {
        return true;
    }

    // Heavy uppercase indicative of a template heading
    let letters: Vec<char> = value.chars().filter(|c| c.is_alphabetic()).collect();
    if !letters.is_empty() {
        let upper = letters.iter().filter(|c| c.is_uppercase()).count();
        if upper as f64 / letters.len() as f64 > 0.6 && len > 20 {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_noise() {
        assert!(is_placeholder(""));
    }

    #[test]
    fn test_date_format_hints_are_noise() {
        assert!(is_placeholder("MM/DD/YYYY"));
        assert!(is_placeholder("(mm/dd/yyyy)"));
        assert!(is_placeholder("Date (MM/DD/YYYY)"));
    }

    #[test]
    fn test_na_markers_are_noise() {
        assert!(is_placeholder("N/A"));
        assert!(is_placeholder("n/a"));
        assert!(is_placeholder("NA"));
    }

    #[test]
    fn test_length_boundary_at_200_chars() {
        let exactly_200: String = "x".repeat(200);
        let over: String = "x".repeat(201);
        assert!(!is_placeholder(&exactly_200));
        assert!(is_placeholder(&over));
    }

    #[test]
    fn test_form_artifacts_are_noise() {
        assert!(is_placeholder("ACORD 1 (2016/03)"));
        assert!(is_placeholder("Page 2 of 4"));
    }

    #[test]
    fn test_unanswered_prompt_is_noise() {
        assert!(is_placeholder("Where did the loss occur:"));
        assert!(is_placeholder("Estimate of damage: describe below"));
        // A colon without a prompt word is a legitimate value
        assert!(!is_placeholder("12:30 PM"));
    }

    #[test]
    fn test_uppercase_heading_is_noise() {
        assert!(is_placeholder("DESCRIPTION OF LOSS SECTION B"));
        // Short uppercase values are fine (IDs, state codes)
        assert!(!is_placeholder("ABC-123"));
        // Long mixed-case values are fine
        assert!(!is_placeholder("Rear-end collision at the Main St intersection"));
    }

    #[test]
    fn test_normal_values_pass() {
        assert!(!is_placeholder("Jane Doe"));
        assert!(!is_placeholder("123 Main St"));
        assert!(!is_placeholder("$12,500.00"));
    }
}
