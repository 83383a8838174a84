//! The routing rule cascade

use fnol_domain::{Field, FieldMap, Route};

/// Claims with a numeric estimate strictly below this are fast-tracked.
pub const FAST_TRACK_THRESHOLD: f64 = 25_000.0;

/// Description keywords that flag a claim for investigation.
const FRAUD_KEYWORDS: [&str; 4] = ["fraud", "inconsistent", "staged", "intentional"];

/// Decide the destination queue and a short machine-generated reason.
///
/// Rules are evaluated top to bottom, first match wins. Missing-field
/// gating precedes all content rules; fraud and injury routing precede
/// cost-based routing.
pub fn route(fields: &FieldMap, missing: &[Field]) -> (Route, String) {
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        return (
            Route::ManualReview,
            format!("Missing mandatory fields: {}", labels.join(", ")),
        );
    }

    let description = text_of(fields, Field::Description).to_lowercase();
    let suspicious: Vec<&str> = FRAUD_KEYWORDS
        .iter()
        .copied()
        .filter(|word| description.contains(word))
        .collect();
    if !suspicious.is_empty() {
        return (
            Route::InvestigationFlag,
            format!(
                "Description contains suspicious words: {}",
                suspicious.join(", ")
            ),
        );
    }

    let claim_type = text_of(fields, Field::ClaimType).to_lowercase();
    if claim_type.contains("injur") {
        return (
            Route::SpecialistQueue,
            "Claim type indicates injury; route to specialist".to_string(),
        );
    }

    if let Some(estimate) = fields
        .get(&Field::InitialEstimate)
        .and_then(|v| v.as_amount())
    {
        if estimate < FAST_TRACK_THRESHOLD {
            return (
                Route::FastTrack,
                format!(
                    "Estimated damage ${} is below 25,000",
                    format_amount(estimate)
                ),
            );
        }
        return (
            Route::StandardQueue,
            format!(
                "Estimated damage ${} exceeds fast-track threshold",
                format_amount(estimate)
            ),
        );
    }

    (
        Route::StandardQueue,
        "No special routing rule matched".to_string(),
    )
}

fn text_of(fields: &FieldMap, field: Field) -> &str {
    fields.get(&field).and_then(|v| v.as_text()).unwrap_or("")
}

/// Format an amount with thousands separators and two decimals.
fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{int_grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_missing;
    use fnol_domain::FieldValue;

    fn populated() -> FieldMap {
        let mut fields = FieldMap::new();
        for field in Field::MANDATORY {
            fields.insert(field, FieldValue::Text("filled".to_string()));
        }
        fields.insert(
            Field::Description,
            FieldValue::Text("Rear-end collision at intersection".to_string()),
        );
        fields.insert(Field::ClaimType, FieldValue::Text("property".to_string()));
        fields.insert(Field::InitialEstimate, FieldValue::Amount(12_500.0));
        fields
    }

    #[test]
    fn test_missing_fields_gate_everything() {
        let fields = FieldMap::new();
        let missing = find_missing(&fields);
        let (route, reason) = route(&fields, &missing);

        assert_eq!(route, Route::ManualReview);
        assert_eq!(
            reason,
            "Missing mandatory fields: Policy Number, Policyholder Name, \
             Effective Dates, Date, Location, Description, Claimant, \
             Asset Type, Initial Estimate, Claim Type"
        );
    }

    #[test]
    fn test_fraud_precedes_estimate() {
        let mut fields = populated();
        fields.insert(
            Field::Description,
            FieldValue::Text("Looks staged, possibly fraud".to_string()),
        );
        // A tiny estimate must not fast-track a suspicious claim
        fields.insert(Field::InitialEstimate, FieldValue::Amount(100.0));

        let (route, reason) = route(&fields, &[]);
        assert_eq!(route, Route::InvestigationFlag);
        assert_eq!(reason, "Description contains suspicious words: fraud, staged");
    }

    #[test]
    fn test_injury_precedes_estimate() {
        let mut fields = populated();
        fields.insert(Field::ClaimType, FieldValue::Text("bodily injury".to_string()));
        fields.insert(Field::InitialEstimate, FieldValue::Amount(500.0));

        let (route, _) = route(&fields, &[]);
        assert_eq!(route, Route::SpecialistQueue);
    }

    #[test]
    fn test_fast_track_boundary_is_exclusive() {
        let mut fields = populated();

        fields.insert(Field::InitialEstimate, FieldValue::Amount(24_999.99));
        let (below, reason) = route(&fields, &[]);
        assert_eq!(below, Route::FastTrack);
        assert_eq!(reason, "Estimated damage $24,999.99 is below 25,000");

        fields.insert(Field::InitialEstimate, FieldValue::Amount(25_000.0));
        let (at, reason) = route(&fields, &[]);
        assert_eq!(at, Route::StandardQueue);
        assert_eq!(
            reason,
            "Estimated damage $25,000.00 exceeds fast-track threshold"
        );
    }

    #[test]
    fn test_non_numeric_estimate_goes_standard() {
        let mut fields = populated();
        fields.insert(
            Field::InitialEstimate,
            FieldValue::Text("around five thousand".to_string()),
        );

        let (route, reason) = route(&fields, &[]);
        assert_eq!(route, Route::StandardQueue);
        assert_eq!(reason, "No special routing rule matched");
    }

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(12_500.0), "12,500.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(0.0), "0.00");
    }
}
