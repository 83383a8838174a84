//! Reasoning prompt construction.
//!
//! Prompts summarize the extraction without ever embedding the raw
//! document text; only its length is surfaced.

use fnol_router::OutputRecord;
use fnol_validator::ValidationReport;
use serde_json::Value;

/// Prompt for the plain extract-and-route flow.
pub fn extraction_prompt(record: &OutputRecord, raw_text_length: usize) -> String {
    format!(
        "Extracted fields: {}\n\
         Missing fields: {}\n\
         Recommended route: {}\n\
         Raw text length: {}\n\
         Provide a short reasoning for the routing decision and any suggested next steps.",
        pretty(&record.extracted_fields),
        record.missing_fields.join(", "),
        record.recommended_route,
        raw_text_length,
    )
}

/// Prompt for the validation flow, including the expected record.
pub fn validation_prompt(
    report: &ValidationReport,
    expected: &serde_json::Map<String, Value>,
) -> String {
    format!(
        "Extracted fields: {}\n\
         Expected fields (from JSONL): {}\n\
         Missing or inconsistent fields: {}\n\
         Recommended route (system): {}\n\
         Raw text length: {}\n\
         Provide a short reasoning for the routing decision and enumerate discrepancies.",
        pretty(&report.extracted_fields),
        pretty(expected),
        report.missing_fields.join(", "),
        report.recommended_route,
        report.raw_text_length,
    )
}

fn pretty(map: &serde_json::Map<String, Value>) -> String {
    serde_json::to_string_pretty(map).unwrap_or_else(|_| "{}".to_string())
}
