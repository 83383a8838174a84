//! Heuristic multi-pattern extraction
//!
//! Alternate entry point for richer free-form documents without clean
//! `Label: value` lines. Each field carries an ordered list of phrasings
//! (synonyms seen across carrier forms); patterns are tried in order and
//! the first match wins. This pass is never chained after the line-anchored
//! pass for the same document.

use crate::placeholder::is_placeholder;
use crate::sanitize::{coerce_amount, sanitize};
use fnol_domain::{ContactDetails, Field, FieldMap, FieldValue};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    static ref POLICY_NUMBER: Vec<Regex> = patterns(&[
        r"(?is)Policy(?:\sNo\.?|\sNumber)[:\s]*([A-Za-z0-9\-_/]+)",
        r"(?is)Policy #[:\s]*([A-Za-z0-9\-_/]+)",
    ]);
    static ref POLICYHOLDER: Vec<Regex> = patterns(&[
        r"(?is)Named Insured[:\s]*([A-Za-z ,.'-]{3,100})",
        r"(?is)Insured[:\s]*([A-Za-z ,.'-]{3,100})",
        r"(?is)Policyholder[:\s]*([A-Za-z ,.'-]{3,100})",
    ]);
    static ref EFFECTIVE_DATES: Vec<Regex> = patterns(&[
        r"(?is)Policy Period[:\s]*([A-Za-z0-9, /\-]+)",
        r"(?is)Effective Date[:\s]*([A-Za-z0-9, /\-]+)",
        r"(?is)Effective[:\s]*([A-Za-z0-9, /\-]+)",
    ]);
    static ref LOSS_DATE: Vec<Regex> = patterns(&[
        r"(?is)Date of Loss[:\s]*([A-Za-z0-9,\-/ ]{4,40})",
        r"(?is)Accident Date[:\s]*([A-Za-z0-9,\-/ ]{4,40})",
        r"(?is)Loss Date[:\s]*([A-Za-z0-9,\-/ ]{4,40})",
    ]);
    static ref LOSS_TIME: Vec<Regex> = patterns(&[
        r"(?is)Time of Loss[:\s]*([0-2]?[0-9]:[0-5][0-9](?:\s?[APMapm]{2})?)",
        r"(?is)Time[:\s]*([0-2]?[0-9]:[0-5][0-9](?:\s?[APMapm]{2})?)",
    ]);
    static ref LOCATION: Vec<Regex> = patterns(&[
        r"(?is)Location of Loss[:\s]*([A-Za-z0-9,\.\- /#]{5,200})",
        r"(?is)Location[:\s]*([A-Za-z0-9,\.\- /#]{5,200})",
    ]);
    static ref DESCRIPTION: Vec<Regex> = patterns(&[
        r"(?is)Description of Loss[:\s]*([\s\S]{10,400})",
        r"(?is)Describe the Loss[:\s]*([\s\S]{10,400})",
        r"(?is)Loss Description[:\s]*([\s\S]{10,400})",
    ]);
    static ref CLAIMANT: Vec<Regex> = patterns(&[
        r"(?is)Claimant[:\s]*([A-Za-z ,.'-]{3,120})",
        r"(?is)Claimant Name[:\s]*([A-Za-z ,.'-]{3,120})",
        r"(?is)Name of Insured[:\s]*([A-Za-z ,.'-]{3,120})",
    ]);
    static ref THIRD_PARTIES: Vec<Regex> = patterns(&[
        r"(?is)Third Party[:\s]*([A-Za-z ,.'-]{3,120})",
        r"(?is)Other Party[:\s]*([A-Za-z ,.'-]{3,120})",
    ]);
    static ref ASSET_TYPE: Vec<Regex> = patterns(&[
        r"(?is)Vehicle Type[:\s]*([A-Za-z0-9 ]{3,40})",
        r"(?is)Asset Type[:\s]*([A-Za-z0-9 ]{3,40})",
        r"(?is)Type of Vehicle[:\s]*([A-Za-z0-9 ]{3,40})",
    ]);
    static ref ASSET_ID: Vec<Regex> = patterns(&[
        r"(?is)VIN[:\s]*([A-HJ-NPR-Z0-9]{6,20})",
        r"(?is)Vehicle Identification Number[:\s]*([A-HJ-NPR-Z0-9]{6,20})",
        r"(?is)Serial Number[:\s]*([A-Za-z0-9\-]{4,40})",
    ]);
    static ref ESTIMATE: Vec<Regex> = patterns(&[
        r"(?is)Estimated Loss[:\s]*\$?([0-9,]+(?:\.[0-9]{2})?)",
        r"(?is)Initial Estimate[:\s]*\$?([0-9,]+(?:\.[0-9]{2})?)",
        r"(?is)Estimate[:\s]*\$?([0-9,]+(?:\.[0-9]{2})?)",
        r"(?is)Total Estimated Loss[:\s]*\$?([0-9,]+(?:\.[0-9]{2})?)",
    ]);
    static ref CLAIM_TYPE: Vec<Regex> = patterns(&[
        r"(?is)Claim Type[:\s]*([A-Za-z ]{3,40})",
        r"(?is)Type of Loss[:\s]*([A-Za-z ]{3,40})",
    ]);
    static ref ATTACHMENTS: Vec<Regex> = patterns(&[
        r"(?is)Attachments?[:\s]*([A-Za-z0-9, \-_/]+)",
    ]);

    static ref PHONE: Regex = Regex::new(r"(\+?\d[\d\-() ]{7,}\d)").unwrap();
    static ref EMAIL: Regex = Regex::new(r"([\w\.\-]+@[\w\.\-]+)").unwrap();

    static ref INJURY_WORDS: Regex = Regex::new(r"(?i)injury|bodily injury|personal injury").unwrap();
    static ref THEFT_WORDS: Regex = Regex::new(r"(?i)theft|stolen").unwrap();
    static ref PROPERTY_WORDS: Regex = Regex::new(r"(?i)collision|accident|damage").unwrap();
}

fn patterns(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|src| Regex::new(src).expect("pattern table entry must compile"))
        .collect()
}

/// First capture of the first matching pattern, trimmed.
fn find_first(patterns: &[Regex], text: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.captures(text).map(|caps| caps[1].trim().to_string()))
}

/// Heuristic field extraction over free-form document text.
///
/// Values are sanitized before entering the mapping; the Initial Estimate
/// is numerically coerced with the original string retained when it does
/// not parse.
pub fn extract_fields(text: &str) -> FieldMap {
    // Collapsed view for single-line fields; Description keeps the raw
    // text so its value may span lines.
    let collapsed = WHITESPACE.replace_all(text, " ");
    let t = collapsed.as_ref();

    let mut fields = FieldMap::new();

    fn put(map: &mut FieldMap, field: Field, raw: Option<String>) {
        if let Some(raw) = raw {
            if let Some(clean) = sanitize(&raw) {
                if !is_placeholder(&clean) {
                    map.insert(field, FieldValue::Text(clean));
                }
            }
        }
    }

    put(&mut fields, Field::PolicyNumber, find_first(&POLICY_NUMBER, t));
    put(&mut fields, Field::PolicyholderName, find_first(&POLICYHOLDER, t));
    put(&mut fields, Field::EffectiveDates, find_first(&EFFECTIVE_DATES, t));
    put(&mut fields, Field::Date, find_first(&LOSS_DATE, t));
    put(&mut fields, Field::Time, find_first(&LOSS_TIME, t));
    put(&mut fields, Field::Location, find_first(&LOCATION, t));

    if let Some(description) = find_first(&DESCRIPTION, text) {
        let collapsed = WHITESPACE.replace_all(&description, " ");
        put(&mut fields, Field::Description, Some(collapsed.trim().to_string()));
    }

    put(&mut fields, Field::Claimant, find_first(&CLAIMANT, t));
    put(&mut fields, Field::ThirdParties, find_first(&THIRD_PARTIES, t));

    let contact = ContactDetails {
        phone: PHONE.captures(t).map(|caps| caps[1].trim().to_string()),
        email: EMAIL.captures(t).map(|caps| caps[1].trim().to_string()),
    };
    if !contact.is_empty() {
        fields.insert(Field::ContactDetails, FieldValue::Contact(contact));
    }

    put(&mut fields, Field::AssetType, find_first(&ASSET_TYPE, t));
    put(&mut fields, Field::AssetId, find_first(&ASSET_ID, t));

    if let Some(est) = find_first(&ESTIMATE, t) {
        if sanitize(&est).is_some() {
            fields.insert(Field::InitialEstimate, coerce_amount(&est));
        }
    }

    match find_first(&CLAIM_TYPE, t) {
        Some(claim_type) => {
            put(&mut fields, Field::ClaimType, Some(claim_type.to_lowercase()));
        }
        None => {
            // Fall back to keyword inference over the whole text
            let inferred = if INJURY_WORDS.is_match(t) {
                Some("injury")
            } else if THEFT_WORDS.is_match(t) {
                Some("theft")
            } else if PROPERTY_WORDS.is_match(t) {
                Some("property")
            } else {
                None
            };
            if let Some(kind) = inferred {
                fields.insert(Field::ClaimType, FieldValue::Text(kind.to_string()));
            }
        }
    }

    put(&mut fields, Field::Attachments, find_first(&ATTACHMENTS, t));

    fields
}
