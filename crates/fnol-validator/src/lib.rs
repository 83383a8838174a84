//! FNOL Validator
//!
//! Compares an extraction result against an expected ground-truth record
//! to surface extraction errors.
//!
//! The expected record comes from a line-delimited JSON file; only the
//! first well-formed JSON object line is used. For each field in the union
//! of expected and extracted keys, both values are normalized to trimmed
//! strings and compared case-insensitively: expected-but-absent fields are
//! "missing", present-but-different fields are "inconsistent". Routing is
//! always computed from the extraction alone — expected values never
//! influence the routing decision.

#![warn(missing_docs)]

mod error;
mod expected;
mod validator;

pub use error::ValidatorError;
pub use expected::load_expected;
pub use validator::{validate, ValidationReport};
