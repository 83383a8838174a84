//! FNOL Extractor
//!
//! Converts an FNOL document (PDF or plain text) into the canonical field
//! mapping the rest of the pipeline consumes.
//!
//! # Architecture
//!
//! ```text
//! Document → DocumentKind → StructuredFieldReader ──┐
//!                        └→ LineAnchoredPass ───────┼→ Sanitizer → FieldMap
//!             (alternate)   HeuristicPatterns ──────┘
//! ```
//!
//! Two strategies feed the same canonical mapping:
//!
//! - **Structured form fields**: interactive AcroForm values read directly
//!   from the PDF and fuzzy-matched onto the canonical labels. When a
//!   document carries any form fields, this path is used exclusively.
//! - **Label-anchored text parsing**: deterministic line-by-line parsing
//!   of the linearized document text.
//!
//! A richer heuristic multi-pattern pass ([`extract_fields`]) is offered as
//! a separate entry point for free-form text; it is never chained after the
//! line-anchored pass for the same document.
//!
//! Both strategies share one placeholder/noise detector so that an
//! unanswered template prompt is reported as a missing field rather than a
//! garbage value.

#![warn(missing_docs)]

mod document;
mod error;
mod extractor;
mod form;
mod patterns;
mod placeholder;
mod sanitize;
mod text;

pub use document::DocumentKind;
pub use error::ExtractError;
pub use extractor::{extract_file, ExtractionResult};
pub use form::{map_form_fields, matches_label};
pub use patterns::extract_fields;
pub use placeholder::is_placeholder;
pub use sanitize::{coerce_amount, sanitize};
pub use text::extract_labeled_lines;
