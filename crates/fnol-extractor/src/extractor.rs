//! Extraction orchestrator: picks a strategy per document and produces the
//! canonical field mapping.

use crate::document::{self, DocumentKind};
use crate::error::ExtractError;
use crate::form::map_form_fields;
use crate::placeholder::is_placeholder;
use crate::sanitize::{coerce_amount, sanitize};
use crate::text::extract_labeled_lines;
use fnol_domain::{Field, FieldMap, FieldValue};
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of extracting one document.
///
/// The raw document text is transient: it exists for diagnostics and for
/// the reasoning prompt's length figure, and is detached before any output
/// record is assembled. The structured-form path carries no raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// Canonical field mapping; absent fields are simply not present
    pub fields: FieldMap,
    raw_text: Option<String>,
}

impl ExtractionResult {
    /// Build a result from an already-extracted field mapping, with no
    /// raw text attached (the structured-form path, and callers that
    /// ran the heuristic pass themselves).
    pub fn from_fields(fields: FieldMap) -> Self {
        ExtractionResult {
            fields,
            raw_text: None,
        }
    }

    /// Attach the raw document text the fields came from.
    pub fn with_raw_text(mut self, raw_text: String) -> Self {
        self.raw_text = Some(raw_text);
        self
    }

    /// Length of the raw extracted text, in characters (0 when none).
    pub fn raw_text_length(&self) -> usize {
        self.raw_text.as_ref().map_or(0, |t| t.chars().count())
    }

    /// Detach the raw text, leaving the result without it.
    pub fn take_raw_text(&mut self) -> Option<String> {
        self.raw_text.take()
    }

    /// Consume the result into its field mapping and raw text.
    pub fn into_parts(self) -> (FieldMap, Option<String>) {
        (self.fields, self.raw_text)
    }
}

/// Extract the canonical fields from a document on disk.
///
/// PDFs are first probed for interactive form fields; a document carrying
/// any form data is read exclusively through the structured reader (fields
/// it lacks stay absent, with no text fallback). Everything else goes
/// through full-text extraction and the line-anchored pass. A document
/// that opens but matches nothing yields an all-absent mapping, never an
/// error.
pub fn extract_file(path: &Path) -> Result<ExtractionResult, ExtractError> {
    let kind = DocumentKind::from_path(path);
    debug!(path = %path.display(), ?kind, "Starting extraction");

    if kind == DocumentKind::Pdf {
        match document::read_form_fields(path) {
            Ok(form) if !form.is_empty() => {
                info!(form_fields = form.len(), "Using structured form fields");
                return Ok(ExtractionResult {
                    fields: map_form_fields(&form),
                    raw_text: None,
                });
            }
            Ok(_) => {
                debug!("No form fields present, falling back to text extraction");
            }
            Err(e) => {
                // The text path re-attempts the open; if the document is
                // truly unreadable it fails fatally there.
                warn!("Form field read failed, falling back to text extraction: {}", e);
            }
        }
    }

    let text = match kind {
        DocumentKind::Pdf => document::read_pdf_text(path)?,
        DocumentKind::PlainText | DocumentKind::Unknown => document::read_plain_text(path)?,
    };

    let mut fields = FieldMap::new();
    for (field, raw) in extract_labeled_lines(&text) {
        match sanitize(&raw) {
            Some(clean) if !is_placeholder(&clean) => {
                fields.insert(field, FieldValue::Text(clean));
            }
            Some(_) => debug!(field = field.label(), "Discarding placeholder value"),
            None => {}
        }
    }

    // Coerce the estimate so routing can compare numerically
    if let Some(FieldValue::Text(s)) = fields.get(&Field::InitialEstimate).cloned() {
        fields.insert(Field::InitialEstimate, coerce_amount(&s));
    }

    info!(
        fields = fields.len(),
        text_length = text.chars().count(),
        "Text extraction complete"
    );

    Ok(ExtractionResult {
        fields,
        raw_text: Some(text),
    })
}
