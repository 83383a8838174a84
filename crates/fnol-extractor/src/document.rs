//! Document access: kind resolution, page text, and AcroForm fields
//!
//! PDF parsing uses `lopdf`. Pages or form fields that fail to parse are
//! skipped and logged; only a document that cannot be opened is fatal.

use crate::error::ExtractError;
use lopdf::{Document, Object};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Document kind, resolved once per invocation from the file extension.
///
/// `Unknown` extensions are read as plain text; there is no silent
/// fallthrough on dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// PDF document (form-capable)
    Pdf,
    /// Plain-text document
    PlainText,
    /// Unrecognized extension, treated as plain text
    Unknown,
}

impl DocumentKind {
    /// Resolve the kind from a file path's extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("txt") => DocumentKind::PlainText,
            _ => DocumentKind::Unknown,
        }
    }
}

/// Extract the full text of a PDF, page by page, newline-joined.
///
/// Pages whose content streams fail to parse are skipped.
pub fn read_pdf_text(path: &Path) -> Result<String, ExtractError> {
    let doc = Document::load(path).map_err(|e| ExtractError::open(path, e))?;

    let mut parts: Vec<String> = Vec::new();
    for page_number in doc.get_pages().keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(text) => parts.push(text),
            Err(e) => {
                warn!(page = page_number, "Skipping unparsable page: {}", e);
            }
        }
    }
    Ok(parts.join("\n"))
}

/// Read the interactive form's name→value pairs from a PDF, in document
/// order. Empty when the document has no AcroForm; individual fields that
/// fail to parse are skipped.
pub fn read_form_fields(path: &Path) -> Result<Vec<(String, String)>, ExtractError> {
    let doc = Document::load(path).map_err(|e| ExtractError::open(path, e))?;

    let mut result = Vec::new();

    let fields = match form_field_array(&doc) {
        Some(fields) => fields,
        None => return Ok(result),
    };

    for field in fields {
        let dict = match resolve(&doc, field).as_dict() {
            Ok(dict) => dict,
            Err(e) => {
                debug!("Skipping unparsable form field: {}", e);
                continue;
            }
        };
        let name = dict
            .get(b"T")
            .ok()
            .and_then(|obj| object_to_string(&doc, obj));
        let value = dict
            .get(b"V")
            .ok()
            .and_then(|obj| object_to_string(&doc, obj))
            .unwrap_or_default();
        if let Some(name) = name {
            result.push((name, value));
        }
    }

    Ok(result)
}

/// Read a plain-text document, tolerating invalid UTF-8.
pub fn read_plain_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|e| ExtractError::open(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Locate the /AcroForm /Fields array, following indirect references.
fn form_field_array(doc: &Document) -> Option<&Vec<Object>> {
    let catalog = doc.catalog().ok()?;
    let acro = resolve(doc, catalog.get(b"AcroForm").ok()?);
    let fields = resolve(doc, acro.as_dict().ok()?.get(b"Fields").ok()?);
    fields.as_array().ok()
}

/// Follow an indirect reference one level; leaves other objects untouched.
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        other => other,
    }
}

/// Render a PDF object as a string value where it sensibly has one.
fn object_to_string(doc: &Document, obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Object::Integer(n) => Some(n.to_string()),
        Object::Real(n) => Some(n.to_string()),
        Object::Reference(id) => doc
            .get_object(*id)
            .ok()
            .and_then(|inner| object_to_string(doc, inner)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_path(Path::new("claim.pdf")), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("CLAIM.PDF")), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("claim.txt")), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_path(Path::new("claim.docx")), DocumentKind::Unknown);
        assert_eq!(DocumentKind::from_path(Path::new("claim")), DocumentKind::Unknown);
    }

    #[test]
    fn test_read_plain_text_lossy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Policy Number: ABC-123\n\xff\xfe").unwrap();

        let text = read_plain_text(file.path()).unwrap();
        assert!(text.starts_with("Policy Number: ABC-123"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = read_plain_text(Path::new("/nonexistent/claim.txt")).unwrap_err();
        assert!(matches!(err, ExtractError::DocumentOpen { .. }));
    }

    #[test]
    fn test_unreadable_pdf_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not a pdf at all").unwrap();

        assert!(read_pdf_text(file.path()).is_err());
        assert!(read_form_fields(file.path()).is_err());
    }
}
