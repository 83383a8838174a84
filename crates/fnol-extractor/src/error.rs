//! Error types for extraction

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction.
///
/// Per-page and per-field parse failures inside a document are not errors:
/// they are skipped locally and logged. Only a document that cannot be
/// opened at all is fatal.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The document could not be opened or read at all
    #[error("Failed to open document {path}: {reason}")]
    DocumentOpen {
        /// Path of the offending document
        path: PathBuf,
        /// Underlying parser or I/O failure
        reason: String,
    },
}

impl ExtractError {
    pub(crate) fn open(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        ExtractError::DocumentOpen {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
