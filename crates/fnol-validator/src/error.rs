//! Error types for validation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading validation inputs.
///
/// A file with no parseable JSON line is not an error (it yields an empty
/// expected record); only failing to read the file at all is.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// The expected-values file could not be read
    #[error("Failed to read expected-values file {path}: {source}")]
    ExpectedFileRead {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}
