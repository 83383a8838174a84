//! Expected-record loading (line-delimited JSON)

use crate::error::ValidatorError;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load the first well-formed JSON object line from a JSONL file.
///
/// Blank and unparsable lines are skipped; a file with no usable line
/// yields an empty record.
pub fn load_expected(path: &Path) -> Result<serde_json::Map<String, Value>, ValidatorError> {
    let contents = fs::read_to_string(path).map_err(|source| ValidatorError::ExpectedFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    for line in contents.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Object(record)) => return Ok(record),
            Ok(_) => warn!("Skipping non-object JSON line in expected file"),
            Err(e) => warn!("Skipping malformed JSON line in expected file: {}", e),
        }
    }

    Ok(serde_json::Map::new())
}
