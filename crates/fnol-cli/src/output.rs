//! Output emission: stdout plus an optional file.

use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Print the record as pretty JSON and optionally save it to a file.
///
/// The saved-to note goes to stderr so stdout stays pure JSON.
pub fn emit<T: Serialize>(record: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    println!("{}", json);

    if let Some(path) = output {
        fs::write(path, &json)?;
        eprintln!("Output saved to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        emit(&serde_json::json!({"recommendedRoute": "Fast-track"}), Some(&path)).unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("Fast-track"));
    }
}
