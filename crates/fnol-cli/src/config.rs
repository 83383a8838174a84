//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration, loaded from a TOML file.
///
/// The reasoning collaborator is configured explicitly here rather than
/// through environment variables; when the `[reasoning]` section is absent
/// the external call is skipped and the router's machine reason stands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Reasoning collaborator settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<ReasoningSettings>,
}

/// Settings for the external reasoning service.
///
/// Both options are required once the section is present; validation
/// happens fail-fast at provider construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningSettings {
    /// Authentication credential
    pub api_key: Option<String>,

    /// Model identifier to invoke
    pub model: Option<String>,
}

impl Config {
    /// Default configuration file path (`~/.fnol/config.toml`).
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".fnol").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicitly given path must be readable; a missing file at the
    /// default path yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::read(&path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}
