//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document extraction error
    #[error(transparent)]
    Extract(#[from] fnol_extractor::ExtractError),

    /// Validation input error
    #[error(transparent)]
    Validator(#[from] fnol_validator::ValidatorError),

    /// Reasoning configuration error (call failures are handled inline,
    /// never through this path)
    #[error(transparent)]
    Reasoning(#[from] fnol_llm::ReasoningError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
