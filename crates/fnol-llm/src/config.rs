//! Reasoning provider configuration

use crate::ReasoningError;
use serde::{Deserialize, Serialize};

/// Configuration for the reasoning collaborator.
///
/// Both options are required; construction fails fast rather than
/// deferring the failure to the first network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningConfig {
    /// Authentication credential for the service
    pub api_key: String,

    /// Model identifier to invoke
    pub model: String,
}

impl ReasoningConfig {
    /// Build a configuration, rejecting missing or blank options.
    pub fn new(
        api_key: Option<String>,
        model: Option<String>,
    ) -> Result<Self, ReasoningError> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ReasoningError::Config("api_key is required".to_string()))?;
        let model = model
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| ReasoningError::Config("model is required".to_string()))?;
        Ok(Self { api_key, model })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_config_is_accepted() {
        let config = ReasoningConfig::new(
            Some("key-123".to_string()),
            Some("llama-3.1-8b-instant".to_string()),
        )
        .unwrap();
        assert_eq!(config.model, "llama-3.1-8b-instant");
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        let err = ReasoningConfig::new(None, Some("model".to_string())).unwrap_err();
        assert!(matches!(err, ReasoningError::Config(_)));
    }

    #[test]
    fn test_blank_model_fails_fast() {
        let err =
            ReasoningConfig::new(Some("key".to_string()), Some("  ".to_string())).unwrap_err();
        assert!(matches!(err, ReasoningError::Config(_)));
    }
}
