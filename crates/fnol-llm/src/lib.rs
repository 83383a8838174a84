//! FNOL Reasoning Provider Layer
//!
//! Implementations of the `ReasoningProvider` trait from `fnol-domain`:
//! the collaborator that turns a structured extraction summary into a
//! short human-readable explanation.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `GroqProvider`: OpenAI-compatible chat-completions API
//!
//! The pipeline finalizes routing before any provider is invoked; a
//! provider failure is surfaced to the caller and never disturbs the
//! already-computed decision.
//!
//! # Examples
//!
//! ```
//! use fnol_llm::MockProvider;
//! use fnol_domain::traits::ReasoningProvider;
//!
//! let provider = MockProvider::new("Routed to Fast-track: low estimate.");
//! let result = provider.explain("summary").unwrap();
//! assert!(!result.is_empty());
//! ```

#![warn(missing_docs)]

mod config;
pub mod groq;

use fnol_domain::traits::ReasoningProvider;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use config::ReasoningConfig;
pub use groq::GroqProvider;

/// Errors that can occur during reasoning operations
#[derive(Error, Debug)]
pub enum ReasoningError {
    /// Missing or invalid provider configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the reasoning service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("Reasoning error: {0}")]
    Other(String),
}

/// Canned outcome for one prompt in [`MockProvider`].
#[derive(Debug, Clone)]
enum MockOutcome {
    Reply(String),
    Failure,
}

/// Mock reasoning provider for deterministic testing.
///
/// Returns pre-configured responses without any network calls.
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockOutcome>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a mock with a fixed response for all prompts.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt.
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MockOutcome::Reply(response.into()));
    }

    /// Configure the mock to fail for a specific prompt.
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MockOutcome::Failure);
    }

    /// Number of times `explain` has been called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock reasoning")
    }
}

impl ReasoningProvider for MockProvider {
    type Error = ReasoningError;

    fn explain(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        match responses.get(prompt) {
            Some(MockOutcome::Reply(response)) => Ok(response.clone()),
            Some(MockOutcome::Failure) => {
                Err(ReasoningError::Other("Mock error".to_string()))
            }
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default_response() {
        let provider = MockProvider::new("canned");
        assert_eq!(provider.explain("any prompt").unwrap(), "canned");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("fast", "low estimate");
        assert_eq!(provider.explain("fast").unwrap(), "low estimate");
        assert_eq!(provider.explain("other").unwrap(), "Default mock reasoning");
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("x");
        assert_eq!(provider.call_count(), 0);
        provider.explain("a").unwrap();
        provider.explain("b").unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad");
        assert!(matches!(
            provider.explain("bad"),
            Err(ReasoningError::Other(_))
        ));
    }

    #[test]
    fn test_mock_provider_literal_error_text_is_a_reply() {
        // A response that happens to say "ERROR" is still a reply,
        // not a configured failure
        let mut provider = MockProvider::default();
        provider.add_response("status", "ERROR");
        assert_eq!(provider.explain("status").unwrap(), "ERROR");
    }
}
