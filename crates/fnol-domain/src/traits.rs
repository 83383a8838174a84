//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

/// Trait for the reasoning collaborator that turns a structured summary of
/// an extraction into a short human-readable explanation.
///
/// Implemented by the infrastructure layer (fnol-llm). The pipeline
/// finalizes its routing decision before this is invoked; a failure here
/// must never disturb an already-computed decision.
pub trait ReasoningProvider {
    /// Error type for reasoning operations
    type Error;

    /// Produce a short free-text explanation for the given prompt.
    fn explain(&self, prompt: &str) -> Result<String, Self::Error>;
}
