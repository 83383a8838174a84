//! Groq Provider Implementation
//!
//! Talks to Groq's OpenAI-compatible chat-completions API. One synchronous
//! round-trip per explanation; there is no retry policy — a failed call is
//! surfaced to the caller, whose routing decision is already final.

use crate::{ReasoningConfig, ReasoningError};
use fnol_domain::traits::ReasoningProvider as ReasoningProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Groq API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";

/// Default timeout for reasoning requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const SYSTEM_PROMPT: &str = "You are an insurance claim assistant. Given extracted \
fields from a FNOL form, produce a concise explanation (1-2 sentences) for the \
routing decision and note any missing or suspicious fields.";

/// Reasoning provider backed by Groq's chat-completions API.
pub struct GroqProvider {
    endpoint: String,
    config: ReasoningConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl GroqProvider {
    /// Create a provider from a validated configuration.
    pub fn new(config: ReasoningConfig) -> Result<Self, ReasoningError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, config)
    }

    /// Create a provider against a custom endpoint (testing, proxies).
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        config: ReasoningConfig,
    ) -> Result<Self, ReasoningError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ReasoningError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            config,
            client,
        })
    }

    /// Generate a short explanation for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, rejects the
    /// request, or returns an empty/unparsable completion.
    pub async fn explain(&self, prompt: &str) -> Result<String, ReasoningError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ReasoningError::Communication(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ReasoningError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ReasoningError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(ReasoningError::InvalidResponse(
                "Empty completion".to_string(),
            ));
        }
        Ok(content)
    }
}

impl ReasoningProviderTrait for GroqProvider {
    type Error = ReasoningError;

    fn explain(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for callers outside an async context
        tokio::runtime::Runtime::new()
            .map_err(|e| ReasoningError::Other(format!("Failed to start runtime: {}", e)))?
            .block_on(async { self.explain(prompt).await })
    }
}
