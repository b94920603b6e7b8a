//! Provider adapter trait and unified enum

use crate::llm::classifier::AdapterError;
use async_trait::async_trait;

/// Uniform "prompt in, text out" contract over every vendor.
///
/// Implementations must not retry or fall back on their own; every failure is
/// returned as an [`AdapterError`] for the failover controller to classify.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Generate a reply for a fully formatted prompt
    async fn generate(&self, prompt: &str) -> Result<String, AdapterError>;
}

/// Unified provider enum that wraps all provider implementations
pub enum ProviderInstance {
    Groq(super::GroqProvider),
    Gemini(super::GeminiProvider),
}

#[async_trait]
impl ProviderAdapter for ProviderInstance {
    async fn generate(&self, prompt: &str) -> Result<String, AdapterError> {
        match self {
            Self::Groq(p) => p.generate(prompt).await,
            Self::Gemini(p) => p.generate(prompt).await,
        }
    }
}
