use crate::domain::error::DomainError;
use async_trait::async_trait;

/// A single-turn chat completion: one system message, one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
        }
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Send the request and return the generated text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;
}
