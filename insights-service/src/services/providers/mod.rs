//! Text generation provider abstraction.
//!
//! The insights use case depends on [`TextProvider`], so the Gemini client can
//! be swapped for the mock in tests.

pub mod gemini;
pub mod mock;

use crate::services::prompt::Prompt;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Transport failure or a 4xx/5xx status from the upstream API. The
    /// message carries the upstream body when one was received.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The upstream answered but the generated text could not be located.
    #[error("Failed to parse Gemini response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Build a [`ProviderError::RequestFailed`] from a failure description and
    /// the upstream body, if any.
    pub fn request_failed(description: impl Into<String>, body: Option<&str>) -> Self {
        let mut message = description.into();
        if let Some(body) = body {
            message.push_str(" | Response Body: ");
            message.push_str(body);
        }
        ProviderError::RequestFailed(message)
    }
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send the prompt once and return the text of the first candidate part.
    async fn generate(&self, prompt: &Prompt) -> Result<String, ProviderError>;
}
