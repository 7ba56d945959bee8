//! Mock provider for testing.

use super::{ProviderError, TextProvider};
use crate::services::prompt::Prompt;
use async_trait::async_trait;
use std::sync::Mutex;

/// Returns a fixed reply for every call and records the prompts it saw.
pub struct MockTextProvider {
    reply: Result<String, ProviderError>,
    prompts: Mutex<Vec<Prompt>>,
}

impl MockTextProvider {
    /// Always answer with `text` as the generated content.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            reply: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &Prompt) -> Result<String, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.clone());
        }
        self.reply.clone()
    }
}
