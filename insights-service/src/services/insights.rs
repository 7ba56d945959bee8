use crate::services::prompt::Prompt;
use crate::services::providers::{ProviderError, TextProvider};
use serde_json::Value;
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightsError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The generated text was not a JSON document.
    #[error("Failed to parse Gemini response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl From<InsightsError> for AppError {
    fn from(err: InsightsError) -> Self {
        match err {
            InsightsError::Provider(ProviderError::RequestFailed(_)) => {
                AppError::InternalError(anyhow::anyhow!(err.to_string()))
            }
            InsightsError::Provider(ProviderError::InvalidResponse(_))
            | InsightsError::InvalidJson(_) => AppError::BadGateway(err.to_string()),
        }
    }
}

/// Turns a region into model-generated market insights.
#[derive(Clone)]
pub struct InsightsService {
    provider: Arc<dyn TextProvider>,
}

impl InsightsService {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// One upstream call, no retries. The decoded JSON is returned as-is;
    /// its shape is not checked against the requested keys.
    pub async fn generate(&self, region: &str) -> Result<Value, InsightsError> {
        let prompt = Prompt::for_region(region);
        let text = self.provider.generate(&prompt).await?;
        let insights = serde_json::from_str(&text)?;
        Ok(insights)
    }
}
