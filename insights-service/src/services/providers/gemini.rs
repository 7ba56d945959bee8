//! Gemini AI provider implementation.
//!
//! Implements a single non-streaming `generateContent` call with a JSON
//! response MIME type. The API key travels as the `key` query parameter.

use super::{ProviderError, TextProvider};
use crate::services::prompt::{Prompt, RESPONSE_MIME_TYPE};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    /// Build the API URL for the given model method. The key is added as a
    /// query parameter at send time.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base, self.config.model, method
        )
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &Prompt) -> Result<String, ProviderError> {
        let request = GenerateContentRequest::from_prompt(prompt);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.user_query.len(),
            "Sending request to Gemini API"
        );

        // Errors are stripped of their URL: it contains the API key.
        let response = self
            .client
            .post(self.api_url("generateContent"))
            .query(&[("key", self.config.api_key.expose_secret())])
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::request_failed(e.without_url().to_string(), None))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let error_text = response.text().await.ok();
            tracing::warn!(
                status = %status,
                "Gemini API returned an error status"
            );
            return Err(ProviderError::request_failed(
                format!("Gemini API error {}", status),
                error_text.as_deref(),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::request_failed(e.without_url().to_string(), None))?;

        extract_text(&body)
    }
}

/// Walk `candidates[0].content.parts[0].text` in a `generateContent` body.
pub(crate) fn extract_text(body: &str) -> Result<String, ProviderError> {
    let api_response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

    let candidate = api_response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::InvalidResponse("response has no candidates".to_string()))?;

    if let Some(reason) = candidate.finish_reason.as_deref() {
        tracing::debug!(finish_reason = %reason, "Gemini candidate finished");
    }

    let content = candidate.content.ok_or_else(|| {
        ProviderError::InvalidResponse("first candidate has no content".to_string())
    })?;

    let part = content
        .parts
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| {
            ProviderError::InvalidResponse("candidate content has no parts".to_string())
        })?;

    part.text
        .ok_or_else(|| ProviderError::InvalidResponse("first part has no text".to_string()))
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_prompt(prompt: &'a Prompt) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: &prompt.user_query,
                }],
            }],
            system_instruction: Content {
                parts: vec![TextPart {
                    text: &prompt.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}
