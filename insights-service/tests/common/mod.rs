//! Test helpers for insights-service integration tests.
//!
//! Each `TestApp` runs the real application on a random port, pointed at its
//! own wiremock server standing in for the Gemini API.

#![allow(dead_code)]

use insights_service::config::{GeminiSettings, InsightsConfig};
use insights_service::startup::Application;
use reqwest::Client;
use secrecy::Secret;
use serde_json::{json, Value};
use service_core::config::Config;
use std::time::Duration;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "test-model";
pub const GENERATE_PATH: &str = "/v1beta/models/test-model:generateContent";

/// Test application with running HTTP server and mock Gemini upstream.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub gemini: MockServer,
}

impl TestApp {
    /// Spawn with an API key configured.
    pub async fn spawn() -> Self {
        Self::spawn_with(Some(TEST_API_KEY), None).await
    }

    /// Spawn with no API key configured.
    pub async fn spawn_without_key() -> Self {
        Self::spawn_with(None, None).await
    }

    /// Spawn with an explicit upstream base URL instead of the mock server.
    pub async fn spawn_with_api_base(api_base: String) -> Self {
        Self::spawn_with(Some(TEST_API_KEY), Some(api_base)).await
    }

    async fn spawn_with(api_key: Option<&str>, api_base: Option<String>) -> Self {
        let gemini = MockServer::start().await;

        let config = InsightsConfig {
            common: Config {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            gemini: GeminiSettings {
                api_key: api_key.map(|key| Secret::new(key.to_string())),
                model: TEST_MODEL.to_string(),
                api_base: api_base.unwrap_or_else(|| format!("{}/v1beta", gemini.uri())),
                timeout: Duration::from_secs(5),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build application");
        let port = app.port();

        // The listener is already bound, so requests queue until serve starts.
        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        Self {
            address: format!("http://127.0.0.1:{}", port),
            client: Client::new(),
            gemini,
        }
    }

    pub async fn post_insights(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/generate-insights", self.address))
            .json(body)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn post_raw(&self, body: &'static str) -> reqwest::Response {
        self.client
            .post(format!("{}/generate-insights", self.address))
            .header("content-type", "application/json")
            .body(body)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn post_body(&self, body: String) -> reqwest::Response {
        self.client
            .post(format!("{}/generate-insights", self.address))
            .header("content-type", "application/json")
            .body(body)
            .timeout(Duration::from_secs(30))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .expect("Failed to send request")
    }
}

/// A `generateContent` body whose first candidate part carries `text`.
pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [
            {
                "content": {
                    "parts": [{"text": text}],
                    "role": "model"
                },
                "finishReason": "STOP",
                "index": 0
            }
        ],
        "usageMetadata": {
            "promptTokenCount": 312,
            "candidatesTokenCount": 190,
            "totalTokenCount": 502
        }
    })
}

pub fn sample_insights() -> Value {
    json!({
        "popular_crafts": [
            {
                "craft_name": "Blue Pottery",
                "description": "Turquoise-glazed quartz pottery strongly tied to Jaipur's identity."
            },
            {
                "craft_name": "Block Printing",
                "description": "Sanganeri and Bagru prints are in demand for festive textiles."
            },
            {
                "craft_name": "Lac Bangles",
                "description": "Traditional bridal and festive accessory."
            }
        ],
        "trending_products": [
            {
                "product_type": "Hand-painted diyas",
                "reasoning": "Diwali decor purchases peak in the weeks before the festival."
            },
            {
                "product_type": "Block-printed table linen",
                "reasoning": "Home refresh and gifting ahead of Dasara."
            }
        ],
        "marketing_angle": "Position pieces as heritage gifts and bundle them into festive hampers."
    })
}
