use crate::startup::AppState;
use askama::Template;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

#[derive(Template)]
#[template(path = "market.html")]
pub struct MarketTemplate {}

pub async fn index() -> impl IntoResponse {
    MarketTemplate {}
}

/// Liveness probe. Reports whether insight requests can reach Gemini at all.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "insights-service",
        "version": env!("CARGO_PKG_VERSION"),
        "gemini_configured": state.config.gemini.is_configured(),
    }))
}

pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Not found"))
}
