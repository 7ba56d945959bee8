use crate::models::{InsightRequest, REGION_REQUIRED};
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use serde_json::Value;
use service_core::error::AppError;

pub const MISSING_API_KEY: &str = "GEMINI_API_KEY environment variable not found or is not set.";

/// `POST /generate-insights`.
///
/// The body is taken as raw bytes so the API key check runs before any
/// attempt to decode it. A body that cannot be buffered (over the size limit,
/// or a broken stream) is treated like any other unusable body.
#[tracing::instrument(
    name = "generate_insights",
    skip_all,
    fields(region = tracing::field::Empty)
)]
pub async fn generate_insights(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, AppError> {
    let Some(insights) = state.insights.as_ref() else {
        tracing::error!("Gemini API key is not configured");
        return Err(AppError::ConfigError(anyhow::anyhow!(MISSING_API_KEY)));
    };

    let region = body
        .inspect_err(|rejection| {
            tracing::warn!(error = %rejection, "failed to read insights request body");
        })
        .ok()
        .and_then(|body| InsightRequest::region_from_slice(&body))
        .ok_or_else(|| {
            tracing::warn!("rejected insights request without region");
            AppError::BadRequest(anyhow::anyhow!(REGION_REQUIRED))
        })?;
    tracing::Span::current().record("region", region.as_str());

    let result = insights.generate(&region).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to generate insights");
        AppError::from(e)
    })?;

    tracing::info!("insights generated");
    Ok(Json(result))
}
