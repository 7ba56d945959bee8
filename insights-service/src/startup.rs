//! Application startup and lifecycle management.

use crate::config::InsightsConfig;
use crate::handlers::{generate_insights, health_check, index, not_found};
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::InsightsService;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: InsightsConfig,
    /// `None` when no Gemini API key is configured; every insights request
    /// then fails with a configuration error.
    pub insights: Option<InsightsService>,
}

impl AppState {
    /// Wire the Gemini provider from configuration.
    pub fn from_config(config: InsightsConfig) -> Result<Self, AppError> {
        let insights = match config.gemini.api_key.clone() {
            Some(api_key) => {
                let provider = GeminiTextProvider::new(GeminiConfig {
                    api_key,
                    model: config.gemini.model.clone(),
                    api_base: config.gemini.api_base.clone(),
                    timeout: config.gemini.timeout,
                })
                .map_err(|e| {
                    tracing::error!("Failed to build Gemini HTTP client: {}", e);
                    AppError::ConfigError(anyhow::Error::new(e))
                })?;

                tracing::info!(
                    model = %config.gemini.model,
                    timeout_secs = config.gemini.timeout.as_secs(),
                    "Initialized Gemini text provider"
                );
                Some(InsightsService::new(Arc::new(provider)))
            }
            None => {
                tracing::warn!("GEMINI_API_KEY is not set; insight requests will fail");
                None
            }
        };

        Ok(Self { config, insights })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/generate-insights", post(generate_insights))
        .fallback(not_found)
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Outermost so the span above already sees the request id.
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: InsightsConfig) -> Result<Self, AppError> {
        let address = config.common.address();
        let state = AppState::from_config(config)?;

        // Port 0 = random port for testing
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Insights service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
