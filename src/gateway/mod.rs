pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{AppConfig, ServeMode};
use state::AppState;

/// Build the router for the configured serve mode.
///
/// The dynamic and legacy variants both claim `GET /scan` (with different
/// response shapes), which is why they are separate modes instead of one
/// merged router.
pub fn build_router(config: &AppConfig) -> Router {
    let state = Arc::new(AppState::new(config.synth.clone()));

    let routes = match config.gateway.mode {
        ServeMode::Dynamic => Router::new()
            .route("/scan", get(handlers::scan_inventory))
            .route("/stats", get(handlers::inventory_stats)),
        ServeMode::Legacy => Router::new()
            .route("/api/files", get(handlers::legacy_files))
            .route("/scan", get(handlers::legacy_scan))
            .route("/metrics", get(handlers::legacy_metrics)),
    };

    routes
        .route("/", get(handlers::service_info))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP server and serve until shutdown.
pub async fn run_server(config: &AppConfig) -> anyhow::Result<()> {
    let app = build_router(config);

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {} (port already in use?)", addr))?;

    tracing::info!(mode = ?config.gateway.mode, "gateway listening on http://{}", addr);
    println!("🚀 Mock storage API listening on http://{}", addr);
    println!("📖 API docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .await
        .context("server terminated with an error")
}
