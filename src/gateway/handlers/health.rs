//! Root health check handler

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Service name echoed by the health check.
pub const SERVICE_NAME: &str = "mock-storage-api";

/// Health check response data
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    /// Always true while the process is up
    #[schema(example = true)]
    pub ok: bool,
    /// Service identifier for "Test Connection" checks
    #[schema(example = "mock-storage-api")]
    pub service: String,
}

/// Health check endpoint
///
/// Dashboards use this for their "Test Connection" button. There are no
/// dependencies to probe, so reaching the handler at all means healthy.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service up", body = ServiceInfo, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        ok: true,
        service: SERVICE_NAME.to_string(),
    })
}
