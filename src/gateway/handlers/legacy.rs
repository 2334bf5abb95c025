//! Legacy static-fixture handlers.
//!
//! Older dashboard builds were pointed at a fixed two-record API with
//! snake_case fields. The records never change: these routes are literal
//! data contracts, no generation involved.

use axum::Json;
use once_cell::sync::Lazy;
use serde::Serialize;
use utoipa::ToSchema;

/// Fixture record for the legacy `/api/files` listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LegacyFileRecord {
    #[schema(example = "/ifs/projects/apollo/launch_deck.pptx")]
    pub path: String,
    /// Size in bytes
    #[schema(example = 1_048_576_u64)]
    pub size: u64,
    pub owner: String,
    /// ISO-8601 UTC timestamp
    pub last_modified: String,
    /// ISO-8601 UTC timestamp
    pub last_accessed: String,
}

/// Legacy `/api/files` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct LegacyListing {
    pub files: Vec<LegacyFileRecord>,
    #[schema(example = 2)]
    pub total_count: u64,
    /// Sum of the fixture sizes
    #[schema(example = 1_572_864_u64)]
    pub total_size: u64,
}

/// Fixture record for the legacy `/scan` response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LegacyScanFile {
    pub path: String,
    #[schema(example = 524_288_u64)]
    pub size_bytes: u64,
}

/// Legacy `/scan` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct LegacyScanResponse {
    pub files: Vec<LegacyScanFile>,
}

/// Legacy `/metrics` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct LegacyMetrics {
    #[schema(example = 67.4)]
    pub capacity_usage_percent: f64,
    #[schema(example = 842_u64)]
    pub directory_count: u64,
    #[schema(example = 15_730_u64)]
    pub file_count: u64,
    #[schema(example = 48)]
    pub unique_user_count: u32,
}

static LEGACY_FILES: Lazy<Vec<LegacyFileRecord>> = Lazy::new(|| {
    vec![
        LegacyFileRecord {
            path: "/ifs/projects/apollo/launch_deck.pptx".to_string(),
            size: 1_048_576,
            owner: "user014".to_string(),
            last_modified: "2024-11-02T09:41:17.000Z".to_string(),
            last_accessed: "2025-06-18T14:03:52.000Z".to_string(),
        },
        LegacyFileRecord {
            path: "/ifs/finance/reports/fy2024_summary.xlsx".to_string(),
            size: 524_288,
            owner: "user027".to_string(),
            last_modified: "2025-01-15T16:22:05.000Z".to_string(),
            last_accessed: "2025-07-03T08:47:30.000Z".to_string(),
        },
    ]
});

/// Fixed file listing
///
/// GET /api/files
#[utoipa::path(
    get,
    path = "/api/files",
    responses(
        (status = 200, description = "Fixed two-record listing", body = LegacyListing, content_type = "application/json")
    ),
    tag = "Legacy Fixtures"
)]
pub async fn legacy_files() -> Json<LegacyListing> {
    let files = LEGACY_FILES.clone();
    let total_size = files.iter().map(|f| f.size).sum();
    Json(LegacyListing {
        total_count: files.len() as u64,
        total_size,
        files,
    })
}

/// Fixed scan result
///
/// GET /scan (legacy mode only; the dynamic variant owns `/scan` otherwise)
#[utoipa::path(
    get,
    path = "/scan",
    responses(
        (status = 200, description = "Fixed scan result", body = LegacyScanResponse, content_type = "application/json")
    ),
    tag = "Legacy Fixtures"
)]
pub async fn legacy_scan() -> Json<LegacyScanResponse> {
    Json(LegacyScanResponse {
        files: LEGACY_FILES
            .iter()
            .map(|f| LegacyScanFile {
                path: f.path.clone(),
                size_bytes: f.size,
            })
            .collect(),
    })
}

/// Fixed capacity metrics
///
/// GET /metrics
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Fixed capacity metrics", body = LegacyMetrics, content_type = "application/json")
    ),
    tag = "Legacy Fixtures"
)]
pub async fn legacy_metrics() -> Json<LegacyMetrics> {
    Json(LegacyMetrics {
        capacity_usage_percent: 67.4,
        directory_count: 842,
        file_count: 15_730,
        unique_user_count: 48,
    })
}
