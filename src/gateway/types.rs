//! Response DTOs shared by the dynamic inventory handlers.

use serde::Serialize;
use utoipa::ToSchema;

use crate::synth::FileRecord;

/// Aggregate inventory statistics.
///
/// Served standalone by `/stats` and embedded in every `/scan` response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    /// Total files in the simulated inventory (jittered count)
    #[schema(example = 10_384_u64)]
    pub file_count: u64,
    /// Approximate directory count (one per ~20 files plus a fixed base)
    #[schema(example = 639_u64)]
    pub directory_count: u64,
    /// Size of the synthetic owner pool
    #[schema(example = 120)]
    pub unique_users: u32,
    /// Sampled estimate of total bytes on disk
    #[schema(example = 612_938_471_424_u64)]
    pub physical_bytes: u64,
    /// Capacity usage percentage in [30, 80)
    #[schema(example = 57)]
    pub capacity_usage_percent: u8,
}

/// One page of synthesized inventory records.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    /// Jittered total record count for this seed
    #[schema(example = 10_384_u64)]
    pub total: u64,
    /// Requested page (1-based)
    #[schema(example = 1_u64)]
    pub page: u64,
    /// Page size after clamping
    #[schema(example = 1_000_u64)]
    pub page_size: u64,
    /// Whether further pages exist
    pub has_more: bool,
    /// Records for this page window
    pub files: Vec<FileRecord>,
    /// Aggregate statistics for the whole inventory
    pub stats: InventoryStats,
}
