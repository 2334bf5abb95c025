//! Paginated scan handler for the dynamic inventory API.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};

use super::super::state::AppState;
use super::super::types::{InventoryStats, ScanResponse};
use super::helpers::{clamp_query_int, query_str};
use crate::inventory::{
    COUNT_DEFAULT, COUNT_MAX, COUNT_MIN, PAGE_DEFAULT, PAGE_SIZE_DEFAULT, PAGE_SIZE_MAX,
    PAGE_SIZE_MIN, combined_seed, directory_count, estimate_physical_bytes, organic_totals,
    page_window,
};
use crate::synth::synthesize_file;

// page has no upper clamp, but the parser works in i64
const PAGE_MAX: u64 = i64::MAX as u64;

/// Paginated synthetic file listing
///
/// GET /scan?count=10000&page=1&pageSize=1000&systemId=demo&seed=storalogic
///
/// The combined seed `{seed}:{systemId}` pins every record, the jittered
/// total and the capacity figure, so identical queries return identical
/// pages.
#[utoipa::path(
    get,
    path = "/scan",
    params(
        ("count" = Option<u64>, Query, description = "Requested inventory size, clamped to [1000, 500000] (default: 10000)"),
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("pageSize" = Option<u64>, Query, description = "Records per page, clamped to [100, 10000] (default: 1000)"),
        ("systemId" = Option<String>, Query, description = "Simulated system identifier (default: demo)"),
        ("seed" = Option<String>, Query, description = "Generator seed (default: storalogic)")
    ),
    responses(
        (status = 200, description = "One page of synthesized records plus aggregate stats", body = ScanResponse, content_type = "application/json")
    ),
    tag = "Inventory"
)]
pub async fn scan_inventory(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<ScanResponse> {
    let synth = &state.synth;

    let count = clamp_query_int(&params, "count", COUNT_MIN, COUNT_MAX, COUNT_DEFAULT);
    let page = clamp_query_int(&params, "page", 1, PAGE_MAX, PAGE_DEFAULT);
    let page_size = clamp_query_int(
        &params,
        "pageSize",
        PAGE_SIZE_MIN,
        PAGE_SIZE_MAX,
        PAGE_SIZE_DEFAULT,
    );
    let seed = query_str(&params, "seed", &synth.default_seed);
    let system_id = query_str(&params, "systemId", &synth.default_system_id);
    let seed = combined_seed(&seed, &system_id);

    let (total, capacity_usage_percent) = organic_totals(&seed, count);
    let (start_idx, end_idx) = page_window(page, page_size, total);

    let files: Vec<_> = (start_idx..=end_idx)
        .map(|index| synthesize_file(&seed, index, synth.dir_span, synth.user_count))
        .collect();
    let has_more = end_idx < total;

    let physical_bytes =
        estimate_physical_bytes(&seed, total, synth.sample_cap, synth.dir_span, synth.user_count);

    tracing::debug!(
        seed = %seed,
        total,
        page,
        page_size,
        returned = files.len(),
        has_more,
        "scan page served"
    );

    Json(ScanResponse {
        total,
        page,
        page_size,
        has_more,
        files,
        stats: InventoryStats {
            file_count: total,
            directory_count: directory_count(total),
            unique_users: synth.user_count,
            physical_bytes,
            capacity_usage_percent,
        },
    })
}
