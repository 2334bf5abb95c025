//! Summary statistics handler for the dynamic inventory API.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};

use super::super::state::AppState;
use super::super::types::InventoryStats;
use super::helpers::{clamp_query_int, query_str};
use crate::inventory::{
    COUNT_DEFAULT, COUNT_MAX, COUNT_MIN, combined_seed, directory_count, estimate_physical_bytes,
    organic_totals,
};

/// Aggregate inventory statistics
///
/// GET /stats?count=10000&systemId=demo&seed=storalogic
///
/// Same parameter handling, jitter and sampling estimate as `/scan`, but
/// returns only the stats block. For a given seed the numbers here match
/// the `stats` block `/scan` embeds.
#[utoipa::path(
    get,
    path = "/stats",
    params(
        ("count" = Option<u64>, Query, description = "Requested inventory size, clamped to [1000, 500000] (default: 10000)"),
        ("systemId" = Option<String>, Query, description = "Simulated system identifier (default: demo)"),
        ("seed" = Option<String>, Query, description = "Generator seed (default: storalogic)")
    ),
    responses(
        (status = 200, description = "Aggregate statistics for the simulated inventory", body = InventoryStats, content_type = "application/json")
    ),
    tag = "Inventory"
)]
pub async fn inventory_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<InventoryStats> {
    let synth = &state.synth;

    let count = clamp_query_int(&params, "count", COUNT_MIN, COUNT_MAX, COUNT_DEFAULT);
    let seed = query_str(&params, "seed", &synth.default_seed);
    let system_id = query_str(&params, "systemId", &synth.default_system_id);
    let seed = combined_seed(&seed, &system_id);

    let (total, capacity_usage_percent) = organic_totals(&seed, count);
    let physical_bytes =
        estimate_physical_bytes(&seed, total, synth.sample_cap, synth.dir_span, synth.user_count);

    tracing::debug!(seed = %seed, total, physical_bytes, "stats served");

    Json(InventoryStats {
        file_count: total,
        directory_count: directory_count(total),
        unique_users: synth.user_count,
        physical_bytes,
        capacity_usage_percent,
    })
}
