//! End-to-end handler tests for the inventory API.
//!
//! Handlers are plain async functions over axum extractors, so they are
//! driven directly here without binding a socket.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};

use mock_storage_api::config::SynthConfig;
use mock_storage_api::gateway::handlers::{
    inventory_stats, legacy_files, legacy_metrics, legacy_scan, scan_inventory, service_info,
};
use mock_storage_api::gateway::state::AppState;
use mock_storage_api::organic_totals;

fn app_state() -> State<Arc<AppState>> {
    State(Arc::new(AppState::new(SynthConfig::default())))
}

fn query(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[tokio::test]
async fn test_root_health_check() {
    let Json(info) = service_info().await;
    assert!(info.ok);
    assert_eq!(info.service, "mock-storage-api");
}

#[tokio::test]
async fn test_scan_defaults() {
    let Json(resp) = scan_inventory(app_state(), query(&[])).await;

    // count defaults to 10000, jittered by up to ±10%
    assert!((9_000..11_000).contains(&resp.total));
    assert_eq!(resp.page, 1);
    assert_eq!(resp.page_size, 1_000);
    assert_eq!(resp.files.len(), 1_000);
    assert!(resp.has_more);

    assert_eq!(resp.stats.file_count, resp.total);
    assert_eq!(resp.stats.directory_count, resp.total / 20 + 120);
    assert_eq!(resp.stats.unique_users, 120);
    assert!(resp.stats.physical_bytes > 0);
    assert!((30..80).contains(&resp.stats.capacity_usage_percent));
}

#[tokio::test]
async fn test_scan_clamps_parameters() {
    // count=50 clamps to 1000; pageSize=50 clamps to 100
    let Json(resp) = scan_inventory(app_state(), query(&[("count", "50"), ("pageSize", "50")])).await;
    assert!((900..1_100).contains(&resp.total));
    assert_eq!(resp.page_size, 100);
    assert_eq!(resp.files.len(), 100);

    // count=999999 clamps to 500000
    let Json(resp) = scan_inventory(app_state(), query(&[("count", "999999")])).await;
    assert!((450_000..550_000).contains(&resp.total));
}

#[tokio::test]
async fn test_scan_non_numeric_parameters_fall_back() {
    let Json(resp) = scan_inventory(
        app_state(),
        query(&[("count", "banana"), ("page", "x"), ("pageSize", "")]),
    )
    .await;
    assert!((9_000..11_000).contains(&resp.total));
    assert_eq!(resp.page, 1);
    assert_eq!(resp.page_size, 1_000);
}

#[tokio::test]
async fn test_scan_first_records_are_deterministic_for_seed() {
    // Reference records for combined seed "x:y", indices 1 and 2. The
    // jitter on total never touches the per-index records.
    let Json(resp) = scan_inventory(
        app_state(),
        query(&[("count", "1000"), ("page", "1"), ("seed", "x"), ("systemId", "y")]),
    )
    .await;

    assert_eq!(
        resp.files[0].path,
        "/ifs/departments/IT/dir899/dir480/file_000001.txt"
    );
    assert_eq!(resp.files[0].owner, "user052");
    assert_eq!(
        resp.files[1].path,
        "/ifs/departments/OPS/dir998/dir142/file_000002.xlsx"
    );
    assert_eq!(resp.files[1].owner, "user075");
}

#[tokio::test]
async fn test_scan_repeated_identical_requests_are_identical() {
    let params = [("count", "5000"), ("seed", "repeat"), ("systemId", "sys1")];
    let Json(a) = scan_inventory(app_state(), query(&params)).await;
    let Json(b) = scan_inventory(app_state(), query(&params)).await;

    assert_eq!(a.total, b.total);
    assert_eq!(a.stats.capacity_usage_percent, b.stats.capacity_usage_percent);
    assert_eq!(a.stats.physical_bytes, b.stats.physical_bytes);
    assert_eq!(a.files.len(), b.files.len());
    for (x, y) in a.files.iter().zip(&b.files) {
        assert_eq!(x.path, y.path);
        assert_eq!(x.size, y.size);
        assert_eq!(x.owner, y.owner);
    }
}

#[tokio::test]
async fn test_scan_pagination_windows() {
    // organic_totals is seeded, so the total is known ahead of the request
    let (total, _) = organic_totals("pages:demo", 5_000);
    let page_size = 1_000u64;
    let full_pages = total / page_size;
    let remainder = total % page_size;

    // a middle page is full and has more
    let Json(mid) = scan_inventory(
        app_state(),
        query(&[("count", "5000"), ("page", "2"), ("seed", "pages")]),
    )
    .await;
    assert_eq!(mid.total, total);
    assert_eq!(mid.files.len(), page_size as usize);
    assert!(mid.has_more);

    // the final page is exactly the remainder (or full) and has no more
    let last_page = if remainder == 0 { full_pages } else { full_pages + 1 };
    let expected_len = if remainder == 0 { page_size } else { remainder };
    let Json(last) = scan_inventory(
        app_state(),
        query(&[
            ("count", "5000"),
            ("page", &last_page.to_string()),
            ("seed", "pages"),
        ]),
    )
    .await;
    assert_eq!(last.files.len(), expected_len as usize);
    assert!(!last.has_more);

    // one page past the end is empty, still no more
    let Json(past) = scan_inventory(
        app_state(),
        query(&[
            ("count", "5000"),
            ("page", &(last_page + 1).to_string()),
            ("seed", "pages"),
        ]),
    )
    .await;
    assert!(past.files.is_empty());
    assert!(!past.has_more);
}

#[tokio::test]
async fn test_scan_page_number_echoes_request() {
    let Json(resp) = scan_inventory(app_state(), query(&[("page", "3")])).await;
    assert_eq!(resp.page, 3);
}

#[tokio::test]
async fn test_stats_matches_scan_stats_block() {
    let params = [("count", "20000"), ("seed", "cross"), ("systemId", "sysA")];
    let Json(scan) = scan_inventory(app_state(), query(&params)).await;
    let Json(stats) = inventory_stats(app_state(), query(&params)).await;

    assert_eq!(stats.file_count, scan.stats.file_count);
    assert_eq!(stats.directory_count, scan.stats.directory_count);
    assert_eq!(stats.unique_users, scan.stats.unique_users);
    assert_eq!(stats.physical_bytes, scan.stats.physical_bytes);
    assert_eq!(
        stats.capacity_usage_percent,
        scan.stats.capacity_usage_percent
    );
}

#[tokio::test]
async fn test_stats_defaults() {
    let Json(stats) = inventory_stats(app_state(), query(&[])).await;
    assert!((9_000..11_000).contains(&stats.file_count));
    assert_eq!(stats.unique_users, 120);
    assert!(stats.physical_bytes > 0);
    assert!((30..80).contains(&stats.capacity_usage_percent));
}

#[tokio::test]
async fn test_different_system_id_changes_records() {
    let Json(a) = scan_inventory(app_state(), query(&[("systemId", "one")])).await;
    let Json(b) = scan_inventory(app_state(), query(&[("systemId", "two")])).await;
    assert_ne!(a.files[0].path, b.files[0].path);
}

#[tokio::test]
async fn test_legacy_files_contract() {
    let Json(listing) = legacy_files().await;
    assert_eq!(listing.files.len(), 2);
    assert_eq!(listing.total_count, 2);
    assert_eq!(listing.total_size, 1_572_864);
    for record in &listing.files {
        assert!(record.path.starts_with("/ifs/"));
        assert!(record.last_modified.ends_with('Z'));
        assert!(record.last_accessed.ends_with('Z'));
    }
}

#[tokio::test]
async fn test_legacy_scan_and_metrics() {
    let Json(scan) = legacy_scan().await;
    assert_eq!(scan.files.len(), 2);
    assert!(scan.files.iter().all(|f| f.size_bytes > 0));

    let Json(metrics) = legacy_metrics().await;
    assert!(metrics.capacity_usage_percent > 0.0);
    assert!(metrics.directory_count > 0);
    assert!(metrics.file_count > 0);
    assert!(metrics.unique_user_count > 0);
}
