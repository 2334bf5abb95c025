//! Gateway request handlers.
//!
//! - [`health`] - root health check
//! - [`scan`] / [`stats`] - dynamic seeded inventory API
//! - [`legacy`] - fixed two-record fixture API
//! - [`helpers`] - shared query parsing

pub mod health;
pub mod helpers;
pub mod legacy;
pub mod scan;
pub mod stats;

pub use health::{SERVICE_NAME, ServiceInfo, service_info};
pub use legacy::{
    LegacyFileRecord, LegacyListing, LegacyMetrics, LegacyScanFile, LegacyScanResponse,
    legacy_files, legacy_metrics, legacy_scan,
};
pub use scan::scan_inventory;
pub use stats::inventory_stats;
