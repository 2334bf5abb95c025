//! Mock Storage API
//!
//! A deterministic mock of a storage-system inventory API, for pointing
//! dashboards and integrations under test at something that behaves like
//! a real cluster without one existing. All data is synthesized from a
//! seeded generator: the same seed and page always return the same
//! records.
//!
//! # Modules
//!
//! - [`prng`] - Seeded FNV-1a/xorshift generator
//! - [`synth`] - Synthetic file-record generation
//! - [`inventory`] - Pagination, jittered totals, sampled byte estimates
//! - [`gateway`] - HTTP server (axum), handlers, OpenAPI docs
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing setup

pub mod config;
pub mod gateway;
pub mod inventory;
pub mod logging;
pub mod prng;
pub mod synth;

// Convenient re-exports at crate root
pub use config::{AppConfig, ConfigError, GatewayConfig, ServeMode, SynthConfig};
pub use inventory::{
    combined_seed, directory_count, estimate_physical_bytes, organic_totals, page_window,
};
pub use prng::{XorShift32, fnv1a32};
pub use synth::{EXTENSIONS, FileRecord, ROOT_DIRS, synthesize_file};
