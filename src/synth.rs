//! Synthetic file-record generation.
//!
//! `synthesize_file` is a pure function of `(seed, index)` plus the synth
//! config: repeated calls return the same path, size and owner, so a
//! dashboard can page through millions of records without the server
//! holding any of them. Only `mtime` moves, because it is anchored to the
//! current wall clock.

use chrono::{Duration, SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::prng::XorShift32;

/// Root directories a synthetic path can start with.
pub const ROOT_DIRS: [&str; 10] = [
    "projects",
    "finance",
    "legal",
    "media",
    "backups",
    "home",
    "departments/HR",
    "departments/Eng",
    "departments/IT",
    "departments/OPS",
];

/// File extensions the generator draws from.
pub const EXTENSIONS: [&str; 9] = [
    ".pdf", ".docx", ".xlsx", ".pptx", ".csv", ".txt", ".jpg", ".mp4", ".zip",
];

/// Smallest size the generator will emit.
pub const SIZE_FLOOR_BYTES: u64 = 512;
/// Size scale: the skewed draw tops out just below 400 MiB.
pub const SIZE_CAP_BYTES: u64 = 400 * 1024 * 1024;

// Exponent of the power-law size skew. Raising a uniform draw to this
// power concentrates mass near zero, so most files are small and a few
// are hundreds of megabytes.
const SIZE_SKEW_EXPONENT: f64 = 2.8;

// Modification times fall within the last five years.
const MTIME_WINDOW_DAYS: u32 = 365 * 5;

/// One synthesized inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FileRecord {
    /// Full path: `/ifs/<root>/dir<A>/dir<B>/file_<index><ext>`
    #[schema(example = "/ifs/finance/dir42/dir871/file_000317.xlsx")]
    pub path: String,
    /// Size in bytes, power-law skewed toward small files
    #[schema(example = 18_734_592_u64)]
    pub size: u64,
    /// Last modification time, ISO-8601 UTC with millisecond precision
    #[schema(example = "2024-03-17T08:15:42.000Z")]
    pub mtime: String,
    /// Synthetic owner drawn from a fixed pool
    #[schema(example = "user037")]
    pub owner: String,
}

/// Synthesize the record at `index` for the given seed.
///
/// Exactly seven draws happen, in a fixed order (root, subdir A, subdir B,
/// extension, size, days-ago, owner). Every draw advances the shared
/// generator state, so reordering them changes every subsequent field.
pub fn synthesize_file(seed: &str, index: u64, dir_span: u32, user_count: u32) -> FileRecord {
    let mut rng = XorShift32::from_seed(seed, index);

    let root = ROOT_DIRS[rng.next_index(ROOT_DIRS.len() as u32) as usize];
    let sub_a = rng.next_index(dir_span);
    let sub_b = rng.next_index(dir_span);
    let ext = EXTENSIONS[rng.next_index(EXTENSIONS.len() as u32) as usize];

    let skewed = rng.next_f64().powf(SIZE_SKEW_EXPONENT);
    let size = ((skewed * SIZE_CAP_BYTES as f64).floor() as u64).max(SIZE_FLOOR_BYTES);

    let days_ago = rng.next_index(MTIME_WINDOW_DAYS);
    let owner_idx = 1 + rng.next_index(user_count);

    let mtime = (Utc::now() - Duration::days(i64::from(days_ago)))
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    FileRecord {
        path: format!(
            "/ifs/{}/dir{}/dir{}/file_{:06}{}",
            root, sub_a, sub_b, index, ext
        ),
        size,
        mtime,
        owner: format!("user{:03}", owner_idx),
    }
}
