//! Inventory-level math for the dynamic API: jittered totals, page
//! windows and the sampled byte estimate.
//!
//! Everything here is a pure function of the combined seed and the request
//! parameters. The jitter and capacity draws use record index 0, which
//! real records never occupy (pages start at index 1), so the "organic"
//! totals are just as reproducible as the records themselves.

use crate::prng::XorShift32;
use crate::synth::synthesize_file;

/// Clamp range and default for the `count` parameter.
pub const COUNT_MIN: u64 = 1_000;
pub const COUNT_MAX: u64 = 500_000;
pub const COUNT_DEFAULT: u64 = 10_000;

/// Clamp range and default for the `pageSize` parameter.
pub const PAGE_SIZE_MIN: u64 = 100;
pub const PAGE_SIZE_MAX: u64 = 10_000;
pub const PAGE_SIZE_DEFAULT: u64 = 1_000;

pub const PAGE_DEFAULT: u64 = 1;

// Record indices start at 1; index 0 is reserved for the per-seed
// jitter/capacity draws.
const ORGANIC_DRAW_INDEX: u64 = 0;

/// Build the combined seed from the request seed and system ID.
pub fn combined_seed(seed: &str, system_id: &str) -> String {
    format!("{}:{}", seed, system_id)
}

/// Jitter the requested count by up to ±10% and draw a capacity figure.
///
/// Both values come from one generator keyed on the combined seed, drawn
/// in fixed order (total first, capacity second), so `/scan` and `/stats`
/// report the same numbers for the same seed.
///
/// Returns `(total, capacity_usage_percent)` with the percent in [30, 80).
pub fn organic_totals(seed: &str, requested: u64) -> (u64, u8) {
    let mut rng = XorShift32::from_seed(seed, ORGANIC_DRAW_INDEX);

    let jitter = requested / 10;
    let offset = (rng.next_f64() * (2 * jitter) as f64) as u64;
    let total = requested - jitter + offset;

    let capacity_usage_percent = 30 + rng.next_index(50) as u8;

    (total, capacity_usage_percent)
}

/// Inclusive index window `[start, end]` for a page.
///
/// `end < start` when the page lies entirely past the last record; an
/// inclusive range over such a window is empty.
pub fn page_window(page: u64, page_size: u64, total: u64) -> (u64, u64) {
    let start = (page - 1).saturating_mul(page_size).saturating_add(1);
    let end = start.saturating_add(page_size - 1).min(total);
    (start, end)
}

/// Synthetic directory count: one directory per ~20 files plus a fixed
/// base. An approximation, deliberately not derived from generated paths.
pub fn directory_count(total: u64) -> u64 {
    total / 20 + 120
}

/// Estimate total physical bytes by sampling.
///
/// Synthesizes every `step`-th record from 1 to `total`, averages the
/// sampled sizes and scales back up. `step` is chosen so at most
/// ~`sample_cap` records are synthesized for large totals, keeping the
/// cost bounded no matter how big the inventory claims to be.
pub fn estimate_physical_bytes(
    seed: &str,
    total: u64,
    sample_cap: u64,
    dir_span: u32,
    user_count: u32,
) -> u64 {
    if total == 0 {
        return 0;
    }

    let sample_count = total.min(sample_cap).max(1);
    let step = (total / sample_count).max(1);

    let mut sampled_bytes: u128 = 0;
    let mut sampled: u64 = 0;
    let mut index = 1;
    while index <= total {
        sampled_bytes += u128::from(synthesize_file(seed, index, dir_span, user_count).size);
        sampled += 1;
        index += step;
    }

    let avg_bytes = sampled_bytes as f64 / sampled as f64;
    (avg_bytes * total as f64).floor() as u64
}
