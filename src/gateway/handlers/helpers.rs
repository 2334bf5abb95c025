//! Shared query-parameter parsing for the inventory handlers.

use std::collections::HashMap;

/// Parse an integer query parameter with fallback-then-clamp semantics.
///
/// Non-numeric (or absent) input falls back to the default; numeric input
/// is clamped into `[min, max]`. Negative input therefore clamps to `min`
/// rather than falling back. `max` must fit in an `i64`.
pub fn clamp_query_int(
    params: &HashMap<String, String>,
    key: &str,
    min: u64,
    max: u64,
    fallback: u64,
) -> u64 {
    match params.get(key).and_then(|s| s.trim().parse::<i64>().ok()) {
        Some(n) if n < min as i64 => min,
        Some(n) if n > max as i64 => max,
        Some(n) => n as u64,
        None => fallback,
    }
}

/// Fetch a string query parameter, treating absent and empty as unset.
pub fn query_str(params: &HashMap<String, String>, key: &str, fallback: &str) -> String {
    match params.get(key) {
        Some(v) if !v.is_empty() => v.clone(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_clamp_numeric_in_range() {
        let p = params(&[("count", "25000")]);
        assert_eq!(clamp_query_int(&p, "count", 1_000, 500_000, 10_000), 25_000);
    }

    #[test]
    fn test_clamp_below_min_and_above_max() {
        let p = params(&[("count", "50")]);
        assert_eq!(clamp_query_int(&p, "count", 1_000, 500_000, 10_000), 1_000);
        let p = params(&[("count", "999999")]);
        assert_eq!(clamp_query_int(&p, "count", 1_000, 500_000, 10_000), 500_000);
        let p = params(&[("pageSize", "50")]);
        assert_eq!(clamp_query_int(&p, "pageSize", 100, 10_000, 1_000), 100);
    }

    #[test]
    fn test_non_numeric_falls_back() {
        let p = params(&[("count", "lots")]);
        assert_eq!(clamp_query_int(&p, "count", 1_000, 500_000, 10_000), 10_000);
        let p = params(&[("count", "")]);
        assert_eq!(clamp_query_int(&p, "count", 1_000, 500_000, 10_000), 10_000);
    }

    #[test]
    fn test_absent_falls_back() {
        let p = params(&[]);
        assert_eq!(clamp_query_int(&p, "page", 1, i64::MAX as u64, 1), 1);
    }

    #[test]
    fn test_negative_clamps_to_min() {
        let p = params(&[("page", "-3")]);
        assert_eq!(clamp_query_int(&p, "page", 1, i64::MAX as u64, 1), 1);
    }

    #[test]
    fn test_query_str_empty_is_unset() {
        let p = params(&[("seed", "")]);
        assert_eq!(query_str(&p, "seed", "storalogic"), "storalogic");
        let p = params(&[("seed", "alt")]);
        assert_eq!(query_str(&p, "seed", "storalogic"), "alt");
        let p = params(&[]);
        assert_eq!(query_str(&p, "systemId", "demo"), "demo");
    }
}
