//! Environment Configuration Helpers
//!
//! Small parsers shared by the binaries. Each takes a lookup closure so
//! callers can read from `std::env` or from a fixed map in tests.

use std::str::FromStr;

/// Read `key` and parse it, falling back to `default` when unset or invalid
pub fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, default = ?default, "Invalid value, using default");
                default
            }
        },
        _ => default,
    }
}

/// Read `key` as a boolean flag (`1`, `true`, `yes`, `on`)
pub fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> bool {
    lookup(key)
        .map(|raw| {
            matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
        .unwrap_or(false)
}

/// Read `key` as a comma-separated list, dropping empty entries
pub fn list(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Vec<String> {
    lookup(key)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Read `key` as a non-empty string
pub fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}
