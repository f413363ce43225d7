use std::env;
use std::str::FromStr;

/// Parses an optional raw value, falling back to `default` when it is
/// missing, blank or malformed.
pub fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

pub fn var_or<T: FromStr>(name: &str, default: T) -> T {
    parse_or(env::var(name).ok(), default)
}

/// A set, non-blank environment variable.
pub fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
