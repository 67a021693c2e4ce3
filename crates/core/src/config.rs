//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable, falling back to `default`.
///
/// An unset variable is the expected case and falls back silently. A set
/// but unparseable value logs a warning so misconfiguration is visible
/// instead of silently reverting to the default.
pub fn env_parse_or<T: std::str::FromStr + std::fmt::Display>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(raw) => match raw.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %raw,
                    default = %default,
                    "unparseable env var value, falling back to default"
                );
                default
            },
        },
        Err(_) => default,
    }
}
