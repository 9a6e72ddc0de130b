//! Provides utilities related to the running program's environment variables.

/// Returns every environment variable of the current process whose name starts with a given
/// prefix, formatted as `KEY=value` with one variable per line.
pub fn dump_string(prefix: &str) -> String {
    std::env::vars()
        .filter(|(key, _)| key.starts_with(prefix))
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<String>>()
        .join("\n")
}
