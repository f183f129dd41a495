//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Semantic Color Theme:
//!   - Success:       green  (completed actions)
//!   - Error:         red    (unknown services, bad input)
//!   - Info/Reference: cyan  (service names, headers)
//!   - Muted:         dimmed (counts, connectors)

use colored::Colorize;
use serde::Serialize;
use std::collections::HashSet;
use std::env;
use std::io::{self, Write};

/// Output mode for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text output (default).
    Text,
    /// JSON output for programmatic use.
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `DEPSCOPE_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let no_color = env::var("NO_COLOR").is_ok();
        let depscope_color = match env::var("DEPSCOPE_COLOR") {
            Ok(s) => !(s == "0" || s.eq_ignore_ascii_case("false")),
            Err(_) => true,
        };

        Self {
            use_colors: !no_color && depscope_color,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Print a value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{json}")
}

/// Render a set of service names as a sorted, comma-separated list.
///
/// Reachability results carry no ordering guarantee; sorting here is a
/// display choice so humans see stable output.
pub fn format_service_set(services: &HashSet<String>) -> String {
    let mut names: Vec<&str> = services.iter().map(String::as_str).collect();
    names.sort_unstable();
    format!("[{}]", names.join(", "))
}

/// Sort a set of service names into a vector, for JSON output.
pub fn sorted_services(services: &HashSet<String>) -> Vec<String> {
    let mut names: Vec<String> = services.iter().cloned().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_service_set_is_sorted() {
        let services = HashSet::from(["c".to_string(), "a".to_string(), "b".to_string()]);
        assert_eq!(format_service_set(&services), "[a, b, c]");
    }

    #[test]
    fn format_empty_set() {
        assert_eq!(format_service_set(&HashSet::new()), "[]");
    }

    #[test]
    fn colors_disabled_passes_text_through() {
        let config = OutputConfig { use_colors: false };
        assert_eq!(success("done", &config), "done");
        assert_eq!(error("bad", &config), "bad");
        assert_eq!(info("note", &config), "note");
    }
}
