//! Color theme for consistent output

use colored::*;

/// Color for success messages
pub fn success(msg: &str) -> ColoredString {
    msg.green()
}

/// Color for error messages
pub fn error(msg: &str) -> ColoredString {
    msg.red()
}

/// Color for skipped or informational messages
pub fn info(msg: &str) -> ColoredString {
    msg.cyan()
}

/// Category list as shown next to a processed file
pub fn categories(labels: &[String]) -> ColoredString {
    if labels.is_empty() {
        "(uncategorized)".dimmed()
    } else {
        labels.join("/").blue()
    }
}

/// Symbol for success
pub fn success_symbol() -> &'static str {
    "✓"
}

/// Symbol for error
pub fn error_symbol() -> &'static str {
    "✗"
}

/// Symbol for info
pub fn info_symbol() -> &'static str {
    "→"
}
