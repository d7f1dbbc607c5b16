//! Pure formatting functions for UI output.
//!
//! Styling goes through `console`, which drops colors when the stream is not
//! a terminal (CI logs, pipes).

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display why a docs build is skipped.
///
/// Skipping is expected for topic branches, so this goes to stdout as
/// information rather than to stderr as a warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    println!("{} {}", style("ℹ").cyan(), warning);
}

/// Describe a docs target as `version` or `version (alias)`.
pub fn format_target(version: &str, alias: &str) -> String {
    if alias.is_empty() {
        version.to_string()
    } else {
        format!("{} ({})", version, alias)
    }
}

/// Format one self-check line with its pass/fail marker.
pub fn format_check_line(name: &str, failure: Option<&str>) -> String {
    match failure {
        None => format!("{} {}", style("✓").green(), name),
        Some(reason) => format!("{} {}: {}", style("✗").red(), name, reason),
    }
}
