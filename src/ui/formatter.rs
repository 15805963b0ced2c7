//! Pure formatting functions for UI output.
//!
//! The `render_*` functions build strings and are unit tested; the
//! `display_*` functions only print.

use crate::boundary::BoundaryWarning;
use crate::cli::{BumpOutcome, CompareOutcome};

/// Format an error message with a red `ERROR:` label.
pub fn render_error(message: &str) -> String {
    format!("\x1b[31mERROR:\x1b[0m {}", message)
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", render_error(message));
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Render a bump outcome as a single line.
///
/// # Examples
/// ```ignore
/// "v1.2.5 -> 1.2.6 (dry run)"
/// "1.2.5 -> 1.3.0"
/// ```
pub fn render_bump(outcome: &BumpOutcome) -> String {
    let suffix = if outcome.dry_run { " (dry run)" } else { "" };
    format!("{} -> {}{}", outcome.old, outcome.new, suffix)
}

/// Render a compare outcome as a single line, e.g. `1.0.0-alpha lt 1.0.0: true`.
pub fn render_compare(outcome: &CompareOutcome) -> String {
    format!(
        "{} {} {}: {}",
        outcome.left, outcome.op, outcome.right, outcome.result
    )
}
