//! User interface module - result printing.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Writing outcomes in the configured format

use anyhow::Result;

use crate::cli::ToolOutcome;
use crate::config::OutputFormat;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, render_bump, render_compare, render_error,
};

/// Render an outcome in the requested format.
///
/// JSON output is the outcome's serialized form, without warnings.
pub fn render_outcome(outcome: &ToolOutcome, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(outcome)?,
        OutputFormat::Text => match outcome {
            ToolOutcome::Bump(bump) => render_bump(bump),
            ToolOutcome::Compare(compare) => render_compare(compare),
        },
    })
}

/// Print warnings to stderr, then the outcome to stdout.
pub fn print_outcome(outcome: &ToolOutcome, format: OutputFormat) -> Result<()> {
    for warning in outcome.warnings() {
        display_boundary_warning(warning);
    }
    println!("{}", render_outcome(outcome, format)?);
    Ok(())
}
