//! User interface module - run reports built on the formatter.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Reports for workflow outcomes and self-check runs

use anyhow::Result;

use crate::cli::WorkflowOutcome;
use crate::domain::ResolutionReport;
use crate::selftest::CheckOutcome;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_status, display_success, format_check_line,
    format_target,
};

/// Report the result of a publish workflow.
///
/// In a dry run the command goes to stdout on a line of its own so it can be
/// captured by scripts.
pub fn display_outcome(outcome: &WorkflowOutcome) {
    match outcome {
        WorkflowOutcome::Skipped(warning) => display_boundary_warning(warning),
        WorkflowOutcome::DryRun { target, command } => {
            display_status(&format!(
                "Dry run: docs version {}",
                format_target(&target.version, &target.alias)
            ));
            println!("{}", command);
        }
        WorkflowOutcome::Published { target, .. } => {
            display_success(&format!(
                "Published docs version {}",
                format_target(&target.version, &target.alias)
            ));
        }
    }
}

/// Print self-check results and a summary line.
///
/// # Returns
/// * `true` - If every check passed
pub fn display_self_check_report(outcomes: &[CheckOutcome]) -> bool {
    for outcome in outcomes {
        println!(
            "  {}",
            format_check_line(outcome.name, outcome.failure.as_deref())
        );
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed == 0 {
        display_success(&format!("{} self-checks passed", outcomes.len()));
        true
    } else {
        display_error(&format!(
            "{} of {} self-checks failed",
            failed,
            outcomes.len()
        ));
        false
    }
}

/// Print a resolution as a single JSON object.
pub fn display_json_report(report: &ResolutionReport) -> Result<()> {
    println!("{}", serde_json::to_string(report)?);
    Ok(())
}
