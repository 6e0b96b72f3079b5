// src/cli/commands/summary.rs

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::commands::load_report;
use crate::reporting::console::print_summary;

/// Prints the summary table. Exits with failure when any test failed.
pub fn execute(input: &Path) -> Result<ExitCode> {
    let report = load_report(input)?;
    if print_summary(&report) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
