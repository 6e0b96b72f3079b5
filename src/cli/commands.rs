pub mod render;
pub mod summary;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::models::SuiteReport;
use crate::reporting::json::read_report;

/// Loads a JSON suite report from disk.
pub(crate) fn load_report(path: &Path) -> Result<SuiteReport> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read report: {}", path.display()))?;
    read_report(&bytes).with_context(|| format!("Failed to decode report: {}", path.display()))
}
