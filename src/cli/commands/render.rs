// src/cli/commands/render.rs

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::cli::commands::load_report;
use crate::core::config::ReportConfig;
use crate::infra::fs::save_report;

/// Arguments of the `render` subcommand.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub format: Option<String>,
    pub name: Option<String>,
}

/// Merges the config file with command-line overrides.
/// Flags win over file values, file values win over defaults.
pub fn resolve_config(options: &RenderOptions) -> Result<ReportConfig> {
    let mut config = match &options.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };
    if let Some(format) = &options.format {
        config.format = format.clone();
    }
    if let Some(name) = &options.name {
        config.name = name.clone();
    }
    Ok(config)
}

/// Decodes the input report, re-encodes it in the configured format and
/// writes it out. Returns the written path.
pub fn execute(options: &RenderOptions) -> Result<PathBuf> {
    let config = resolve_config(options)?;
    let format = config.report_format()?;
    let path = config.output_path()?;

    let report = load_report(&options.input)?;

    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    save_report(&report, format.serializer().as_ref(), &path)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    info!(suite = %report.name(), format = %format, path = %path.display(), "rendered report");
    println!("{} {}", "Report written to".green(), path.display());
    Ok(path)
}
