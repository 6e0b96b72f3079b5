//! # Config Module Unit Tests / Config 模块单元测试
//!
//! Tests for loading `ReportConfig` from TOML and resolving the output path.

use std::fs;
use std::path::PathBuf;
use suite_report::{ReportConfig, ReportError, ReportFormat};
use tempfile::TempDir;

fn write_config(temp_dir: &TempDir, content: &str) -> PathBuf {
    let path = temp_dir.path().join("report.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = ReportConfig::default();
    assert_eq!(config.name, "report");
    assert_eq!(config.format, "JSON");
    assert!(config.dir.is_none());
    assert_eq!(config.output_path().unwrap(), PathBuf::from("report.json"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "");
    let config = ReportConfig::from_file(&path).unwrap();
    assert_eq!(config, ReportConfig::default());
}

#[test]
fn test_full_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
name = "e2e"
format = "XML"
dir = "target/reports"
"#,
    );
    let config = ReportConfig::from_file(&path).unwrap();
    assert_eq!(config.report_format().unwrap(), ReportFormat::Xml);
    assert_eq!(
        config.output_path().unwrap(),
        PathBuf::from("target/reports").join("e2e.xml")
    );
}

#[test]
fn test_unknown_format_is_reported_late() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "format = \"yaml\"\n");

    // Parsing succeeds; the format is only checked when it is used.
    let config = ReportConfig::from_file(&path).unwrap();
    assert!(matches!(
        config.output_path(),
        Err(ReportError::UnsupportedFormat(f)) if f == "yaml"
    ));
}

#[test]
fn test_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "name = [unclosed\n");
    let err = ReportConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse report config"));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = ReportConfig::from_file(&temp_dir.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read report config"));
}
