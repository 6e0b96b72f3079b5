use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::ReportError;
use crate::infra::fs::report_path;
use crate::reporting::serializer::ReportFormat;

/// Output settings for a report, loaded from a TOML file.
/// Every field has a default, so an empty file is a valid configuration.
///
/// 从 TOML 文件加载的报告输出设置。
/// 每个字段都有默认值，因此空文件也是有效的配置。
///
/// ```toml
/// name = "e2e-results"
/// format = "XML"
/// dir = "target/reports"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Base file name of the report, without extension.
    /// 报告的基础文件名（不含扩展名）。
    #[serde(default = "default_name")]
    pub name: String,

    /// Format identifier, `"JSON"` or `"XML"`. It is validated only when a
    /// serializer is requested, not when the file is parsed.
    /// 格式标识符，`"JSON"` 或 `"XML"`。只在请求序列化器时校验。
    #[serde(default = "default_format")]
    pub format: String,

    /// Optional directory the report is written into. Relative paths are
    /// resolved against the working directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_name() -> String {
    "report".to_string()
}

fn default_format() -> String {
    ReportFormat::Json.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            format: default_format(),
            dir: None,
        }
    }
}

impl ReportConfig {
    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read report config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse report config: {}", path.display()))
    }

    pub fn report_format(&self) -> Result<ReportFormat, ReportError> {
        self.format.parse()
    }

    /// The file the report will be written to: `<dir>/<name>.<ext>`.
    pub fn output_path(&self) -> Result<PathBuf, ReportError> {
        let format = self.report_format()?;
        let base = match &self.dir {
            Some(dir) => dir.join(&self.name),
            None => PathBuf::from(&self.name),
        };
        Ok(report_path(&base, format))
    }
}
