//! # Serializer Contract / 序列化契约
//!
//! A `ReportSerializer` renders a whole `SuiteReport` into one target format.
//! Two implementations exist, selected by a format identifier.
//!
//! `ReportSerializer` 将整个 `SuiteReport` 渲染为一种目标格式。
//! 共有两种实现，通过格式标识符进行选择。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::ReportError;
use crate::core::models::SuiteReport;

pub use crate::reporting::json::JsonSerializer;
pub use crate::reporting::xml::XmlSerializer;

/// Renders a suite report into a complete byte representation.
/// There is no partial output: either the whole tree is encoded or an error is returned.
pub trait ReportSerializer: Send + Sync {
    fn serialize(&self, report: &SuiteReport) -> Result<Vec<u8>, ReportError>;
}

/// The recognized output formats.
/// 支持的输出格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportFormat {
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "XML")]
    Xml,
}

impl ReportFormat {
    /// File extension for this format, always lowercase.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Xml => "xml",
        }
    }

    pub fn serializer(&self) -> Box<dyn ReportSerializer> {
        match self {
            ReportFormat::Json => Box::new(JsonSerializer),
            ReportFormat::Xml => Box::new(XmlSerializer),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Json => f.write_str("JSON"),
            ReportFormat::Xml => f.write_str("XML"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    /// Matches `"JSON"` / `"XML"` case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("json") {
            Ok(ReportFormat::Json)
        } else if s.eq_ignore_ascii_case("xml") {
            Ok(ReportFormat::Xml)
        } else {
            Err(ReportError::UnsupportedFormat(s.to_string()))
        }
    }
}

/// Returns the serializer for a format identifier.
///
/// # Errors / 错误
/// `ReportError::UnsupportedFormat` if `format` is neither JSON nor XML.
/// No serializer is constructed in that case.
///
/// 如果 `format` 既不是 JSON 也不是 XML，则返回 `ReportError::UnsupportedFormat`。
pub fn get_serializer(format: &str) -> Result<Box<dyn ReportSerializer>, ReportError> {
    let format: ReportFormat = format.parse()?;
    Ok(format.serializer())
}
