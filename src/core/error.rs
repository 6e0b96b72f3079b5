//! Errors surfaced by serializer selection, encoding and persistence.

use thiserror::Error;

/// Everything that can go wrong between a finished report and a file on disk.
/// Encoder and I/O errors are passed through untouched.
///
/// 从完成的报告到磁盘文件之间可能出现的所有错误。
/// 编码器和 I/O 错误原样透传。
#[derive(Debug, Error)]
pub enum ReportError {
    /// The format identifier matches neither encoder.
    #[error("unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// A decoded report breaks a timing or failure-count invariant.
    #[error("invalid report: {0}")]
    InvalidReport(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
