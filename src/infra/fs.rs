//! # File System Operations Module / 文件系统操作模块
//!
//! Persists serialized reports. Files are created or truncated and, on Unix,
//! created with mode `0o600`. Errors are returned as-is; nothing is retried
//! and a failed write is not cleaned up.
//!
//! 持久化序列化后的报告。文件会被创建或截断，在 Unix 上以 `0o600` 权限创建。
//! 错误原样返回；不会重试，写入失败也不会清理。

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::ReportError;
use crate::core::models::SuiteReport;
use crate::reporting::serializer::{ReportFormat, ReportSerializer};

/// Derives `<base>.<ext>` for a format. The extension is appended, never
/// substituted, so a base such as `run.v2` becomes `run.v2.json`.
///
/// # Arguments
/// * `base` - Base name, optionally including a directory
/// * `format` - Output format supplying the lowercase extension
pub fn report_path(base: impl AsRef<Path>, format: ReportFormat) -> PathBuf {
    let mut path = OsString::from(base.as_ref().as_os_str());
    path.push(".");
    path.push(format.extension());
    PathBuf::from(path)
}

/// Writes `data` to `path`, creating or truncating the file.
/// New files are readable and writable by the owner only.
pub fn write_private(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.flush()
}

/// Serializes `report` with `serializer` and writes the bytes to `path`.
///
/// # Errors
/// Encoding errors from the serializer and I/O errors from the write,
/// both unmodified.
pub fn save_report(
    report: &SuiteReport,
    serializer: &dyn ReportSerializer,
    path: &Path,
) -> Result<(), ReportError> {
    let data = serializer.serialize(report)?;
    write_private(path, &data)?;
    debug!(
        suite = %report.name(),
        path = %path.display(),
        bytes = data.len(),
        "report written"
    );
    Ok(())
}

/// Resolves the serializer for `format`, derives `<base_name>.<ext>` and
/// saves the report there. Returns the written path.
pub fn save_report_as(
    report: &SuiteReport,
    format: &str,
    base_name: &str,
) -> Result<PathBuf, ReportError> {
    let format: ReportFormat = format.parse()?;
    let path = report_path(base_name, format);
    save_report(report, format.serializer().as_ref(), &path)?;
    Ok(path)
}
