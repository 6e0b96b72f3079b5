//! Structured-document (JSON) encoding of a suite report, and the matching decoder.

use chrono::{DateTime, Utc};

use crate::core::duration::format_elapsed;
use crate::core::error::ReportError;
use crate::core::models::SuiteReport;
use crate::reporting::serializer::ReportSerializer;

/// Pretty-printed JSON with two-space indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl ReportSerializer for JsonSerializer {
    fn serialize(&self, report: &SuiteReport) -> Result<Vec<u8>, ReportError> {
        Ok(serde_json::to_vec_pretty(report)?)
    }
}

/// Decodes a suite report previously written by [`JsonSerializer`].
///
/// The stored `failures` and `time` values are derived data, so they are
/// checked against the tree instead of being trusted.
///
/// # Errors
/// `ReportError::Json` for malformed input, `ReportError::InvalidReport`
/// when a derived field disagrees with what the tree implies.
pub fn read_report(bytes: &[u8]) -> Result<SuiteReport, ReportError> {
    let report: SuiteReport = serde_json::from_slice(bytes)?;
    validate(&report)?;
    Ok(report)
}

fn check_timing(
    node: &str,
    name: &str,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    time: &str,
) -> Result<(), ReportError> {
    match end {
        None if time.is_empty() => Ok(()),
        None => Err(ReportError::InvalidReport(format!(
            "{} '{}' has time {} but no endTime",
            node, name, time
        ))),
        Some(end) if end < start => Err(ReportError::InvalidReport(format!(
            "{} '{}' ends before it starts",
            node, name
        ))),
        Some(end) => {
            let expected = format_elapsed(start, end);
            if time == expected {
                Ok(())
            } else {
                Err(ReportError::InvalidReport(format!(
                    "{} '{}' has time {}, its start/end give {}",
                    node, name, time, expected
                )))
            }
        }
    }
}

fn validate(report: &SuiteReport) -> Result<(), ReportError> {
    check_timing("suite", report.name(), report.start_time(), report.end_time(), report.time())?;

    let failed = report.reports().iter().filter(|t| t.is_failed()).count();
    let expected = if report.is_closed() { failed } else { 0 };
    if report.failures() != expected {
        return Err(ReportError::InvalidReport(format!(
            "suite '{}' records {} failures, expected {}",
            report.name(),
            report.failures(),
            expected
        )));
    }

    for test in report.reports() {
        check_timing("test", test.name(), test.start_time(), test.end_time(), test.time())?;
        for op in test.steps().iter().flat_map(|s| s.results()) {
            check_timing("operation", op.name(), op.start_time(), op.end_time(), op.time())?;
        }
    }
    Ok(())
}
