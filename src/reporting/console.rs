//! # Console Reporting Module / 控制台报告模块
//!
//! Prints a finished suite report as a colored summary table.
//!
//! 将完成的套件报告打印为彩色摘要表格。

use colored::*;

use crate::core::models::{SuiteReport, TestReport};

/// Display status of a single test, derived from its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

impl TestStatus {
    /// A failure wins over the skip flag.
    pub fn of(test: &TestReport) -> Self {
        if test.is_failed() {
            TestStatus::Failed
        } else if test.is_skipped() {
            TestStatus::Skipped
        } else {
            TestStatus::Passed
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Passed => "Passed",
            TestStatus::Failed => "Failed",
            TestStatus::Skipped => "Skipped",
        }
    }

    fn colored(&self) -> ColoredString {
        let padded = format!("{:<8}", self.label());
        match self {
            TestStatus::Passed => padded.green(),
            TestStatus::Failed => padded.red(),
            TestStatus::Skipped => padded.dimmed(),
        }
    }
}

fn duration_cell(test: &TestReport) -> String {
    if test.time().is_empty() {
        "N/A".to_string()
    } else {
        format!("{}s", test.time())
    }
}

/// Counted from the tests themselves so the footer and the exit code agree
/// even for a suite that was never closed.
fn failed_count(report: &SuiteReport) -> usize {
    report.reports().iter().filter(|t| t.is_failed()).count()
}

fn footer(report: &SuiteReport) -> String {
    let total = if report.time().is_empty() {
        "N/A".to_string()
    } else {
        format!("{}s", report.time())
    };
    format!(
        "{} tests, {} failed, total {}",
        report.reports().len(),
        failed_count(report),
        total
    )
}

/// One line of the summary table, split so the status and detail can be colored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub status: TestStatus,
    /// Name and duration columns.
    pub body: String,
    /// `(kind: message)` for a failed test.
    pub detail: Option<String>,
}

impl SummaryRow {
    pub fn of(test: &TestReport) -> Self {
        Self {
            status: TestStatus::of(test),
            body: format!("{:<40} | {:>10}", test.name(), duration_cell(test)),
            detail: test
                .failure()
                .map(|failure| format!("  ({}: {})", failure.kind, failure.message)),
        }
    }

    fn render(&self, status: &str, detail: &str) -> String {
        format!("  - {} | {}{}", status, self.body, detail)
    }

    pub fn plain(&self) -> String {
        self.render(
            &format!("{:<8}", self.status.label()),
            self.detail.as_deref().unwrap_or(""),
        )
    }

    pub fn colored(&self) -> String {
        let detail = self
            .detail
            .as_deref()
            .map(|d| d.red().to_string())
            .unwrap_or_default();
        self.render(&self.status.colored().to_string(), &detail)
    }
}

/// Builds the summary as plain text lines, one per test plus a header and footer.
///
/// # Output Format / 输出格式
/// ```text
/// --- smoke ---
///   - Passed   | t1                                       |     0.412s
///   - Failed   | t2                                       |     1.003s  (AssertionError: boom)
///   - Skipped  | t3                                       |        N/A
/// 3 tests, 1 failed, total 1.421s
/// ```
pub fn summary_lines(report: &SuiteReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.reports().len() + 2);
    lines.push(format!("--- {} ---", report.name()));
    lines.extend(report.reports().iter().map(|t| SummaryRow::of(t).plain()));
    lines.push(footer(report));
    lines
}

/// Prints a colored summary of the report to stdout.
///
/// # Returns
/// `true` if any test in the report failed. Used to set the process exit code.
///
/// 如果报告中有任何测试失败，则返回 `true`，用于设置进程退出码。
pub fn print_summary(report: &SuiteReport) -> bool {
    println!("\n{}", format!("--- {} ---", report.name()).bold());

    for test in report.reports() {
        println!("{}", SummaryRow::of(test).colored());
    }

    let failed = failed_count(report) > 0;
    let footer = footer(report);
    if failed {
        println!("{}", footer.red().bold());
    } else {
        println!("{}", footer.green().bold());
    }
    failed
}
