//! # Data Models Module / 数据模型模块
//!
//! This module defines the report tree recorded during a test run:
//! `SuiteReport` owns `TestReport`s, which own `StepReport`s, which own
//! `OperationReport`s. Nodes are built incrementally by the runner and are
//! append-only; nothing here can be removed or reordered.
//!
//! 此模块定义测试运行期间记录的报告树：
//! `SuiteReport` 拥有 `TestReport`，`TestReport` 拥有 `StepReport`，
//! `StepReport` 拥有 `OperationReport`。节点由运行器逐步构建，只能追加，
//! 不能删除或重新排序。
//!
//! The tree has no internal locking. A runner executing tests in parallel
//! gives each one its own `TestReport` and serializes `add_test` calls itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::core::duration::format_elapsed;
use crate::core::error::ReportError;
use crate::infra::fs::save_report_as;

/// The kind of primitive action an operation performed.
/// 操作所执行的基本动作类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Create,
    Delete,
    Apply,
    Assert,
    Error,
    Script,
    Command,
}

impl OperationType {
    /// The external name used in both JSON and XML output.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Create => "create",
            OperationType::Delete => "delete",
            OperationType::Apply => "apply",
            OperationType::Assert => "assert",
            OperationType::Error => "error",
            OperationType::Script => "script",
            OperationType::Command => "command",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a test did not pass.
/// 测试未通过的原因。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// A summary of the failure / 失败摘要
    pub message: String,
    /// The failure category, e.g. `"AssertionError"` / 失败类别
    #[serde(rename = "type")]
    pub kind: String,
}

impl Failure {
    pub fn new(message: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: kind.into(),
        }
    }
}

/// Records the end instant and derived duration of a timed node.
/// Returns `false` and leaves both fields untouched if an end was already recorded.
fn stamp_end(
    node: &str,
    name: &str,
    start: DateTime<Utc>,
    end: &mut Option<DateTime<Utc>>,
    time: &mut String,
) -> bool {
    if end.is_some() {
        warn!(node, name, "end time already recorded, ignoring repeated call");
        return false;
    }
    let now = Utc::now();
    *time = format_elapsed(start, now);
    *end = Some(now);
    true
}

/// The top-level record of one full test-suite execution.
///
/// `failures` is written only by [`SuiteReport::close`].
///
/// 一次完整测试套件执行的顶层记录。
/// `failures` 只会由 [`SuiteReport::close`] 写入。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteReport {
    name: String,
    start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    time: String,
    #[serde(default)]
    reports: Vec<TestReport>,
    #[serde(default)]
    failures: usize,
}

impl SuiteReport {
    /// Starts a new suite report; the start time is taken now.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start_time: Utc::now(),
            end_time: None,
            time: String::new(),
            reports: Vec::new(),
            failures: 0,
        }
    }

    /// Appends a test report. Call order is preserved.
    pub fn add_test(&mut self, test: TestReport) {
        self.reports.push(test);
    }

    /// Finalizes the suite: stamps the end time and duration, then counts
    /// the tests that carry a `Failure`.
    ///
    /// Only the first call has an effect; later calls are logged and ignored
    /// so the failure count always reflects the tree at its first close.
    ///
    /// 结束套件：记录结束时间和耗时，然后统计带有 `Failure` 的测试数量。
    /// 只有第一次调用生效，之后的调用会被记录日志并忽略。
    pub fn close(&mut self) {
        if !stamp_end("suite", &self.name, self.start_time, &mut self.end_time, &mut self.time) {
            return;
        }
        self.failures = self.reports.iter().filter(|t| t.failure.is_some()).count();
        debug!(
            suite = %self.name,
            tests = self.reports.len(),
            failures = self.failures,
            time = %self.time,
            "suite report closed"
        );
    }

    /// Serializes the report in `format` and writes it to `<base_name>.<ext>`.
    /// Returns the path that was written.
    pub fn save_as(&self, format: &str, base_name: &str) -> Result<PathBuf, ReportError> {
        save_report_as(self, format, base_name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Elapsed seconds with three decimals; empty until closed.
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn reports(&self) -> &[TestReport] {
        &self.reports
    }

    /// The number of failed tests counted at close. Zero before `close`.
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn is_closed(&self) -> bool {
        self.end_time.is_some()
    }
}

/// The record of one test's execution.
/// 单个测试执行的记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    name: String,
    start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    time: String,
    /// Present only when the test failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    failure: Option<Failure>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    steps: Vec<StepReport>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    concurrent: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    namespace: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    skip: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    skip_delete: bool,
}

impl TestReport {
    pub fn new(
        name: impl Into<String>,
        concurrent: bool,
        namespace: impl Into<String>,
        skip: bool,
        skip_delete: bool,
    ) -> Self {
        Self {
            name: name.into(),
            start_time: Utc::now(),
            end_time: None,
            time: String::new(),
            failure: None,
            steps: Vec::new(),
            concurrent,
            namespace: namespace.into(),
            skip,
            skip_delete,
        }
    }

    pub fn add_step(&mut self, step: StepReport) {
        self.steps.push(step);
    }

    /// Marks the test as failed. A later call replaces the earlier failure.
    pub fn attach_failure(&mut self, failure: Failure) {
        self.failure = Some(failure);
    }

    /// Stamps the end time and duration. Repeated calls are ignored.
    pub fn mark_end(&mut self) {
        stamp_end("test", &self.name, self.start_time, &mut self.end_time, &mut self.time);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    pub fn steps(&self) -> &[StepReport] {
        &self.steps
    }

    pub fn is_concurrent(&self) -> bool {
        self.concurrent
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn is_skipped(&self) -> bool {
        self.skip
    }

    pub fn skip_delete(&self) -> bool {
        self.skip_delete
    }
}

/// One logical step within a test. Steps are not timed.
/// 测试中的一个逻辑步骤。步骤不计时。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepReport {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    results: Vec<OperationReport>,
}

impl StepReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            results: Vec::new(),
        }
    }

    pub fn add_operation(&mut self, operation: OperationReport) {
        self.results.push(operation);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn results(&self) -> &[OperationReport] {
        &self.results
    }
}

/// One primitive action (create, delete, apply, ...) and its outcome.
/// 一个基本动作（create、delete、apply 等）及其结果。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationReport {
    name: String,
    start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    time: String,
    #[serde(default)]
    result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    operation_type: OperationType,
}

impl OperationReport {
    pub fn new(name: impl Into<String>, operation_type: OperationType) -> Self {
        Self {
            name: name.into(),
            start_time: Utc::now(),
            end_time: None,
            time: String::new(),
            result: String::new(),
            message: None,
            operation_type,
        }
    }

    /// Sets the free-form outcome descriptor, e.g. `"success"`.
    pub fn set_result(&mut self, result: impl Into<String>) {
        self.result = result.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Stamps the end time and duration. Repeated calls are ignored.
    pub fn mark_end(&mut self) {
        stamp_end("operation", &self.name, self.start_time, &mut self.end_time, &mut self.time);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }
}
