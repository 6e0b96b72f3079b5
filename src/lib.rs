//! # Suite Report Library / Suite Report 库
//!
//! This library records the outcome of a test run as a tree
//! (suite → test → step → operation) with per-node timing, and renders
//! that tree as JSON or XML.
//!
//! 此库将一次测试运行的结果记录为一棵树
//! （套件 → 测试 → 步骤 → 操作），包含每个节点的计时信息，
//! 并可将其渲染为 JSON 或 XML。
//!
//! ## Modules / 模块
//!
//! - `core` - Report data model, duration formatting, errors and configuration
//! - `reporting` - Serializer contract, JSON/XML encoders and console summary
//! - `infra` - Writing serialized reports to disk
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 报告数据模型、耗时格式化、错误和配置
//! - `reporting` - 序列化契约、JSON/XML 编码器和控制台摘要
//! - `infra` - 将序列化后的报告写入磁盘
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use crate::core::config::ReportConfig;
pub use crate::core::error::ReportError;
pub use crate::core::models::{
    Failure, OperationReport, OperationType, StepReport, SuiteReport, TestReport,
};
pub use crate::infra::fs::{report_path, save_report, save_report_as};
pub use crate::reporting::serializer::{
    get_serializer, JsonSerializer, ReportFormat, ReportSerializer, XmlSerializer,
};
