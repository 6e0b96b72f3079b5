//! # Reporting Module / 报告模块
//!
//! This module turns a `SuiteReport` into bytes (JSON or XML) through the
//! `ReportSerializer` contract, and prints colorful summaries to the console.
//!
//! 此模块通过 `ReportSerializer` 契约将 `SuiteReport` 转换为字节（JSON 或 XML），
//! 并在控制台打印彩色摘要。

pub mod console;
pub mod json;
pub mod serializer;
pub mod xml;

// Re-export common reporting functions
pub use console::{print_summary, summary_lines};
pub use serializer::{get_serializer, ReportFormat, ReportSerializer};
