//! # Core Module / 核心模块
//!
//! This module contains the report data model and the pieces it is built on:
//! elapsed-time formatting, the error type and the output configuration.
//!
//! 此模块包含报告数据模型及其依赖的部分：
//! 耗时格式化、错误类型和输出配置。

pub mod config;
pub mod duration;
pub mod error;
pub mod models;

// Re-exports
pub use duration::format_elapsed;
pub use error::ReportError;
pub use models::SuiteReport;
