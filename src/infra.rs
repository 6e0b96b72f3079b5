//! # Infrastructure Module / 基础设施模块
//!
//! This module provides the file system side of reporting: deriving report
//! paths and writing serialized reports with owner-only permissions.
//!
//! 此模块提供报告的文件系统部分：
//! 推导报告路径，并以仅所有者可读写的权限写入序列化后的报告。

pub mod fs;
