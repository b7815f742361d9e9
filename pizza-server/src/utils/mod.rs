//! 工具模块
//!
//! - [`logger`] - 日志初始化与清理

pub mod logger;
