//! # 解析器模块
//!
//! 提供出租车 GPS 日志的解析器。
//!
//! ## 依赖关系
//! - 被 `batch/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: taxi_log

pub mod taxi_log;

pub use taxi_log::{parse_taxi_log_file, Extraction};
