//! # 批量处理模块
//!
//! 提供文件发现与分批累积能力。
//!
//! ## 功能
//! - 收集匹配文件列表（排序、截断）
//! - 按批顺序处理，单文件失败隔离
//! - 进度回调与统计
//!
//! ## 依赖关系
//! - 被 `commands/unify.rs` 使用
//! - 使用 `parsers/` 提取坐标

pub mod collector;
pub mod runner;

pub use collector::{Discovery, FileCollector};
pub use runner::{Accumulation, BatchObserver, BatchProgress, BatchRunner, ProcessResult};
