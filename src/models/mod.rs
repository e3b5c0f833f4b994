//! # 数据模型模块
//!
//! 定义坐标记录、地理边界与运行统计的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`batch/`、`dataset/`、`commands/` 使用
//! - 子模块: record, region, stats

pub mod record;
pub mod region;
pub mod stats;

pub use record::Record;
pub use region::{BoundingBox, SHANGHAI};
pub use stats::RunStatistics;
