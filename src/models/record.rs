//! # 坐标记录数据模型
//!
//! 单条 GPS 定位点（经度, 纬度）。
//!
//! ## 依赖关系
//! - 被 `parsers/taxi_log.rs` 创建
//! - 被 `dataset/` 清洗与导出

use serde::{Deserialize, Serialize};

/// GPS 定位点
///
/// 字段名即输出 CSV 的表头：`lon,lat`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// 经度 (°)
    pub lon: f64,
    /// 纬度 (°)
    pub lat: f64,
}

impl Record {
    pub fn new(lon: f64, lat: f64) -> Self {
        Record { lon, lat }
    }

    /// 两个坐标均非缺失值
    pub fn is_complete(&self) -> bool {
        !self.lon.is_nan() && !self.lat.is_nan()
    }
}
