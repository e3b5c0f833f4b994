//! # 数据清洗
//!
//! 依次删除缺失值行、经度越界行、纬度越界行。
//!
//! ## 依赖关系
//! - 被 `commands/unify.rs` 调用
//! - 使用 `models/region.rs` 的包围盒

use super::UnifiedDataset;
use crate::models::BoundingBox;

/// 清洗统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// 清洗前行数
    pub before: usize,
    /// 缺失值删除行数
    pub missing: usize,
    /// 经度越界删除行数
    pub lon_out_of_range: usize,
    /// 纬度越界删除行数
    pub lat_out_of_range: usize,
}

impl CleanReport {
    /// 删除总行数
    pub fn removed(&self) -> usize {
        self.missing + self.lon_out_of_range + self.lat_out_of_range
    }

    /// 保留行数
    pub fn valid(&self) -> usize {
        self.before - self.removed()
    }
}

impl UnifiedDataset {
    /// 按包围盒清洗，保持行的相对顺序
    pub fn clean(self, region: &BoundingBox) -> (UnifiedDataset, CleanReport) {
        let mut report = CleanReport {
            before: self.records.len(),
            ..CleanReport::default()
        };

        let mut records = self.records;

        records.retain(|r| r.is_complete());
        report.missing = report.before - records.len();

        let remaining = records.len();
        records.retain(|r| region.contains_lon(r.lon));
        report.lon_out_of_range = remaining - records.len();

        let remaining = records.len();
        records.retain(|r| region.contains_lat(r.lat));
        report.lat_out_of_range = remaining - records.len();

        (UnifiedDataset { records }, report)
    }
}
