//! # 统一数据集模块
//!
//! 合并各批表、清洗越界坐标并导出为 CSV。
//!
//! ## 子模块
//! - `clean`: 缺失值与包围盒过滤
//! - `export`: CSV 导出
//!
//! ## 依赖关系
//! - 被 `commands/unify.rs` 使用
//! - 使用 `models/` 数据模型

pub mod clean;
pub mod export;

pub use clean::CleanReport;

use crate::models::Record;

/// 坐标取值范围
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

/// 合并后的坐标数据集
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnifiedDataset {
    records: Vec<Record>,
}

impl UnifiedDataset {
    /// 按顺序合并所有批表
    pub fn combine(batches: Vec<Vec<Record>>) -> Self {
        UnifiedDataset {
            records: batches.concat(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// 经度范围，空数据集返回 None
    pub fn lon_extent(&self) -> Option<Extent> {
        extent(self.records.iter().map(|r| r.lon))
    }

    /// 纬度范围，空数据集返回 None
    pub fn lat_extent(&self) -> Option<Extent> {
        extent(self.records.iter().map(|r| r.lat))
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<Extent> {
    values.fold(None, |acc, v| match acc {
        None => Some(Extent { min: v, max: v }),
        Some(e) => Some(Extent {
            min: e.min.min(v),
            max: e.max.max(v),
        }),
    })
}
