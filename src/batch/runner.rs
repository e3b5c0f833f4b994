//! # 批量执行器
//!
//! 按固定批大小顺序读取文件，逐批累积提取出的坐标。
//!
//! ## 功能
//! - 文件列表按 `batch_size` 切分，逐批顺序处理
//! - 每批内的单文件结果合并为一张批表
//! - 单文件失败只计数，不中断运行
//! - 通过 `BatchObserver` 向外报告进度，自身不做任何输出
//!
//! ## 依赖关系
//! - 被 `commands/unify.rs` 调用
//! - 使用 `parsers/taxi_log.rs` 提取坐标
//! - 更新 `models/stats.rs` 的运行统计

use crate::error::{error_chain, Result, UnifyError};
use crate::models::{Record, RunStatistics};
use crate::parsers::{self, Extraction};

use std::path::{Path, PathBuf};

/// 默认批大小
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessResult {
    /// 处理成功，含提取出的坐标
    Success(Vec<Record>),
    /// 跳过（列数不足或无有效行）
    Skipped,
    /// 处理失败
    Failed(String, String), // (文件名, 错误信息)
}

/// 一批处理完成后的进度快照
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    /// 已处理文件数
    pub files_done: usize,
    /// 文件总数
    pub files_total: usize,
    /// 累计行数
    pub rows_total: usize,
}

impl BatchProgress {
    /// 完成百分比
    pub fn percentage(&self) -> f64 {
        if self.files_total == 0 {
            return 100.0;
        }
        self.files_done as f64 / self.files_total as f64 * 100.0
    }
}

/// 批处理过程的观察者
pub trait BatchObserver {
    /// 开始处理前调用
    fn on_start(&mut self, _files_total: usize, _batches: usize) {}

    /// 每个文件处理后调用，`stats` 已包含该文件的计数
    fn on_file(&mut self, _path: &Path, _result: &ProcessResult, _stats: &RunStatistics) {}

    /// 每批处理后调用
    fn on_batch(&mut self, _progress: &BatchProgress) {}

    /// 全部批次结束后调用（在判定是否有数据之前）
    fn on_finish(&mut self, _stats: &RunStatistics) {}
}

/// 累积结果：批表列表与更新后的统计
#[derive(Debug)]
pub struct Accumulation {
    pub batches: Vec<Vec<Record>>,
    pub stats: RunStatistics,
}

impl RunStatistics {
    /// 合并处理结果
    pub fn merge(&mut self, result: &ProcessResult) {
        match result {
            ProcessResult::Success(records) => {
                self.files_processed += 1;
                self.rows_accumulated += records.len();
            }
            ProcessResult::Skipped => self.files_skipped += 1,
            ProcessResult::Failed(_, _) => self.files_errored += 1,
        }
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 每批文件数
    batch_size: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    /// 顺序处理文件列表
    pub fn run<O: BatchObserver>(
        &self,
        files: &[PathBuf],
        mut stats: RunStatistics,
        observer: &mut O,
    ) -> Result<Accumulation> {
        let total = files.len();
        let batch_count = total.div_ceil(self.batch_size);
        observer.on_start(total, batch_count);

        let mut batches: Vec<Vec<Record>> = Vec::new();
        let mut files_done = 0;

        for chunk in files.chunks(self.batch_size) {
            let mut batch_data: Vec<Vec<Record>> = Vec::new();

            for path in chunk {
                let result = process_file(path);
                stats.merge(&result);
                observer.on_file(path, &result, &stats);

                if let ProcessResult::Success(records) = result {
                    batch_data.push(records);
                }
            }

            // 合并本批数据
            if !batch_data.is_empty() {
                batches.push(batch_data.concat());
            }

            files_done += chunk.len();
            observer.on_batch(&BatchProgress {
                files_done,
                files_total: total,
                rows_total: stats.rows_accumulated,
            });
        }

        observer.on_finish(&stats);

        if batches.is_empty() {
            return Err(UnifyError::NoData {
                attempted: stats.files_attempted(),
                failed: stats.files_errored,
            });
        }

        Ok(Accumulation { batches, stats })
    }
}

/// 处理单个文件
fn process_file(path: &Path) -> ProcessResult {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    match parsers::parse_taxi_log_file(path) {
        Ok(Extraction::Records(records)) => ProcessResult::Success(records),
        Ok(Extraction::TooFewColumns) | Ok(Extraction::NoValidRows) => ProcessResult::Skipped,
        Err(e) => ProcessResult::Failed(name, failure_reason(e)),
    }
}

/// 单文件错误的说明，文件名由调用方单独给出
fn failure_reason(err: UnifyError) -> String {
    match err {
        UnifyError::ParseError { reason, .. } => reason,
        UnifyError::FileReadError { source, .. } => source.to_string(),
        other => error_chain(&other),
    }
}
