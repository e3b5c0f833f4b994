//! # 运行统计
//!
//! 在各处理阶段之间显式传递的计数器累加器。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`、`dataset/`、`commands/unify.rs` 更新
//! - 被 `utils/report.rs` 读取输出

/// 一次运行的统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// 匹配到的文件总数
    pub files_found: usize,
    /// 截断后实际参与处理的文件数
    pub files_selected: usize,
    /// 贡献了至少一行数据的文件数
    pub files_processed: usize,
    /// 列数不足或无有效行而被跳过的文件数
    pub files_skipped: usize,
    /// 读取/解析失败的文件数
    pub files_errored: usize,
    /// 通过数值转换后累计的行数
    pub rows_accumulated: usize,
    /// 清洗阶段删除的行数
    pub rows_removed: usize,
    /// 输出文件大小（字节）
    pub output_bytes: u64,
}

impl RunStatistics {
    /// 已尝试读取的文件数
    pub fn files_attempted(&self) -> usize {
        self.files_processed + self.files_skipped + self.files_errored
    }

    /// 清洗后保留的行数
    pub fn rows_valid(&self) -> usize {
        self.rows_accumulated - self.rows_removed
    }

    /// 输出文件大小（MiB）
    pub fn output_mib(&self) -> f64 {
        self.output_bytes as f64 / (1024.0 * 1024.0)
    }
}
