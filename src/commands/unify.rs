//! # unify 命令实现
//!
//! 将输入目录下的全部出租车 GPS 日志合并为一个 `lon,lat` CSV。
//!
//! ## 流程
//! 1. 文件发现（排序、可选截断）
//! 2. 分批读取并提取经纬度
//! 3. 合并所有批表
//! 4. 按上海包围盒清洗
//! 5. 写出 CSV
//! 6. 打印汇总
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `batch/`、`dataset/`、`models/`
//! - 使用 `utils/report.rs` 输出

use crate::batch::collector::DEFAULT_PATTERN;
use crate::batch::runner::DEFAULT_BATCH_SIZE;
use crate::batch::{Accumulation, BatchRunner, FileCollector};
use crate::cli::{Cli, DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::dataset::{export, UnifiedDataset};
use crate::error::Result;
use crate::models::{RunStatistics, SHANGHAI};
use crate::utils::report::{self, ConsoleReporter};

use std::path::PathBuf;

/// 合并运行配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifyConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pattern: String,
    pub max_files: Option<usize>,
    pub batch_size: usize,
}

impl Default for UnifyConfig {
    fn default() -> Self {
        UnifyConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            pattern: DEFAULT_PATTERN.to_string(),
            max_files: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl From<Cli> for UnifyConfig {
    fn from(cli: Cli) -> Self {
        UnifyConfig {
            input: cli.input,
            output: cli.output,
            pattern: cli.pattern,
            max_files: cli.max_files,
            batch_size: usize::try_from(cli.batch_size).unwrap_or(usize::MAX),
        }
    }
}

/// 执行合并，返回最终统计
pub fn execute(config: &UnifyConfig) -> Result<RunStatistics> {
    report::print_run_header();

    // 文件发现
    let discovery = FileCollector::new(config.input.clone())
        .with_pattern(&config.pattern)
        .max_files(config.max_files)
        .collect()?;
    report::print_discovery(&discovery);

    let stats = RunStatistics {
        files_found: discovery.found,
        files_selected: discovery.files.len(),
        ..RunStatistics::default()
    };

    // 分批读取
    let mut reporter = ConsoleReporter::new();
    let Accumulation { batches, mut stats } =
        BatchRunner::new(config.batch_size).run(&discovery.files, stats, &mut reporter)?;

    // 合并
    let batch_count = batches.len();
    let dataset = UnifiedDataset::combine(batches);
    report::print_combined(batch_count, dataset.len());

    // 清洗
    let (dataset, clean_report) = dataset.clean(&SHANGHAI);
    stats.rows_removed = clean_report.removed();
    report::print_cleaning(&clean_report);

    // 写出
    report::print_writing(&config.output);
    let (output, size) = export::to_csv(&dataset, &config.output)?;
    stats.output_bytes = size;

    report::print_summary(&output, &stats, &dataset);

    Ok(stats)
}
