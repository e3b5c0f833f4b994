//! # 运行报告
//!
//! 负责整个流程中所有面向用户的控制台输出：
//! 开始/结束时间戳、文件发现结果、逐批进度、清洗统计与最终汇总表。
//!
//! ## 依赖关系
//! - 被 `commands/unify.rs` 调用
//! - 实现 `batch/runner.rs` 的 `BatchObserver`
//! - 使用 `utils/output.rs`、`utils/progress.rs`、`tabled`

use crate::batch::{BatchObserver, BatchProgress, Discovery, ProcessResult};
use crate::dataset::{CleanReport, Extent, UnifiedDataset};
use crate::models::RunStatistics;
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::path::Path;
use tabled::{Table, Tabled};

/// 单独列出的文件错误数上限，其余只计数
pub const MAX_REPORTED_FAILURES: usize = 5;

/// 打印运行标题与开始时间
pub fn print_run_header() {
    output::print_header("TAXI DATASET UNIFICATION");
    output::print_info(&format!("Started: {}", output::timestamp()));
}

/// 打印文件发现结果
pub fn print_discovery(discovery: &Discovery) {
    for warning in &discovery.warnings {
        output::print_warning(&format!("Skipped while scanning: {}", warning));
    }
    output::print_success(&format!("Files found: {}", discovery.found));

    if discovery.is_truncated() {
        output::print_warning(&format!(
            "Using only the first {} files (test mode)",
            discovery.files.len()
        ));
        output::print_info("To process every file, run without --max-files");
    } else {
        output::print_success(&format!("Processing all {} files", discovery.found));
    }
}

/// 控制台批处理进度报告
#[derive(Default)]
pub struct ConsoleReporter {
    pb: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在进度条暂停期间执行输出
    fn print(&self, f: impl FnOnce()) {
        match &self.pb {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}

impl BatchObserver for ConsoleReporter {
    fn on_start(&mut self, files_total: usize, batches: usize) {
        println!();
        output::print_info(&format!(
            "Reading files in {} batch{}...",
            batches,
            if batches == 1 { "" } else { "es" }
        ));
        output::print_separator();
        self.pb = Some(progress::create_progress_bar(
            files_total as u64,
            "Reading",
        ));
    }

    fn on_file(&mut self, _path: &Path, result: &ProcessResult, stats: &RunStatistics) {
        if let ProcessResult::Failed(name, err) = result {
            if stats.files_errored <= MAX_REPORTED_FAILURES {
                self.print(|| output::print_warning(&format!("Error reading {}: {}", name, err)));
            }
        }

        if let Some(pb) = &self.pb {
            pb.inc(1);
        }
    }

    fn on_batch(&mut self, progress: &BatchProgress) {
        self.print(|| {
            output::print_progress(&format!(
                "Processed: {} / {} files ({:.1}%) - Accumulated rows: {}",
                progress.files_done,
                progress.files_total,
                progress.percentage(),
                progress.rows_total
            ))
        });
    }

    fn on_finish(&mut self, stats: &RunStatistics) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }

        if stats.files_errored > MAX_REPORTED_FAILURES {
            println!();
            output::print_warning(&format!(
                "Total files with errors: {}",
                stats.files_errored
            ));
        }
    }
}

/// 打印合并结果
pub fn print_combined(batches: usize, rows: usize) {
    println!();
    output::print_separator();
    output::print_info(&format!("Combining {} data batches...", batches));
    output::print_success(&format!("Combined data: {} rows", rows));
}

/// 打印清洗统计
pub fn print_cleaning(report: &CleanReport) {
    println!();
    output::print_info("Cleaning data...");
    if report.removed() > 0 {
        output::print_progress(&format!(
            "Rows removed (invalid values): {}",
            report.removed()
        ));
        output::print_progress(&format!("Valid rows: {}", report.valid()));
    }
}

/// 打印写出开始
pub fn print_writing(path: &Path) {
    println!();
    output::print_info(&format!("Writing CSV file '{}'...", path.display()));
}

/// 汇总表行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

impl SummaryRow {
    fn new(metric: &'static str, value: impl Into<String>) -> Self {
        SummaryRow {
            metric,
            value: value.into(),
        }
    }
}

/// 格式化坐标范围（6 位小数）
fn format_extent(extent: Option<Extent>) -> String {
    match extent {
        Some(e) => format!("[{:.6}, {:.6}]", e.min, e.max),
        None => "n/a".to_string(),
    }
}

/// 打印最终汇总
pub fn print_summary(output_path: &Path, stats: &RunStatistics, dataset: &UnifiedDataset) {
    let rows = vec![
        SummaryRow::new("Output file", output_path.display().to_string()),
        SummaryRow::new("File size", format!("{:.2} MiB", stats.output_mib())),
        SummaryRow::new("Total rows", stats.rows_valid().to_string()),
        SummaryRow::new(
            "Files read",
            format!("{} of {}", stats.files_selected, stats.files_found),
        ),
        SummaryRow::new("Files processed", stats.files_processed.to_string()),
        SummaryRow::new("Files skipped", stats.files_skipped.to_string()),
        SummaryRow::new("Files with errors", stats.files_errored.to_string()),
        SummaryRow::new("Longitude range", format_extent(dataset.lon_extent())),
        SummaryRow::new("Latitude range", format_extent(dataset.lat_extent())),
        SummaryRow::new("Finished", output::timestamp()),
    ];

    output::print_header("UNIFICATION COMPLETE");
    println!("{}", Table::new(&rows));
    println!();
    output::print_done(&format!(
        "File generated successfully: {}",
        output_path.display()
    ));
}
