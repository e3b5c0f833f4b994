//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。所有参数均可省略，默认值对应
//! 2007-02-20 上海出租车数据集的目录布局。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/unify.rs`

use crate::batch::collector::DEFAULT_PATTERN;
use crate::batch::runner::DEFAULT_BATCH_SIZE;

use clap::Parser;
use std::path::PathBuf;

/// 默认输入目录
pub const DEFAULT_INPUT: &str = "Taxi_070220";
/// 默认输出文件
pub const DEFAULT_OUTPUT: &str = "taxi_data_unificado.csv";

/// taxi-unify - 出租车 GPS 数据集合并工具
#[derive(Parser, Debug)]
#[command(name = "taxi-unify")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Unify taxi GPS log files into a single lon/lat CSV for MR-DBSCAN analysis", long_about = None)]
#[command(after_help = "Examples:
  # Process every file
  taxi-unify

  # Process only the first 100 files (test run)
  taxi-unify --max-files 100

  # Choose input directory and output file
  taxi-unify --input Taxi_070220 --output my_dataset.csv")]
pub struct Cli {
    /// Directory containing the taxi GPS log files
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output CSV file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Maximum number of files to process (default: all)
    #[arg(long)]
    pub max_files: Option<usize>,

    /// Number of files read per batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub batch_size: u64,

    /// File name pattern of the GPS logs inside the input directory
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["taxi-unify"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("Taxi_070220"));
        assert_eq!(cli.output, PathBuf::from("taxi_data_unificado.csv"));
        assert_eq!(cli.max_files, None);
        assert_eq!(cli.batch_size, 100);
        assert_eq!(cli.pattern, "Taxi_*");
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "taxi-unify",
            "--input",
            "data",
            "--output",
            "out.csv",
            "--max-files",
            "10",
            "--batch-size",
            "7",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("data"));
        assert_eq!(cli.output, PathBuf::from("out.csv"));
        assert_eq!(cli.max_files, Some(10));
        assert_eq!(cli.batch_size, 7);
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        assert!(Cli::try_parse_from(["taxi-unify", "--batch-size", "0"]).is_err());
    }
}
