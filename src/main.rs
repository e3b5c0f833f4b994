//! # taxi-unify - 出租车 GPS 数据集合并工具
//!
//! 读取 `Taxi_070220` 目录下数千个单车 GPS 日志，提取经纬度，
//! 按上海地区包围盒清洗后合并为单个 CSV，供 MR-DBSCAN 聚类分析使用。
//!
//! ## 流程
//! 发现文件 → 分批读取 → 合并 → 清洗 → 写出 → 汇总
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (流程编排)
//!   │     ├── batch/     (文件发现与分批读取)
//!   │     ├── parsers/   (GPS 日志解析)
//!   │     ├── dataset/   (合并、清洗、导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出与报告)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod dataset;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("Error: {}", error::error_chain(&e)));
        std::process::exit(1);
    }
}
