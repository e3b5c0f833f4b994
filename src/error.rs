//! # 统一错误处理模块
//!
//! 定义 taxi-unify 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分级
//! - 致命错误：配置错误、无输入文件、无有效数据、写出失败
//! - 非致命错误：单个文件读取/解析失败（`FileReadError` / `ParseError`），
//!   仅在批处理循环内计数，不向外传播
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// taxi-unify 统一错误类型
#[derive(Error, Debug)]
pub enum UnifyError {
    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Input directory '{path}' does not exist. Check the path.")]
    DirectoryNotFound { path: String },

    #[error("Input path '{path}' is not a directory")]
    NotADirectory { path: String },

    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 输入错误
    // ─────────────────────────────────────────────────────────────
    #[error("No files matching '{pattern}' found in directory {path}")]
    NoFilesFound { path: String, pattern: String },

    #[error("Could not read any data from {attempted} files ({failed} failed). Check the file format.")]
    NoData { attempted: usize, failed: usize },

    // ─────────────────────────────────────────────────────────────
    // 单文件错误（非致命）
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {reason}")]
    ParseError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 写出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, UnifyError>;

/// 展开错误及其来源链为单行消息
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
