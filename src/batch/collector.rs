//! # 文件收集器
//!
//! 根据输入目录和文件名模式收集待处理的 GPS 日志文件列表。
//!
//! ## 功能
//! - glob 模式匹配文件名（默认 `Taxi_*`）
//! - 仅扫描目录第一层
//! - 按路径排序，保证结果确定
//! - 可选文件数上限（截断而非报错）
//!
//! ## 依赖关系
//! - 被 `commands/unify.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{Result, UnifyError};

use std::path::PathBuf;
use walkdir::WalkDir;

/// 默认文件名模式
pub const DEFAULT_PATTERN: &str = "Taxi_*";

/// 文件发现结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// 参与处理的文件（已排序、已截断）
    pub files: Vec<PathBuf>,
    /// 截断前匹配到的文件总数
    pub found: usize,
    /// 遍历目录时无法归属到具体文件的错误
    pub warnings: Vec<String>,
}

impl Discovery {
    /// 是否因上限而截断
    pub fn is_truncated(&self) -> bool {
        self.files.len() < self.found
    }
}

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 文件名匹配模式
    pattern: String,
    /// 文件数上限
    max_files: Option<usize>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            pattern: DEFAULT_PATTERN.to_string(),
            max_files: None,
        }
    }

    /// 设置匹配模式
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.trim().to_string();
        self
    }

    /// 设置文件数上限
    pub fn max_files(mut self, max_files: Option<usize>) -> Self {
        self.max_files = max_files;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Discovery> {
        if !self.input.exists() {
            return Err(UnifyError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        if !self.input.is_dir() {
            return Err(UnifyError::NotADirectory {
                path: self.input.display().to_string(),
            });
        }

        let glob_pattern =
            glob::Pattern::new(&self.pattern).map_err(|e| UnifyError::InvalidPattern {
                pattern: self.pattern.clone(),
                reason: e.to_string(),
            })?;

        let mut files: Vec<PathBuf> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        let walker = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file()
                        && glob_pattern.matches(&entry.file_name().to_string_lossy())
                    {
                        files.push(entry.into_path());
                    }
                }
                // 悬空链接等：匹配模式的路径交给读取阶段按单文件错误计数
                Err(e) => match e.path().filter(|_| e.depth() > 0) {
                    Some(path) => {
                        let matched = path
                            .file_name()
                            .map(|n| glob_pattern.matches(&n.to_string_lossy()))
                            .unwrap_or(false);
                        if matched {
                            files.push(path.to_path_buf());
                        }
                    }
                    None => warnings.push(e.to_string()),
                },
            }
        }

        if files.is_empty() {
            return Err(UnifyError::NoFilesFound {
                path: self.input.display().to_string(),
                pattern: self.pattern.clone(),
            });
        }

        files.sort();
        let found = files.len();

        if let Some(limit) = self.max_files {
            files.truncate(limit);
        }

        Ok(Discovery {
            files,
            found,
            warnings,
        })
    }
}
