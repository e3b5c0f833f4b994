//! # 命令执行模块
//!
//! 实现合并流程的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `dataset/`, `models/`, `utils/`
//! - 子模块: unify

pub mod unify;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let config = unify::UnifyConfig::from(cli);
    unify::execute(&config)?;
    Ok(())
}
