//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `graph/`, `batch/`, `utils/`
//! - 子模块: graph, parse

pub mod graph;
pub mod parse;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Graph(args) => graph::execute(args),
        Commands::Parse(args) => parse::execute(args),
    }
}
