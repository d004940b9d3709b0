//! # chemnet - 化学式元素关系网络工具
//!
//! 读取化学式数据集，把每个化学式分解为元素，构建元素之间的共现关系图，
//! 并输出为交互式网页、图片或数据文件。
//!
//! ## 子命令
//! - `graph` - 构建并输出元素关系图（单文件或目录批量）
//! - `parse` - 解析化学式并显示元素
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (化学式与数据集解析)
//!   │     ├── graph/     (构图、布局、绘图、导出)
//!   │     ├── batch/     (批量并行处理)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod graph;
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

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
