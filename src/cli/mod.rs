//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `graph`: 从化学式数据集构建元素关系图并输出
//! - `parse`: 解析化学式并显示元素
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: graph, parse

pub mod graph;
pub mod parse;

use clap::{Parser, Subcommand};

/// chemnet - 化学式元素关系网络工具
#[derive(Parser)]
#[command(name = "chemnet")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Element co-occurrence networks from chemical formula datasets", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Build an element relationship graph from a formula dataset (CSV)
    Graph(graph::GraphArgs),

    /// Parse chemical formulas and list their elements
    Parse(parse::ParseArgs),
}
