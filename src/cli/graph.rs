//! # graph 子命令 CLI 定义
//!
//! 从化学式数据集构建关系图，输出为交互式网页、图片或数据文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/graph.rs`

use crate::batch::collector::DEFAULT_PATTERN;
use crate::parsers::dataset::{DEFAULT_FORMULA_COLUMN, DEFAULT_MAX_RECORDS};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 关系图类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum GraphMode {
    /// Elements only; edge weight = number of shared compounds
    #[default]
    Cooccurrence,
    /// Compounds and elements; each compound linked to its elements
    Bipartite,
}

impl GraphMode {
    /// 默认标题
    pub fn default_title(&self) -> &'static str {
        match self {
            GraphMode::Cooccurrence => "Element Co-occurrence in Compounds",
            GraphMode::Bipartite => "Chemical Relationships",
        }
    }
}

impl std::fmt::Display for GraphMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphMode::Cooccurrence => write!(f, "cooccurrence"),
            GraphMode::Bipartite => write!(f, "bipartite"),
        }
    }
}

/// 关系图输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum GraphOutputFormat {
    /// Interactive HTML page (vis-network)
    Html,
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV edge list (plus <stem>_nodes.csv)
    Csv,
    /// JSON nodes and edges
    Json,
}

impl GraphOutputFormat {
    /// 文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            GraphOutputFormat::Html => "html",
            GraphOutputFormat::Png => "png",
            GraphOutputFormat::Svg => "svg",
            GraphOutputFormat::Csv => "csv",
            GraphOutputFormat::Json => "json",
        }
    }
}

/// graph 子命令参数
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Input: formula dataset (CSV) or directory containing datasets
    pub input: PathBuf,

    /// Output: file path (single mode) or directory (batch mode)
    #[arg(short, long, default_value = "chemicals_network.html")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<GraphOutputFormat>,

    /// Graph type
    #[arg(long, value_enum, default_value_t = GraphMode::Cooccurrence)]
    pub mode: GraphMode,

    /// Maximum number of data rows read from each dataset
    #[arg(short = 'n', long, env = "CHEMNET_MAX_RECORDS", default_value_t = DEFAULT_MAX_RECORDS)]
    pub max_records: usize,

    /// Zero-based index of the formula column
    #[arg(long, env = "CHEMNET_FORMULA_COLUMN", default_value_t = DEFAULT_FORMULA_COLUMN)]
    pub column: usize,

    /// Treat the first row as data instead of a header
    #[arg(long, default_value_t = false)]
    pub no_header: bool,

    /// Number of strongest element pairs to print (single mode)
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot or page (default depends on --mode)
    #[arg(long)]
    pub title: Option<String>,

    /// Spring layout iterations (PNG/SVG)
    #[arg(long, default_value_t = 200)]
    pub iterations: usize,

    /// Spring layout seed (PNG/SVG)
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for dataset files (batch mode, comma separated)
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite existing output files (batch mode)
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
