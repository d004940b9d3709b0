//! # parse 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/parse.rs`

use clap::Args;

/// parse 子命令参数
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Chemical formulas to parse (e.g., H2O Na2SO4)
    #[arg(required = true)]
    pub formulas: Vec<String>,

    /// Also show the canonical formula (each element once, sorted)
    #[arg(long, default_value_t = false)]
    pub canonical: bool,

    /// Also list element pairs co-occurring across the given formulas
    #[arg(long, default_value_t = false)]
    pub pairs: bool,
}
