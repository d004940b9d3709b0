//! # 进度条工具
//!
//! 封装 `indicatif`：批量处理用计数进度条，单文件的各阶段用 spinner。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 与 `commands/graph.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 批量处理进度条，每个数据集前进一格
pub fn create_batch_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} datasets ({eta}) {msg}",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    pb
}

/// 阶段 spinner（读取、布局、渲染等耗时不确定的步骤）
pub fn create_stage_spinner(stage: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {elapsed_precise} {msg}")
            .unwrap()
            .tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"]),
    );
    pb.set_message(stage.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
