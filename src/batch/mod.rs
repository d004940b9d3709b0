//! # 批量处理模块
//!
//! 输入为目录时，对其中每个数据集分别构建并输出关系图。
//!
//! ## 功能
//! - 收集匹配的数据集文件
//! - 并行处理
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/graph.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::DatasetCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
