//! # 解析器模块
//!
//! 提供化学式解析与化合物数据集读取。
//!
//! ## 依赖关系
//! - 被 `models/` 和 `commands/` 模块使用
//! - 子模块: formula, dataset

pub mod dataset;
pub mod formula;

pub use dataset::{read_dataset, Dataset, DatasetOptions};
pub use formula::{canonical_formula, parse_formula, parse_tokens, FormulaToken};
