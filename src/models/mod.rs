//! # 数据模型模块
//!
//! 定义化合物记录与关系图数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `graph/` 和 `commands/` 使用
//! - 子模块: compound, graph

pub mod compound;
pub mod graph;

pub use compound::Compound;
pub use graph::{BipartiteGraph, CooccurrenceGraph, GraphData, Node, NodeKind};
