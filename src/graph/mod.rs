//! # 关系图模块
//!
//! 构建元素共现图，并提供布局、绘图与导出。
//!
//! ## 子模块
//! - `builder`: 由化合物列表构建关系图（纯计算，无 I/O）
//! - `layout`: 力导向布局
//! - `plot`: PNG/SVG 图表生成
//! - `export`: CSV/JSON/HTML 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/graph.rs` 使用
//! - 使用 `models/`

pub mod builder;
pub mod export;
pub mod layout;
pub mod plot;

pub use builder::{build_bipartite, build_cooccurrence};
pub use layout::LayoutOptions;
pub use plot::PlotOptions;
