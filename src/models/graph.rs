//! # 关系图数据模型
//!
//! 定义元素共现图、化合物-元素二部图，以及供渲染层使用的纯数据视图。
//!
//! ## 图类型
//! - `CooccurrenceGraph`: 节点为元素，边权为同时包含两元素的化合物数
//! - `BipartiteGraph`: 节点为化合物或元素（`Node` 标签区分），边表示"包含"
//! - `GraphData`: 节点/边列表形式的只读快照，布局、绘图与导出都只依赖它
//!
//! ## 依赖关系
//! - 被 `graph/` 模块使用
//! - 无外部模块依赖

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

// ─────────────────────────────────────────────────────────────
// 元素共现图
// ─────────────────────────────────────────────────────────────

/// 元素共现加权无向图
///
/// 边以有序二元组 `(min, max)` 为键存储，因此 `(a, b)` 与 `(b, a)` 是同一条边。
/// 只能通过 `graph::builder` 构建，构建后不再修改。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CooccurrenceGraph {
    nodes: BTreeSet<String>,
    edges: BTreeMap<(String, String), u32>,
}

impl CooccurrenceGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_node(&mut self, element: &str) {
        if !self.contains_node(element) {
            self.nodes.insert(element.to_string());
        }
    }

    /// 为一对不同元素的边权加一，边不存在时以 1 创建
    pub(crate) fn increment_pair(&mut self, a: &str, b: &str) {
        debug_assert_ne!(a, b, "self-loop on {a}");
        let key = Self::edge_key(a, b);
        *self.edges.entry(key).or_insert(0) += 1;
    }

    fn edge_key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    /// 所有节点（按元素符号排序）
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// 所有边 `(a, b, weight)`，其中 `a < b`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.edges
            .iter()
            .map(|((a, b), w)| (a.as_str(), b.as_str(), *w))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, element: &str) -> bool {
        self.nodes.contains(element)
    }

    /// 边权（对称），无边时返回 `None`
    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        self.edges.get(&Self::edge_key(a, b)).copied()
    }

    /// 相邻元素（排序）
    pub fn neighbors<'a>(&'a self, element: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges.keys().filter_map(move |(a, b)| {
            if a == element {
                Some(b.as_str())
            } else if b == element {
                Some(a.as_str())
            } else {
                None
            }
        })
    }

    /// 度：不同相邻元素的个数
    pub fn degree(&self, element: &str) -> usize {
        self.neighbors(element).count()
    }

    /// 强度：所有关联边的权重之和
    pub fn strength(&self, element: &str) -> u32 {
        self.neighbors(element)
            .filter_map(|other| self.weight(element, other))
            .sum()
    }

    /// 按权重降序排列的边（权重相同时按元素符号排序）
    pub fn strongest_pairs(&self) -> Vec<(&str, &str, u32)> {
        let mut pairs: Vec<_> = self.edges().collect();
        pairs.sort_by(|x, y| y.2.cmp(&x.2).then_with(|| (x.0, x.1).cmp(&(y.0, y.1))));
        pairs
    }

    /// 转换为纯数据视图
    pub fn to_data(&self) -> GraphData {
        let nodes = self
            .nodes()
            .map(|el| NodeData {
                id: el.to_string(),
                label: el.to_string(),
                kind: NodeKind::Element,
                degree: self.degree(el),
                strength: self.strength(el),
            })
            .collect();

        let edges = self
            .edges()
            .map(|(a, b, w)| EdgeData {
                source: a.to_string(),
                target: b.to_string(),
                weight: w,
            })
            .collect();

        GraphData { nodes, edges }
    }
}

// ─────────────────────────────────────────────────────────────
// 化合物-元素二部图
// ─────────────────────────────────────────────────────────────

/// 二部图节点
///
/// 化合物与元素共用同一节点空间，但标签不同，
/// 即使化学式 "O" 与元素 "O" 同名也不会合并。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    Element(String),
    Compound(String),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Element(s) | Node::Compound(s) => s,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Element(_) => NodeKind::Element,
            Node::Compound(_) => NodeKind::Compound,
        }
    }

    /// 全图唯一的节点标识
    pub fn key(&self) -> String {
        match self {
            Node::Element(s) => format!("element:{}", s),
            Node::Compound(s) => format!("compound:{}", s),
        }
    }
}

/// 化合物-元素二部图，每条边连接一个化合物与它包含的一个元素
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BipartiteGraph {
    nodes: BTreeSet<Node>,
    /// (化合物标识, 元素符号)
    memberships: BTreeSet<(String, String)>,
}

impl BipartiteGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_node(&mut self, node: Node) {
        self.nodes.insert(node);
    }

    pub(crate) fn add_membership(&mut self, compound: &str, element: &str) {
        self.memberships
            .insert((compound.to_string(), element.to_string()));
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// 所有边 `(化合物, 元素)`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.memberships
            .iter()
            .map(|(c, e)| (c.as_str(), e.as_str()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.memberships.len()
    }

    pub fn compound_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Compound(_)))
            .count()
    }

    pub fn element_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Element(_)))
            .count()
    }

    pub fn degree(&self, node: &Node) -> usize {
        match node {
            Node::Compound(id) => self.memberships.iter().filter(|(c, _)| c == id).count(),
            Node::Element(sym) => self.memberships.iter().filter(|(_, e)| e == sym).count(),
        }
    }

    /// 转换为纯数据视图
    pub fn to_data(&self) -> GraphData {
        let nodes = self
            .nodes()
            .map(|node| {
                let degree = self.degree(node);
                NodeData {
                    id: node.key(),
                    label: node.name().to_string(),
                    kind: node.kind(),
                    degree,
                    strength: degree as u32,
                }
            })
            .collect();

        let edges = self
            .edges()
            .map(|(c, e)| EdgeData {
                source: Node::Compound(c.to_string()).key(),
                target: Node::Element(e.to_string()).key(),
                weight: 1,
            })
            .collect();

        GraphData { nodes, edges }
    }
}

// ─────────────────────────────────────────────────────────────
// 纯数据视图
// ─────────────────────────────────────────────────────────────

/// 节点类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Element,
    Compound,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Element => write!(f, "element"),
            NodeKind::Compound => write!(f, "compound"),
        }
    }
}

/// 节点数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeData {
    /// 唯一标识
    pub id: String,
    /// 显示标签
    pub label: String,
    pub kind: NodeKind,
    /// 相邻节点数
    pub degree: usize,
    /// 关联边权重之和
    pub strength: u32,
}

/// 边数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeData {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// 图的纯数据快照（节点列表 + 边列表）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphData {
    pub nodes: Vec<NodeData>,
    pub edges: Vec<EdgeData>,
}

impl GraphData {
    /// 节点标识到下标的映射
    pub fn index(&self) -> BTreeMap<&str, usize> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.as_str(), i))
            .collect()
    }

    pub fn max_weight(&self) -> u32 {
        self.edges.iter().map(|e| e.weight).max().unwrap_or(0)
    }

    pub fn max_degree(&self) -> usize {
        self.nodes.iter().map(|n| n.degree).max().unwrap_or(0)
    }
}
