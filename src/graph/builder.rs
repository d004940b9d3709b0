//! # 关系图构建
//!
//! 由化合物列表一次性构建关系图，纯函数，无 I/O。
//!
//! ## 算法（元素共现图）
//! 1. 从空图开始
//! 2. 对每个化合物，枚举其元素集合的所有二元组合（不含自身配对）
//!    - 边不存在则以权重 1 创建，否则权重加一
//! 3. 所有出现过的元素都登记为节点，单元素化合物贡献一个孤立节点
//!
//! 权重累加满足交换律与结合律，结果与化合物的处理顺序无关。
//!
//! ## 依赖关系
//! - 被 `commands/graph.rs` 调用
//! - 使用 `models/` 的 Compound 与图结构

use crate::models::{BipartiteGraph, Compound, CooccurrenceGraph, Node};

use std::collections::{BTreeMap, BTreeSet};

/// 构建元素共现图
pub fn build_cooccurrence<'a, I>(compounds: I) -> CooccurrenceGraph
where
    I: IntoIterator<Item = &'a Compound>,
{
    let mut graph = CooccurrenceGraph::new();
    for compound in compounds {
        add_element_set(&mut graph, compound.elements());
    }
    graph
}

/// 由 "化合物标识 -> 元素集合" 映射构建元素共现图
pub fn build_cooccurrence_from_map(
    compounds: &BTreeMap<String, BTreeSet<String>>,
) -> CooccurrenceGraph {
    let mut graph = CooccurrenceGraph::new();
    for elements in compounds.values() {
        add_element_set(&mut graph, elements);
    }
    graph
}

fn add_element_set(graph: &mut CooccurrenceGraph, elements: &BTreeSet<String>) {
    let elements: Vec<&str> = elements.iter().map(String::as_str).collect();

    for (i, a) in elements.iter().enumerate() {
        graph.add_node(a);
        for b in &elements[i + 1..] {
            graph.increment_pair(a, b);
        }
    }
}

/// 构建化合物-元素二部图
pub fn build_bipartite<'a, I>(compounds: I) -> BipartiteGraph
where
    I: IntoIterator<Item = &'a Compound>,
{
    let mut graph = BipartiteGraph::new();
    for compound in compounds {
        graph.add_node(Node::Compound(compound.id().to_string()));
        for element in compound.elements() {
            graph.add_node(Node::Element(element.clone()));
            graph.add_membership(compound.id(), element);
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(id: &str, elements: &[&str]) -> Compound {
        Compound::new(id, elements.iter().map(|s| s.to_string()).collect())
    }

    fn weights(graph: &CooccurrenceGraph) -> Vec<(String, String, u32)> {
        graph
            .edges()
            .map(|(a, b, w)| (a.to_string(), b.to_string(), w))
            .collect()
    }

    /// 由元素池的全部非空子集构成的化合物族
    fn subset_family(pool: &[&str]) -> Vec<Compound> {
        (1u32..(1 << pool.len()))
            .map(|mask| {
                let elements: Vec<&str> = pool
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, el)| *el)
                    .collect();
                compound(&format!("c{}", mask), &elements)
            })
            .collect()
    }

    #[test]
    fn test_reference_example() {
        let compounds = vec![
            compound("A", &["H", "O"]),
            compound("B", &["H", "O"]),
            compound("C", &["H", "N"]),
        ];
        let graph = build_cooccurrence(&compounds);

        assert_eq!(graph.weight("H", "O"), Some(2));
        assert_eq!(graph.weight("H", "N"), Some(1));
        assert_eq!(graph.weight("O", "N"), None);

        let nodes: Vec<&str> = graph.nodes().collect();
        assert_eq!(nodes, vec!["H", "N", "O"]);
    }

    #[test]
    fn test_from_map_matches_slice() {
        let mut map = BTreeMap::new();
        map.insert("A".to_string(), compound("A", &["H", "O"]).elements().clone());
        map.insert("B".to_string(), compound("B", &["H", "O"]).elements().clone());
        map.insert("C".to_string(), compound("C", &["H", "N"]).elements().clone());

        let from_map = build_cooccurrence_from_map(&map);
        let from_slice = build_cooccurrence(&[
            compound("A", &["H", "O"]),
            compound("B", &["H", "O"]),
            compound("C", &["H", "N"]),
        ]);
        assert_eq!(from_map, from_slice);
    }

    #[test]
    fn test_weights_match_recount() {
        let mut compounds = subset_family(&["H", "C", "N", "O", "S"]);
        compounds.extend(subset_family(&["Na", "Cl", "O"]));
        let graph = build_cooccurrence(&compounds);

        for (a, b, w) in graph.edges() {
            let expected = compounds
                .iter()
                .filter(|c| c.elements().contains(a) && c.elements().contains(b))
                .count() as u32;
            assert_eq!(w, expected, "pair ({a}, {b})");
        }

        // 反向检查：任意共现的元素对都有边
        for c in &compounds {
            for a in c.elements() {
                for b in c.elements() {
                    if a != b {
                        assert!(graph.weight(a, b).is_some());
                    }
                }
            }
        }

        // 5 元素子集族中，任一对元素共同出现在 2^3 个子集里
        assert_eq!(graph.weight("H", "C"), Some(8));
        // O 同时属于两个族
        assert_eq!(graph.weight("Na", "O"), Some(2));
    }

    #[test]
    fn test_order_independence() {
        let compounds = subset_family(&["Fe", "O", "Si", "Mg"]);
        let reference = weights(&build_cooccurrence(&compounds));

        let reversed: Vec<&Compound> = compounds.iter().rev().collect();
        assert_eq!(weights(&build_cooccurrence(reversed)), reference);

        for shift in 1..compounds.len() {
            let rotated: Vec<&Compound> = compounds
                .iter()
                .cycle()
                .skip(shift)
                .take(compounds.len())
                .collect();
            assert_eq!(weights(&build_cooccurrence(rotated)), reference);
        }

        let even = compounds.iter().step_by(2);
        let odd = compounds.iter().skip(1).step_by(2);
        assert_eq!(weights(&build_cooccurrence(odd.chain(even))), reference);
    }

    #[test]
    fn test_single_element_compound_is_isolated() {
        let compounds = vec![compound("He", &["He"]), compound("H2O", &["H", "O"])];
        let graph = build_cooccurrence(&compounds);

        assert!(graph.contains_node("He"));
        assert_eq!(graph.degree("He"), 0);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_no_self_loops() {
        let mut compounds = subset_family(&["A", "B", "C"]);
        compounds.push(Compound::from_formula("O2"));
        compounds.push(Compound::from_formula("H2O2"));
        let graph = build_cooccurrence(&compounds);

        for (a, b, _) in graph.edges() {
            assert_ne!(a, b);
        }
        assert_eq!(graph.weight("O", "O"), None);
    }

    #[test]
    fn test_empty_input() {
        let none: Vec<Compound> = Vec::new();
        let graph = build_cooccurrence(&none);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);

        let compounds = vec![Compound::from_formula("")];
        let graph = build_cooccurrence(&compounds);
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_bipartite() {
        let compounds = vec![
            Compound::from_formula("H2O"),
            Compound::from_formula("NaCl"),
            Compound::from_formula("O"),
        ];
        let graph = build_bipartite(&compounds);

        assert_eq!(graph.compound_count(), 3);
        assert_eq!(graph.element_count(), 4);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.degree(&Node::Element("O".to_string())), 2);
        assert_eq!(graph.degree(&Node::Compound("NaCl".to_string())), 2);
        assert_eq!(graph.degree(&Node::Compound("O".to_string())), 1);
    }
}
