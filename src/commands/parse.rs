//! # parse 子命令实现
//!
//! 逐个解析命令行给出的化学式，以表格显示记号、计数与元素集合。
//!
//! ## 依赖关系
//! - 使用 `cli/parse.rs` 定义的参数
//! - 使用 `parsers/formula.rs`
//! - `--pairs` 时使用 `graph/builder.rs`

use crate::cli::parse::ParseArgs;
use crate::error::Result;
use crate::graph::builder::build_cooccurrence_from_map;
use crate::models::CooccurrenceGraph;
use crate::parsers::{canonical_formula, parse_formula, parse_tokens, FormulaToken};
use crate::utils::output;

use std::collections::{BTreeMap, BTreeSet};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct FormulaRow {
    #[tabled(rename = "Formula")]
    formula: String,
    #[tabled(rename = "Tokens")]
    tokens: String,
    #[tabled(rename = "Elements")]
    elements: String,
    #[tabled(rename = "Canonical")]
    canonical: String,
}

#[derive(Tabled)]
struct PairRow {
    #[tabled(rename = "Element A")]
    a: String,
    #[tabled(rename = "Element B")]
    b: String,
    #[tabled(rename = "Formulas")]
    weight: u32,
}

/// 执行 parse 命令
pub fn execute(args: ParseArgs) -> Result<()> {
    output::print_header("Formula Parsing");

    let rows: Vec<FormulaRow> = args
        .formulas
        .iter()
        .map(|formula| formula_row(formula, args.canonical))
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);

    let empty = rows.iter().filter(|r| r.elements.is_empty()).count();
    if empty > 0 {
        output::print_warning(&format!(
            "{} formula(s) contained no element symbols",
            empty
        ));
    }

    if args.pairs {
        print_pairs(&args.formulas);
    }

    Ok(())
}

/// 把输入的化学式视为一个小数据集，列出元素共现对
fn print_pairs(formulas: &[String]) {
    let graph = build_cooccurrence_from_map(&element_sets(formulas));
    let rows = pair_rows(&graph);

    println!();
    output::print_header("Element Pairs");
    if rows.is_empty() {
        output::print_info("No element pairs found");
    } else {
        println!("{}", Table::new(&rows));
    }
}

fn element_sets(formulas: &[String]) -> BTreeMap<String, BTreeSet<String>> {
    formulas
        .iter()
        .map(|f| (f.clone(), parse_formula(f)))
        .collect()
}

fn pair_rows(graph: &CooccurrenceGraph) -> Vec<PairRow> {
    graph
        .strongest_pairs()
        .into_iter()
        .map(|(a, b, weight)| PairRow {
            a: a.to_string(),
            b: b.to_string(),
            weight,
        })
        .collect()
}

fn format_tokens(tokens: &[FormulaToken]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}×{}", t.symbol, t.count))
        .collect::<Vec<_>>()
        .join(" ")
}

fn formula_row(formula: &str, canonical: bool) -> FormulaRow {
    let elements = parse_formula(formula);
    FormulaRow {
        formula: formula.to_string(),
        tokens: format_tokens(&parse_tokens(formula)),
        elements: elements.iter().cloned().collect::<Vec<_>>().join(", "),
        canonical: if canonical {
            canonical_formula(&elements)
        } else {
            String::from("-")
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_row() {
        let row = formula_row("Na2SO4", true);
        assert_eq!(row.tokens, "Na×2 S×1 O×4");
        assert_eq!(row.elements, "Na, O, S");
        assert_eq!(row.canonical, "NaOS");

        let row = formula_row("??", false);
        assert!(row.tokens.is_empty());
        assert!(row.elements.is_empty());
        assert_eq!(row.canonical, "-");
    }

    #[test]
    fn test_pair_rows_collapse_repeated_formulas() {
        let formulas: Vec<String> = ["H2O", "H2O", "H2O2", "NaCl"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let sets = element_sets(&formulas);
        assert_eq!(sets.len(), 3);

        let graph = build_cooccurrence_from_map(&sets);
        let rows = pair_rows(&graph);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].a.as_str(), rows[0].b.as_str(), rows[0].weight), ("H", "O", 2));
        assert_eq!((rows[1].a.as_str(), rows[1].b.as_str(), rows[1].weight), ("Cl", "Na", 1));
    }
}
