//! # 化学式解析器
//!
//! 从化学式字符串中提取元素符号。
//!
//! ## 语法
//! ```text
//! Formula  := (Element Count?)+
//! Element  := [A-Z][a-z]?
//! Count    := [0-9]*
//! ```
//!
//! 解析是尽力而为的：不符合语法的字符（小写开头、标点、空白等）直接跳过，
//! 永远不会返回错误。计数只影响元素"重复几次"，不影响是否出现，
//! 因此计数为 0 的元素同样会出现在结果中。
//!
//! ## 依赖关系
//! - 被 `models/compound.rs`, `parsers/dataset.rs` 和 `commands/parse.rs` 使用
//! - 使用 `regex` 匹配元素记号

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-z]?)(\d*)").expect("valid element token regex"));

/// 化学式中的一个元素记号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaToken {
    /// 元素符号
    pub symbol: String,
    /// 原子数（省略时为 1，溢出时取 `u32::MAX`）
    pub count: u32,
}

/// 按出现顺序返回所有元素记号及其计数
pub fn parse_tokens(formula: &str) -> Vec<FormulaToken> {
    TOKEN_RE
        .captures_iter(formula)
        .map(|caps| {
            let symbol = caps[1].to_string();
            let digits = &caps[2];
            let count = if digits.is_empty() {
                1
            } else {
                digits.parse().unwrap_or(u32::MAX)
            };
            FormulaToken { symbol, count }
        })
        .collect()
}

/// 解析化学式，返回不同元素符号的集合（已排序）
pub fn parse_formula(formula: &str) -> BTreeSet<String> {
    parse_tokens(formula)
        .into_iter()
        .map(|token| token.symbol)
        .collect()
}

/// 由元素集合重建规范化学式：每个元素符号按排序各出现一次
pub fn canonical_formula<'a, I>(elements: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let sorted: BTreeSet<&str> = elements.into_iter().map(String::as_str).collect();
    sorted.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_water() {
        assert_eq!(parse_formula("H2O"), set(&["H", "O"]));
    }

    #[test]
    fn test_parse_sodium_sulfate() {
        assert_eq!(parse_formula("Na2SO4"), set(&["Na", "S", "O"]));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_formula("").is_empty());
        assert!(parse_tokens("").is_empty());
    }

    #[test]
    fn test_parse_non_matching_input() {
        assert!(parse_formula("xyz 123 !?").is_empty());
    }

    #[test]
    fn test_parse_skips_garbage() {
        // 小写开头与标点被跳过，合法记号仍被提取
        assert_eq!(parse_formula("abc-Fe2,O3;"), set(&["Fe", "O"]));
        assert_eq!(parse_formula("(NH4)2SO4"), set(&["N", "H", "S", "O"]));
    }

    #[test]
    fn test_zero_count_still_present() {
        assert_eq!(parse_formula("C0H4"), set(&["C", "H"]));
        let tokens = parse_tokens("C0H4");
        assert_eq!(tokens[0].count, 0);
        assert_eq!(tokens[1].count, 4);
    }

    #[test]
    fn test_token_counts() {
        let tokens = parse_tokens("Ca3(PO4)2");
        let pairs: Vec<(&str, u32)> = tokens.iter().map(|t| (t.symbol.as_str(), t.count)).collect();
        assert_eq!(pairs, vec![("Ca", 3), ("P", 1), ("O", 4)]);
    }

    #[test]
    fn test_huge_count_saturates() {
        let tokens = parse_tokens("H99999999999999999999");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].count, u32::MAX);
    }

    #[test]
    fn test_two_letter_symbol_takes_one_lowercase() {
        // "Abc" -> "Ab"，随后的 "c" 被跳过
        assert_eq!(parse_formula("Abc"), set(&["Ab"]));
        assert_eq!(parse_formula("CO"), set(&["C", "O"]));
        assert_eq!(parse_formula("Co"), set(&["Co"]));
    }

    #[test]
    fn test_canonical_reparse_is_idempotent() {
        for formula in ["H2O", "Na2SO4", "C6H12O6", "LiFePO4", "", "Xe", "K4[Fe(CN)6]"] {
            let elements = parse_formula(formula);
            let canonical = canonical_formula(&elements);
            assert_eq!(parse_formula(&canonical), elements, "formula {formula}");
        }
    }

    #[test]
    fn test_canonical_formula_sorted() {
        let elements = parse_formula("Na2SO4");
        assert_eq!(canonical_formula(&elements), "NaOS");
    }
}
