//! # 化合物数据模型
//!
//! 以化学式字符串为标识，记录化合物所含的不同元素集合。
//!
//! ## 依赖关系
//! - 被 `parsers/dataset.rs` 和 `graph/builder.rs` 使用
//! - 使用 `parsers/formula.rs` 从化学式构造

use crate::parsers::formula;

use std::collections::BTreeSet;

/// 化合物
///
/// 元素集合使用 `BTreeSet`，重复元素在构造时即被去除，
/// 计数信息不会保留。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    id: String,
    elements: BTreeSet<String>,
}

impl Compound {
    pub fn new(id: impl Into<String>, elements: BTreeSet<String>) -> Self {
        Compound {
            id: id.into(),
            elements,
        }
    }

    /// 从化学式构造，化学式本身作为标识
    pub fn from_formula(formula: &str) -> Self {
        Compound::new(formula, formula::parse_formula(formula))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// 元素集合（已排序、无重复）
    pub fn elements(&self) -> &BTreeSet<String> {
        &self.elements
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_from_formula() {
        let compound = Compound::from_formula("Na2SO4");
        assert_eq!(compound.id(), "Na2SO4");
        assert_eq!(compound.element_count(), 3);
        let elements: Vec<&str> = compound.elements().iter().map(String::as_str).collect();
        assert_eq!(elements, vec!["Na", "O", "S"]);
    }

    #[test]
    fn test_compound_discards_multiplicity() {
        let a = Compound::from_formula("H2O");
        let b = Compound::from_formula("HO");
        assert_eq!(a.elements(), b.elements());
        assert_ne!(a, b);
    }
}
