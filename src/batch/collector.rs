//! # 数据集收集器
//!
//! 在输入目录中按文件名模式收集待处理的数据集文件。
//!
//! ## 功能
//! - 逗号分隔的多个 glob 模式（默认 `*.csv`）
//! - 可选递归搜索子目录
//! - 结果按路径排序，输出顺序稳定
//!
//! ## 依赖关系
//! - 被 `commands/graph.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 默认数据集文件模式
pub const DEFAULT_PATTERN: &str = "*.csv";

/// 数据集收集器
pub struct DatasetCollector {
    /// 输入目录
    root: PathBuf,
    /// 文件名匹配模式
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
}

impl DatasetCollector {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            patterns: Self::parse_patterns(DEFAULT_PATTERN),
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔），非法或空模式被忽略
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        let patterns = Self::parse_patterns(pattern);
        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    fn parse_patterns(pattern: &str) -> Vec<Pattern> {
        pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| Pattern::new(s).ok())
            .collect()
    }

    /// 收集所有匹配的数据集文件
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.root.is_file() {
            return vec![self.root.clone()];
        }
        if !self.root.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_pattern_matching() {
        let collector = DatasetCollector::new(PathBuf::from(".")).with_pattern("*.csv, data_?.txt");
        assert!(collector.matches(Path::new("formulas.csv")));
        assert!(collector.matches(Path::new("dir/data_1.txt")));
        assert!(!collector.matches(Path::new("data_12.txt")));
        assert!(!collector.matches(Path::new("formulas.tsv")));
    }

    #[test]
    fn test_empty_pattern_keeps_default() {
        let collector = DatasetCollector::new(PathBuf::from(".")).with_pattern(" , ");
        assert!(collector.matches(Path::new("a.csv")));
    }

    #[test]
    fn test_collect_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.csv"), "").unwrap();
        fs::write(dir.path().join("a.csv"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.csv"), "").unwrap();

        let flat = DatasetCollector::new(dir.path().to_path_buf()).collect();
        let names: Vec<_> = flat
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);

        let deep = DatasetCollector::new(dir.path().to_path_buf())
            .recursive(true)
            .collect();
        assert_eq!(deep.len(), 3);
    }
}
