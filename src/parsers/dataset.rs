//! # 化合物数据集读取
//!
//! 从 CSV 文件读取化学式列，构造化合物列表。
//!
//! ## 数据格式
//! ```text
//! calc_id,reduced_formula,count
//! mp-1,NaCl,4
//! mp-2,H2O,1
//! ```
//!
//! - 默认第一行为表头，化学式位于第 1 列（从 0 计）
//! - 最多读取 `max_records` 行数据（重复化学式同样计数）
//! - 相同化学式只保留一个化合物，保持首次出现的顺序
//! - 缺少该列或化学式为空的行被跳过
//!
//! ## 依赖关系
//! - 被 `commands/graph.rs` 调用
//! - 使用 `models/compound.rs`
//! - 使用 `csv` 库读取

use crate::error::{ChemnetError, Result};
use crate::models::Compound;

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 默认最大读取行数
pub const DEFAULT_MAX_RECORDS: usize = 1000;

/// 默认化学式所在列
pub const DEFAULT_FORMULA_COLUMN: usize = 1;

/// 数据集读取选项
#[derive(Debug, Clone)]
pub struct DatasetOptions {
    /// 最多读取的数据行数
    pub max_records: usize,
    /// 化学式所在列（从 0 计）
    pub formula_column: usize,
    /// 第一行是否为表头
    pub has_headers: bool,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            max_records: DEFAULT_MAX_RECORDS,
            formula_column: DEFAULT_FORMULA_COLUMN,
            has_headers: true,
        }
    }
}

/// 读取得到的数据集
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// 数据集名称（文件名主干）
    pub name: String,
    /// 去重后的化合物列表
    pub compounds: Vec<Compound>,
    /// 读取的数据行数
    pub records_read: usize,
    /// 被跳过的行数
    pub skipped: usize,
}

impl Dataset {
    /// 重复化学式的行数
    pub fn duplicates(&self) -> usize {
        self.records_read - self.skipped - self.compounds.len()
    }
}

/// 读取数据集文件
pub fn read_dataset(path: &Path, options: &DatasetOptions) -> Result<Dataset> {
    let file = File::open(path).map_err(|e| ChemnetError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");

    read_dataset_from_reader(file, name, options).map_err(|e| match e {
        ChemnetError::CsvError(err) => ChemnetError::DatasetError {
            path: path.display().to_string(),
            reason: err.to_string(),
        },
        other => other,
    })
}

/// 从任意输入流读取数据集
pub fn read_dataset_from_reader<R: Read>(
    reader: R,
    name: &str,
    options: &DatasetOptions,
) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut dataset = Dataset {
        name: name.to_string(),
        ..Default::default()
    };
    let mut seen: HashSet<String> = HashSet::new();

    for record in rdr.records() {
        if dataset.records_read >= options.max_records {
            break;
        }
        let record = record?;
        dataset.records_read += 1;

        let formula = match record.get(options.formula_column) {
            Some(f) if !f.is_empty() => f,
            _ => {
                dataset.skipped += 1;
                continue;
            }
        };

        if seen.insert(formula.to_string()) {
            dataset.compounds.push(Compound::from_formula(formula));
        }
    }

    Ok(dataset)
}
