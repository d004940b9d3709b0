//! # 批量执行器
//!
//! 并行处理多个数据集，每个数据集独立构图、独立输出。
//!
//! ## 功能
//! - 基于 rayon 线程池的并行迭代
//! - 进度条显示
//! - 失败不中断，汇总到 `BatchResult`
//!
//! ## 依赖关系
//! - 被 `commands/graph.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 与 `num_cpus`

use crate::error::{ChemnetError, Result};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;

/// 单个数据集的处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 已写出关系图
    Written {
        output: PathBuf,
        nodes: usize,
        edges: usize,
    },
    /// 跳过，附带原因（如输出已存在）
    Skipped(String),
    /// 处理失败 (文件路径, 错误信息)
    Failed(String, String),
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
    /// 所有成功数据集的节点总数
    pub total_nodes: usize,
    /// 所有成功数据集的边总数
    pub total_edges: usize,
    /// 写出的文件（与输入顺序一致）
    pub outputs: Vec<PathBuf>,
    /// 跳过原因
    pub skips: Vec<String>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Written {
                output,
                nodes,
                edges,
            } => {
                self.success += 1;
                self.total_nodes += nodes;
                self.total_edges += edges;
                self.outputs.push(output);
            }
            ProcessResult::Skipped(reason) => {
                self.skipped += 1;
                self.skips.push(reason);
            }
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// `jobs` 为 0 时使用全部 CPU 核心
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理数据集列表，结果顺序与输入一致
    pub fn run<F>(&self, files: Vec<PathBuf>, processor: F) -> Result<BatchResult>
    where
        F: Fn(&PathBuf) -> ProcessResult + Sync + Send,
    {
        let pb = progress::create_batch_bar(files.len() as u64);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| ChemnetError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<ProcessResult> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let result = processor(file);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_counts() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Written {
            output: PathBuf::from("a.html"),
            nodes: 3,
            edges: 2,
        });
        result.merge(ProcessResult::Skipped("exists".to_string()));
        result.merge(ProcessResult::Failed("b.csv".to_string(), "bad".to_string()));

        assert_eq!(result.success, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total(), 3);
        assert_eq!(result.total_nodes, 3);
        assert_eq!(result.outputs, vec![PathBuf::from("a.html")]);
        assert_eq!(result.skips, vec!["exists".to_string()]);
        assert_eq!(result.failures[0].0, "b.csv");
    }

    #[test]
    fn test_run_collects_every_file() {
        let runner = BatchRunner::new(2);
        assert_eq!(runner.jobs(), 2);

        let files: Vec<PathBuf> = (0..5).map(|i| PathBuf::from(format!("{}.csv", i))).collect();
        let result = runner
            .run(files, |path| {
                if path.to_str() == Some("3.csv") {
                    ProcessResult::Failed("3.csv".to_string(), "boom".to_string())
                } else {
                    ProcessResult::Written {
                        output: path.with_extension("html"),
                        nodes: 2,
                        edges: 1,
                    }
                }
            })
            .unwrap();

        assert_eq!(result.success, 4);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total_edges, 4);
        assert_eq!(result.outputs.len(), 4);
        assert_eq!(result.outputs[0], PathBuf::from("0.html"));
        assert_eq!(result.outputs[3], PathBuf::from("4.html"));
    }

    #[test]
    fn test_zero_jobs_uses_cpus() {
        assert!(BatchRunner::new(0).jobs() >= 1);
    }
}
