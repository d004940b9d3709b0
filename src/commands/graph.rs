//! # graph 子命令实现
//!
//! 读取化学式数据集，构建元素关系图并输出。
//!
//! ## 功能
//! - 支持单文件和批量目录处理
//! - 并行处理多个数据集（rayon）
//! - 元素共现图 / 化合物-元素二部图
//! - 输出交互式 HTML、PNG/SVG 图片、CSV/JSON 数据
//!
//! ## 依赖关系
//! - 使用 `cli/graph.rs` 定义的 GraphArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `parsers/dataset.rs` 读取数据集
//! - 使用 `graph/` 模块构建与输出

use crate::batch::{BatchResult, BatchRunner, DatasetCollector, ProcessResult};
use crate::cli::graph::{GraphArgs, GraphMode, GraphOutputFormat};
use crate::error::{ChemnetError, Result};
use crate::graph::{self, export, plot, LayoutOptions, PlotOptions};
use crate::models::{BipartiteGraph, Compound, CooccurrenceGraph, GraphData};
use crate::parsers::{self, Dataset, DatasetOptions};
use crate::utils::{output, progress};

use std::fs;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 执行 graph 命令
pub fn execute(args: GraphArgs) -> Result<()> {
    output::print_header("Element Relationship Network");

    if args.width == 0 || args.height == 0 {
        return Err(ChemnetError::InvalidArgument(format!(
            "figure size must be positive, got {}x{}",
            args.width, args.height
        )));
    }

    if args.input.is_file() {
        execute_single_file(&args)
    } else if args.input.is_dir() {
        execute_batch(&args)
    } else {
        Err(ChemnetError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 渲染配置（单文件与批量共用）
struct RenderConfig {
    dataset: DatasetOptions,
    mode: GraphMode,
    title: Option<String>,
    width: u32,
    height: u32,
    layout: LayoutOptions,
}

impl RenderConfig {
    fn from_args(args: &GraphArgs) -> Self {
        Self {
            dataset: DatasetOptions {
                max_records: args.max_records,
                formula_column: args.column,
                has_headers: !args.no_header,
            },
            mode: args.mode,
            title: args.title.clone(),
            width: args.width,
            height: args.height,
            layout: LayoutOptions {
                iterations: args.iterations,
                seed: args.seed,
            },
        }
    }

    fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.mode.default_title().to_string())
    }
}

/// 按模式构建的关系图
enum BuiltGraph {
    Cooccurrence(CooccurrenceGraph),
    Bipartite(BipartiteGraph),
}

impl BuiltGraph {
    fn build(mode: GraphMode, compounds: &[Compound]) -> Self {
        match mode {
            GraphMode::Cooccurrence => BuiltGraph::Cooccurrence(graph::build_cooccurrence(compounds)),
            GraphMode::Bipartite => BuiltGraph::Bipartite(graph::build_bipartite(compounds)),
        }
    }

    fn to_data(&self) -> GraphData {
        match self {
            BuiltGraph::Cooccurrence(g) => g.to_data(),
            BuiltGraph::Bipartite(g) => g.to_data(),
        }
    }

    fn node_count(&self) -> usize {
        match self {
            BuiltGraph::Cooccurrence(g) => g.node_count(),
            BuiltGraph::Bipartite(g) => g.node_count(),
        }
    }

    fn edge_count(&self) -> usize {
        match self {
            BuiltGraph::Cooccurrence(g) => g.edge_count(),
            BuiltGraph::Bipartite(g) => g.edge_count(),
        }
    }
}

/// 单文件模式
fn execute_single_file(args: &GraphArgs) -> Result<()> {
    output::print_info(&format!("Single file mode: '{}'", args.input.display()));

    let config = RenderConfig::from_args(args);
    let format = match args.format {
        Some(f) => f,
        None => guess_format_from_extension(&args.output)?,
    };

    let spinner = progress::create_stage_spinner("Reading dataset");
    let dataset = parsers::read_dataset(&args.input, &config.dataset);
    spinner.finish_and_clear();
    let dataset = dataset?;

    print_dataset_summary(&dataset);
    if dataset.compounds.is_empty() {
        output::print_warning("No formulas found; the graph will be empty");
    }

    let built = BuiltGraph::build(config.mode, &dataset.compounds);
    print_graph_summary(&built);

    let spinner = progress::create_stage_spinner(&format!("Writing {} output", format.extension()));
    let written = write_graph(&built.to_data(), &args.output, format, &config);
    spinner.finish_and_clear();
    written?;

    output::print_written(format.extension(), &args.output);
    if format == GraphOutputFormat::Csv {
        output::print_written("nodes", &export::nodes_csv_path(&args.output));
    }

    if let BuiltGraph::Cooccurrence(ref g) = built {
        print_pair_table(g, args.top_n);
    }

    Ok(())
}

/// 批量处理模式
fn execute_batch(args: &GraphArgs) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let files = DatasetCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        return Err(ChemnetError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info(&format!("Found {} datasets", files.len()));

    fs::create_dir_all(&args.output).map_err(|e| ChemnetError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let format = args.format.unwrap_or(GraphOutputFormat::Html);
    output::print_info(&format!("Graph mode: {}", args.mode));
    output::print_info(&format!("Output format: {:?}", format));

    let config = RenderConfig::from_args(args);
    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Parallel jobs: {}", runner.jobs()));

    let result = runner.run(files, |file| {
        process_batch_file(file, &args.output, format, args.overwrite, &config)
    })?;

    print_batch_report(&result, format);

    Ok(())
}

/// 每类明细最多列出的条目数
const REPORT_LIMIT: usize = 10;

fn print_batch_report(result: &BatchResult, format: GraphOutputFormat) {
    output::print_separator();

    for path in result.outputs.iter().take(REPORT_LIMIT) {
        output::print_written(format.extension(), path);
    }
    print_remaining(result.outputs.len());

    for reason in result.skips.iter().take(REPORT_LIMIT) {
        output::print_skip(reason);
    }
    print_remaining(result.skips.len());

    output::print_success(&format!(
        "Batch complete: {} datasets, {} success, {} skipped, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));
    output::print_stat("Nodes (all graphs)", result.total_nodes);
    output::print_stat("Edges (all graphs)", result.total_edges);

    if !result.failures.is_empty() {
        output::print_warning("Failed datasets:");
        for (path, err) in result.failures.iter().take(REPORT_LIMIT) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        print_remaining(result.failures.len());
    }
}

fn print_remaining(len: usize) {
    if len > REPORT_LIMIT {
        output::print_info(&format!("  ... and {} more", len - REPORT_LIMIT));
    }
}

/// 批量模式中单个数据集的输出路径
fn batch_output_path(input: &Path, output_dir: &Path, format: GraphOutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");
    output_dir.join(format!("{}_network.{}", stem, format.extension()))
}

/// 处理批量模式中的单个数据集
fn process_batch_file(
    input: &PathBuf,
    output_dir: &Path,
    format: GraphOutputFormat,
    overwrite: bool,
    config: &RenderConfig,
) -> ProcessResult {
    let output_file = batch_output_path(input, output_dir, format);

    if output_file.exists() && !overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    let run = || -> Result<(usize, usize)> {
        let dataset = parsers::read_dataset(input, &config.dataset)?;
        let built = BuiltGraph::build(config.mode, &dataset.compounds);
        write_graph(&built.to_data(), &output_file, format, config)?;
        Ok((built.node_count(), built.edge_count()))
    };

    match run() {
        Ok((nodes, edges)) => ProcessResult::Written {
            output: output_file,
            nodes,
            edges,
        },
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

/// 按格式写出关系图
fn write_graph(
    data: &GraphData,
    output: &Path,
    format: GraphOutputFormat,
    config: &RenderConfig,
) -> Result<()> {
    match format {
        GraphOutputFormat::Html => export::to_html(data, output, &config.title()),
        GraphOutputFormat::Png | GraphOutputFormat::Svg => {
            let options = PlotOptions {
                title: config.title(),
                width: config.width,
                height: config.height,
                layout: config.layout,
            };
            plot::generate_network_plot(data, output, &options, format == GraphOutputFormat::Svg)
        }
        GraphOutputFormat::Csv => {
            export::to_edges_csv(data, output)?;
            export::to_nodes_csv(data, &export::nodes_csv_path(output))
        }
        GraphOutputFormat::Json => export::to_json(data, output),
    }
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> Result<GraphOutputFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "html" | "htm" => Ok(GraphOutputFormat::Html),
        "png" => Ok(GraphOutputFormat::Png),
        "svg" => Ok(GraphOutputFormat::Svg),
        "csv" => Ok(GraphOutputFormat::Csv),
        "json" => Ok(GraphOutputFormat::Json),
        _ => Err(ChemnetError::UnsupportedFormat(format!(
            "Cannot determine output format for '{}'; use --format",
            path.display()
        ))),
    }
}

fn print_dataset_summary(dataset: &Dataset) {
    output::print_success(&format!(
        "Loaded {} compounds from '{}'",
        dataset.compounds.len(),
        dataset.name
    ));
    output::print_stat("Rows read", dataset.records_read);
    output::print_stat("Duplicate formulas", dataset.duplicates());
    let widest = dataset
        .compounds
        .iter()
        .map(Compound::element_count)
        .max()
        .unwrap_or(0);
    output::print_stat("Max elements/compound", widest);
    if dataset.skipped > 0 {
        output::print_stat("Rows skipped", dataset.skipped);
    }
}

fn print_graph_summary(built: &BuiltGraph) {
    match built {
        BuiltGraph::Cooccurrence(g) => {
            let isolated = g.nodes().filter(|el| g.degree(el) == 0).count();
            output::print_success("Built element co-occurrence graph");
            output::print_stat("Elements", g.node_count());
            output::print_stat("Element pairs", g.edge_count());
            output::print_stat("Isolated elements", isolated);
        }
        BuiltGraph::Bipartite(g) => {
            output::print_success("Built compound-element graph");
            output::print_stat("Compounds", g.compound_count());
            output::print_stat("Elements", g.element_count());
            output::print_stat("Memberships", g.edge_count());
        }
    }
}

/// 打印共享化合物最多的元素对
fn print_pair_table(graph: &CooccurrenceGraph, count: usize) {
    #[derive(Tabled)]
    struct PairRow {
        #[tabled(rename = "Rank")]
        rank: usize,
        #[tabled(rename = "Pair")]
        pair: String,
        #[tabled(rename = "Shared compounds")]
        weight: u32,
    }

    let rows: Vec<PairRow> = graph
        .strongest_pairs()
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(i, (a, b, w))| PairRow {
            rank: i + 1,
            pair: format!("{} - {}", a, b),
            weight: w,
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("Top {} Element Pairs", rows.len()));
        let table = Table::new(&rows);
        println!("{}", table);
    }
}
