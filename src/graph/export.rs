//! # 关系图数据导出
//!
//! 导出关系图到 CSV、JSON 和交互式 HTML。
//!
//! ## 支持格式
//! - CSV: 边列表 (source, target, weight)，节点列表另存为 `<stem>_nodes.csv`
//! - JSON: `{ "nodes": [...], "edges": [...] }`
//! - HTML: 基于 vis-network 的交互式网页（Barnes-Hut 物理布局，悬停显示关系数）
//!
//! ## 依赖关系
//! - 被 `commands/graph.rs` 调用
//! - 使用 `models/graph.rs` 的 GraphData
//! - 使用 `csv` 与 `serde_json` 库写入

use crate::error::{ChemnetError, Result};
use crate::models::{GraphData, NodeKind};

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────
// CSV
// ─────────────────────────────────────────────────────────────

/// 导出边列表为 CSV 格式
pub fn to_edges_csv(data: &GraphData, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["source", "target", "weight"])?;
    for edge in &data.edges {
        let weight = edge.weight.to_string();
        wtr.write_record([edge.source.as_str(), edge.target.as_str(), weight.as_str()])?;
    }

    wtr.flush().map_err(|e| ChemnetError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出节点列表为 CSV 格式
pub fn to_nodes_csv(data: &GraphData, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["node", "kind", "degree", "strength"])?;
    for node in &data.nodes {
        wtr.write_record(&[
            node.label.clone(),
            node.kind.to_string(),
            node.degree.to_string(),
            node.strength.to_string(),
        ])?;
    }

    wtr.flush().map_err(|e| ChemnetError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 节点列表 CSV 的路径：与边列表同目录，文件名为 `<stem>_nodes.csv`
pub fn nodes_csv_path(edges_path: &Path) -> PathBuf {
    let stem = edges_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("network");
    edges_path.with_file_name(format!("{}_nodes.csv", stem))
}

// ─────────────────────────────────────────────────────────────
// JSON
// ─────────────────────────────────────────────────────────────

/// 导出为 JSON 格式
pub fn to_json(data: &GraphData, output_path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(data)?;
    write_file(output_path, &content)
}

// ─────────────────────────────────────────────────────────────
// HTML
// ─────────────────────────────────────────────────────────────

const ELEMENT_COLOR: &str = "lightgreen";
const COMPOUND_COLOR: &str = "skyblue";

/// vis-network 节点
#[derive(Serialize)]
struct VisNode<'a> {
    id: &'a str,
    label: &'a str,
    title: String,
    size: usize,
    color: &'static str,
}

/// vis-network 边
#[derive(Serialize)]
struct VisEdge<'a> {
    from: &'a str,
    to: &'a str,
    value: u32,
    title: String,
}

/// 节点大小：基础值 + 每个关系的增量
fn node_size(degree: usize) -> usize {
    15 + degree * 5
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// 序列化为可嵌入 `<script>` 的 JSON
fn script_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// 生成交互式 HTML 页面内容
pub fn render_html(data: &GraphData, title: &str) -> Result<String> {
    let nodes: Vec<VisNode> = data
        .nodes
        .iter()
        .map(|node| VisNode {
            id: &node.id,
            label: &node.label,
            title: format!(
                "<b>{}</b><br>Relationships: {}",
                escape_html(&node.label),
                node.degree
            ),
            size: node_size(node.degree),
            color: match node.kind {
                NodeKind::Element => ELEMENT_COLOR,
                NodeKind::Compound => COMPOUND_COLOR,
            },
        })
        .collect();

    let edges: Vec<VisEdge> = data
        .edges
        .iter()
        .map(|edge| VisEdge {
            from: &edge.source,
            to: &edge.target,
            value: edge.weight,
            title: format!("Shared compounds: {}", edge.weight),
        })
        .collect();

    let nodes_json = script_json(&nodes)?;
    let edges_json = script_json(&edges)?;

    let title = escape_html(title);
    Ok(fill_template(HTML_TEMPLATE, |key| match key {
        "TITLE" => Some(title.as_str()),
        "NODES" => Some(nodes_json.as_str()),
        "EDGES" => Some(edges_json.as_str()),
        _ => None,
    }))
}

/// 单遍替换模板中的 `{{KEY}}` 占位符
///
/// 替换进来的内容不会再被扫描，数据中出现的 `{{EDGES}}` 等文本原样保留。
/// 未知的占位符原样输出。
fn fill_template<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match lookup(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// 导出为交互式 HTML
pub fn to_html(data: &GraphData, output_path: &Path, title: &str) -> Result<()> {
    let content = render_html(data, title)?;
    write_file(output_path, &content)
}

fn write_file(output_path: &Path, content: &str) -> Result<()> {
    fs::write(output_path, content).map_err(|e| ChemnetError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
<script src="https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js"></script>
<style>
  body { margin: 0; background-color: #222222; font-family: sans-serif; }
  h1 { color: white; font-size: 18px; font-weight: normal; margin: 12px 16px; }
  #network { width: 100%; height: 700px; background-color: #222222; }
</style>
</head>
<body>
<h1>{{TITLE}}</h1>
<div id="network"></div>
<script>
  function htmlTitle(html) {
    const el = document.createElement("div");
    el.innerHTML = html;
    return el;
  }

  const nodes = {{NODES}};
  const edges = {{EDGES}};
  nodes.forEach(function (n) { n.title = htmlTitle(n.title); });

  const container = document.getElementById("network");
  const network = new vis.Network(
    container,
    { nodes: new vis.DataSet(nodes), edges: new vis.DataSet(edges) },
    {
      nodes: { shape: "dot", font: { color: "white" } },
      edges: { color: { color: "gray" }, smooth: false },
      physics: {
        solver: "barnesHut",
        barnesHut: {
          gravitationalConstant: -80000,
          centralGravity: 0.3,
          springLength: 250,
          springConstant: 0.001,
          damping: 0.09,
          avoidOverlap: 0
        },
        stabilization: { iterations: 1000 }
      },
      interaction: { hover: true, tooltipDelay: 100 }
    }
  );
</script>
</body>
</html>
"#;
