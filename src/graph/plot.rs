//! # 关系图静态绘图
//!
//! 使用 `plotters` 将关系图渲染为 PNG 或 SVG。
//!
//! ## 样式
//! - 节点：实心圆，半径随度增大；元素为浅绿色，化合物为天蓝色
//! - 边：灰色线段，线宽随权重（共享化合物数）增大
//! - 标签：节点中心
//!
//! ## 依赖关系
//! - 被 `commands/graph.rs` 调用
//! - 使用 `graph/layout.rs` 计算坐标
//! - 使用 `plotters` 渲染图表

use crate::error::{ChemnetError, Result};
use crate::graph::layout::{spring_layout, LayoutOptions};
use crate::models::{GraphData, NodeKind};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const ELEMENT_COLOR: RGBColor = RGBColor(144, 238, 144);
const COMPOUND_COLOR: RGBColor = RGBColor(135, 206, 235);
const EDGE_COLOR: RGBColor = RGBColor(128, 128, 128);

/// 最小/最大节点半径（像素）
const MIN_RADIUS: f64 = 8.0;
const MAX_RADIUS: f64 = 28.0;

/// 最大边线宽（像素）
const MAX_STROKE: f64 = 8.0;

/// 坐标轴范围，为 [-1, 1] 布局留出边距
const AXIS_LIMIT: f64 = 1.2;

/// 绘图参数
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub layout: LayoutOptions,
}

/// 生成关系图（PNG 或 SVG）
pub fn generate_network_plot(
    data: &GraphData,
    output_path: &Path,
    options: &PlotOptions,
    use_svg: bool,
) -> Result<()> {
    let positions = spring_layout(data, &options.layout);

    if use_svg {
        let root =
            SVGBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_network_chart(&root, data, &positions, &options.title)?;
        root.present()
            .map_err(|e| ChemnetError::PlotError(e.to_string()))?;
    } else {
        let root =
            BitMapBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_network_chart(&root, data, &positions, &options.title)?;
        root.present()
            .map_err(|e| ChemnetError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 节点半径：按度线性插值
fn node_radius(degree: usize, max_degree: usize) -> i32 {
    if max_degree == 0 {
        return MIN_RADIUS as i32;
    }
    let ratio = degree as f64 / max_degree as f64;
    (MIN_RADIUS + (MAX_RADIUS - MIN_RADIUS) * ratio).round() as i32
}

/// 边线宽：按权重线性插值，至少 1 像素
fn edge_stroke(weight: u32, max_weight: u32) -> u32 {
    if max_weight == 0 {
        return 1;
    }
    let ratio = weight as f64 / max_weight as f64;
    (1.0 + (MAX_STROKE - 1.0) * ratio).round() as u32
}

/// 绘制关系图的核心逻辑
fn draw_network_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    data: &GraphData,
    positions: &[(f64, f64)],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| ChemnetError::PlotError(format!("{:?}", e)))?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .build_cartesian_2d(-AXIS_LIMIT..AXIS_LIMIT, -AXIS_LIMIT..AXIS_LIMIT)
        .map_err(|e| ChemnetError::PlotError(format!("{:?}", e)))?;

    let index = data.index();
    let max_weight = data.max_weight();
    let max_degree = data.max_degree();

    // 先画边，节点覆盖在上面
    for edge in &data.edges {
        let (Some(&u), Some(&v)) = (
            index.get(edge.source.as_str()),
            index.get(edge.target.as_str()),
        ) else {
            continue;
        };

        let style = EDGE_COLOR
            .mix(0.6)
            .stroke_width(edge_stroke(edge.weight, max_weight));
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![positions[u], positions[v]],
                style,
            )))
            .map_err(|e| ChemnetError::PlotError(format!("{:?}", e)))?;
    }

    let label_style = ("sans-serif", 14)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for (node, &(x, y)) in data.nodes.iter().zip(positions) {
        let color = match node.kind {
            NodeKind::Element => ELEMENT_COLOR,
            NodeKind::Compound => COMPOUND_COLOR,
        };
        let radius = node_radius(node.degree, max_degree);

        chart
            .draw_series(std::iter::once(Circle::new(
                (x, y),
                radius,
                color.mix(0.9).filled(),
            )))
            .map_err(|e| ChemnetError::PlotError(format!("{:?}", e)))?;

        chart
            .draw_series(std::iter::once(Text::new(
                node.label.clone(),
                (x, y),
                label_style.clone(),
            )))
            .map_err(|e| ChemnetError::PlotError(format!("{:?}", e)))?;
    }

    Ok(())
}
