//! # 力导向布局
//!
//! Fruchterman-Reingold 弹簧布局，为静态绘图计算节点坐标。
//!
//! ## 算法概述
//! 1. 节点按顺序放置在圆周上（半径按黄金分割序列略作扰动，起始角由种子决定）
//! 2. 每轮迭代：所有节点对互相排斥，边两端按权重相互吸引
//! 3. 位移受"温度"限制，温度线性降到 0
//! 4. 最后平移到原点并缩放到 [-1, 1]²
//!
//! 同一张图、同样的种子与迭代次数，总是得到同样的坐标。
//!
//! ## 依赖关系
//! - 被 `graph/plot.rs` 调用
//! - 使用 `models/graph.rs` 的 GraphData

use crate::models::GraphData;

use std::f64::consts::PI;

/// 黄金分割比的小数部分
const GOLDEN_FRACTION: f64 = 0.618_033_988_749_895;

/// 最小距离，避免重合节点之间的除零
const MIN_DISTANCE: f64 = 0.01;

/// 布局参数
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    /// 迭代次数
    pub iterations: usize,
    /// 初始布局种子
    pub seed: u64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            iterations: 200,
            seed: 42,
        }
    }
}

/// 计算节点坐标，顺序与 `data.nodes` 一致
pub fn spring_layout(data: &GraphData, options: &LayoutOptions) -> Vec<(f64, f64)> {
    let n = data.nodes.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![(0.0, 0.0)],
        _ => {}
    }

    let mut positions = initial_positions(n, options.seed);

    let index = data.index();
    let edges: Vec<(usize, usize, f64)> = data
        .edges
        .iter()
        .filter_map(|e| {
            let u = *index.get(e.source.as_str())?;
            let v = *index.get(e.target.as_str())?;
            Some((u, v, e.weight as f64))
        })
        .collect();

    // 最优间距
    let k = (1.0 / n as f64).sqrt();
    let mut temperature = 0.1;
    let cooling = temperature / (options.iterations as f64 + 1.0);

    for _ in 0..options.iterations {
        let mut displacement = vec![(0.0_f64, 0.0_f64); n];

        // 斥力
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = positions[i].0 - positions[j].0;
                let dy = positions[i].1 - positions[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let force = k * k / dist;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                displacement[i].0 += fx;
                displacement[i].1 += fy;
                displacement[j].0 -= fx;
                displacement[j].1 -= fy;
            }
        }

        // 引力
        for &(u, v, weight) in &edges {
            let dx = positions[u].0 - positions[v].0;
            let dy = positions[u].1 - positions[v].1;
            let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
            let force = dist * dist / k * weight;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            displacement[u].0 -= fx;
            displacement[u].1 -= fy;
            displacement[v].0 += fx;
            displacement[v].1 += fy;
        }

        for (pos, (dx, dy)) in positions.iter_mut().zip(displacement) {
            let len = (dx * dx + dy * dy).sqrt();
            if len > 0.0 {
                let step = len.min(temperature);
                pos.0 += dx / len * step;
                pos.1 += dy / len * step;
            }
        }

        temperature -= cooling;
    }

    rescale(&mut positions);
    positions
}

fn initial_positions(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let offset = (seed % 360) as f64 * PI / 180.0;
    (0..n)
        .map(|i| {
            let angle = offset + 2.0 * PI * i as f64 / n as f64;
            let jitter = ((i as f64 + seed as f64) * GOLDEN_FRACTION).fract();
            let radius = 0.5 + 0.5 * jitter;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// 平移到重心并缩放到 [-1, 1]²
fn rescale(positions: &mut [(f64, f64)]) {
    let n = positions.len() as f64;
    let cx = positions.iter().map(|p| p.0).sum::<f64>() / n;
    let cy = positions.iter().map(|p| p.1).sum::<f64>() / n;

    let extent = positions
        .iter()
        .map(|p| (p.0 - cx).abs().max((p.1 - cy).abs()))
        .fold(0.0_f64, f64::max);

    let scale = if extent > 0.0 { 1.0 / extent } else { 1.0 };
    for p in positions.iter_mut() {
        p.0 = (p.0 - cx) * scale;
        p.1 = (p.1 - cy) * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::build_cooccurrence;
    use crate::models::Compound;

    fn sample_data() -> GraphData {
        let compounds: Vec<Compound> = ["H2O", "NaCl", "Na2SO4", "CO2", "He"]
            .iter()
            .map(|f| Compound::from_formula(f))
            .collect();
        build_cooccurrence(&compounds).to_data()
    }

    #[test]
    fn test_empty_and_single() {
        let options = LayoutOptions::default();
        assert!(spring_layout(&GraphData::default(), &options).is_empty());

        let compounds = vec![Compound::from_formula("Xe")];
        let data = build_cooccurrence(&compounds).to_data();
        assert_eq!(spring_layout(&data, &options), vec![(0.0, 0.0)]);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let data = sample_data();
        let options = LayoutOptions::default();
        assert_eq!(spring_layout(&data, &options), spring_layout(&data, &options));
    }

    #[test]
    fn test_layout_within_unit_box() {
        let data = sample_data();
        let positions = spring_layout(&data, &LayoutOptions::default());

        assert_eq!(positions.len(), data.nodes.len());
        for (x, y) in &positions {
            assert!(x.is_finite() && y.is_finite());
            assert!(x.abs() <= 1.0 + 1e-9);
            assert!(y.abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_zero_iterations_keeps_circle_order() {
        let data = sample_data();
        let options = LayoutOptions {
            iterations: 0,
            seed: 0,
        };
        let positions = spring_layout(&data, &options);

        // 各节点初始位置互不相同
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                assert_ne!(positions[i], positions[j]);
            }
        }
    }
}
