//! # 阶梯曲线数据
//!
//! 所有图都使用 steps-pre 画法：区间 (x[i-1], x[i]] 的取值为 y[i]。
//! 缺失值把曲线切成独立的段。
//!
//! ## 依赖关系
//! - 被 `render/plot.rs` 绘制
//! - 被 `commands/analyze/` 构造

use crate::analysis::Profile;

use plotters::style::RGBColor;

/// matplotlib tab10 调色板
pub const TAB_BLUE: RGBColor = RGBColor(31, 119, 180);
pub const TAB_ORANGE: RGBColor = RGBColor(255, 127, 14);
pub const PALETTE: [RGBColor; 6] = [
    TAB_BLUE,
    TAB_ORANGE,
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

/// 一条阶梯曲线
#[derive(Debug, Clone)]
pub struct StepSeries {
    pub label: String,
    pub points: Vec<(f64, Option<f64>)>,
    pub color: RGBColor,
    pub dashed: bool,
}

impl StepSeries {
    pub fn new(label: impl Into<String>, points: Vec<(f64, Option<f64>)>) -> Self {
        StepSeries {
            label: label.into(),
            points,
            color: TAB_BLUE,
            dashed: false,
        }
    }

    /// 由 Profile 构造，`value` 取出要画的分量
    pub fn from_profile<T>(
        label: impl Into<String>,
        profile: &Profile<T>,
        value: impl Fn(&T) -> f64,
    ) -> Self {
        let points = profile
            .iter()
            .map(|(x, v)| (*x as f64, v.as_ref().map(&value)))
            .collect();
        Self::new(label, points)
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = color;
        self
    }

    pub fn dashed(mut self, dashed: bool) -> Self {
        self.dashed = dashed;
        self
    }

    /// 按缺失值切分后的阶梯折线
    pub fn step_segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();

        for (x, y) in &self.points {
            match y {
                Some(y) if y.is_finite() => current.push((*x, *y)),
                _ => {
                    if !current.is_empty() {
                        segments.push(step_path(&current));
                        current.clear();
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(step_path(&current));
        }

        segments
    }

    /// 有效数据的 (x_min, x_max, y_min, y_max)
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.points
            .iter()
            .filter_map(|(x, y)| y.filter(|v| v.is_finite()).map(|y| (*x, y)))
            .fold(None, |acc, (x, y)| match acc {
                None => Some((x, x, y, y)),
                Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
            })
    }
}

/// steps-pre 折线顶点
pub fn step_path(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut path = Vec::with_capacity(points.len() * 2);
    let mut iter = points.iter();

    if let Some(first) = iter.next() {
        path.push(*first);
        let mut prev_x = first.0;
        for (x, y) in iter {
            path.push((prev_x, *y));
            path.push((*x, *y));
            prev_x = *x;
        }
    }

    path
}

/// 多条曲线的联合范围
pub fn joint_bounds(series: &[StepSeries]) -> Option<(f64, f64, f64, f64)> {
    series
        .iter()
        .filter_map(StepSeries::bounds)
        .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_path_pre() {
        let path = step_path(&[(1.0, 0.1), (2.0, 0.5), (3.0, 0.2)]);
        assert_eq!(
            path,
            vec![
                (1.0, 0.1),
                (1.0, 0.5),
                (2.0, 0.5),
                (2.0, 0.2),
                (3.0, 0.2)
            ]
        );
        assert!(step_path(&[]).is_empty());
    }

    #[test]
    fn test_segments_split_on_missing() {
        let series = StepSeries::new(
            "K-shell",
            vec![
                (4.0, Some(1.0)),
                (5.0, Some(1.1)),
                (6.0, None),
                (7.0, Some(1.3)),
                (8.0, Some(f64::NAN)),
            ],
        );
        let segments = series.step_segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].len(), 3);
        assert_eq!(segments[1], vec![(7.0, 1.3)]);
    }

    #[test]
    fn test_bounds_ignore_missing() {
        let a = StepSeries::new("a", vec![(1.0, Some(2.0)), (2.0, None), (3.0, Some(-1.0))]);
        let b = StepSeries::new("b", vec![(0.0, None), (10.0, Some(5.0))]);
        assert_eq!(a.bounds(), Some((1.0, 3.0, -1.0, 2.0)));
        assert_eq!(joint_bounds(&[a, b]), Some((1.0, 10.0, -1.0, 5.0)));
        assert_eq!(StepSeries::new("c", vec![(1.0, None)]).bounds(), None);
    }

    #[test]
    fn test_from_profile() {
        let profile: Profile<f64> = vec![(4, Some(1.0)), (5, None)];
        let series = StepSeries::from_profile("K-shell", &profile, |v| *v * 2.0);
        assert_eq!(series.points, vec![(4.0, Some(2.0)), (5.0, None)]);
    }
}
