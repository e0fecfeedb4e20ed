//! # 图表生成
//!
//! 使用 `plotters` 库绘制阶梯曲线图。
//!
//! ## 功能
//! - 单坐标轴阶梯图（分布、平均电子数、随 Z 变化）
//! - 双 y 轴阶梯图（能量 / 数目随电离级变化）
//! - 实线与虚线区分电子与光子
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/analyze/`, `commands/render_all.rs` 调用
//! - 使用 `render/series.rs` 的 StepSeries
//! - 使用 `plotters` 渲染图表

use crate::error::{AugerkitError, Result};
use crate::render::series::{joint_bounds, StepSeries, TAB_BLUE, TAB_ORANGE};

use plotters::chart::SeriesAnno;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::ops::Range;
use std::path::Path;

/// 图表布局
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub width: u32,
    pub height: u32,
}

impl ChartLayout {
    pub fn new(title: impl Into<String>, x_desc: &str, y_desc: &str) -> Self {
        ChartLayout {
            title: title.into(),
            x_desc: x_desc.to_string(),
            y_desc: y_desc.to_string(),
            width: 1000,
            height: 700,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

fn plot_err<E: std::fmt::Debug>(e: E) -> AugerkitError {
    AugerkitError::PlotError(format!("{:?}", e))
}

/// 生成单坐标轴阶梯图
pub fn generate_step_chart(
    series: &[StepSeries],
    layout: &ChartLayout,
    output_path: &Path,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (layout.width, layout.height)).into_drawing_area();
        draw_step_chart(&root, series, layout)?;
        root.present().map_err(plot_err)?;
    } else {
        let root =
            BitMapBackend::new(output_path, (layout.width, layout.height)).into_drawing_area();
        draw_step_chart(&root, series, layout)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

/// 生成双 y 轴阶梯图
pub fn generate_twin_axis_chart(
    primary: &[StepSeries],
    secondary: &[StepSeries],
    layout: &ChartLayout,
    secondary_desc: &str,
    output_path: &Path,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (layout.width, layout.height)).into_drawing_area();
        draw_twin_axis_chart(&root, primary, secondary, layout, secondary_desc)?;
        root.present().map_err(plot_err)?;
    } else {
        let root =
            BitMapBackend::new(output_path, (layout.width, layout.height)).into_drawing_area();
        draw_twin_axis_chart(&root, primary, secondary, layout, secondary_desc)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

/// 坐标轴范围：x 两侧留 5%，y 从 0（或负的最小值）到最大值上方 10%
fn axis_ranges(series: &[StepSeries]) -> (Range<f64>, Range<f64>) {
    let Some((x0, x1, y0, y1)) = joint_bounds(series) else {
        return (0.0..1.0, 0.0..1.0);
    };

    let x_pad = if x1 > x0 { (x1 - x0) * 0.05 } else { 0.5 };
    let y_low = y0.min(0.0);
    let y_span = y1 - y_low;
    let y_high = if y_span > 0.0 { y1 + y_span * 0.1 } else { y_low + 1.0 };

    ((x0 - x_pad)..(x1 + x_pad), y_low..y_high)
}

/// 在主坐标系上画一条阶梯曲线
fn draw_on_primary<'a, DB: DrawingBackend + 'a>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    series: &StepSeries,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let style = series.color.stroke_width(2);

    for (i, segment) in series.step_segments().into_iter().enumerate() {
        let anno = if series.dashed {
            chart
                .draw_series(DashedLineSeries::new(segment, 8, 5, style))
                .map_err(plot_err)?
        } else {
            chart
                .draw_series(LineSeries::new(segment, style))
                .map_err(plot_err)?
        };

        // 每条曲线只在图例中出现一次
        if i == 0 {
            attach_legend(anno, series);
        }
    }

    Ok(())
}

/// 图例：实线或两段短线
fn attach_legend<'a, DB: DrawingBackend + 'a>(anno: &mut SeriesAnno<'a, DB>, series: &StepSeries) {
    let color = series.color;
    anno.label(series.label.as_str());

    if series.dashed {
        anno.legend(move |(x, y)| {
            EmptyElement::at((x, y))
                + PathElement::new(vec![(0, 0), (7, 0)], color.stroke_width(2))
                + PathElement::new(vec![(12, 0), (19, 0)], color.stroke_width(2))
        });
    } else {
        anno.legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
        });
    }
}

fn draw_step_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    series: &[StepSeries],
    layout: &ChartLayout,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let (x_range, y_range) = axis_ranges(series);

    let mut chart = ChartBuilder::on(root)
        .caption(&layout.title, ("sans-serif", 26).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(layout.x_desc.as_str())
        .y_desc(layout.y_desc.as_str())
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    for s in series {
        draw_on_primary(&mut chart, s)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 15))
        .draw()
        .map_err(plot_err)?;

    Ok(())
}

fn draw_twin_axis_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    primary: &[StepSeries],
    secondary: &[StepSeries],
    layout: &ChartLayout,
    secondary_desc: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let (x_primary, y_primary) = axis_ranges(primary);
    let (x_secondary, y_secondary) = axis_ranges(secondary);
    let x_range = x_primary.start.min(x_secondary.start)..x_primary.end.max(x_secondary.end);

    let mut chart = ChartBuilder::on(root)
        .caption(&layout.title, ("sans-serif", 26).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .right_y_label_area_size(80)
        .build_cartesian_2d(x_range.clone(), y_primary)
        .map_err(plot_err)?
        .set_secondary_coord(x_range, y_secondary);

    chart
        .configure_mesh()
        .x_desc(layout.x_desc.as_str())
        .y_desc(layout.y_desc.as_str())
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16).into_font().color(&TAB_BLUE))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    chart
        .configure_secondary_axes()
        .y_desc(secondary_desc)
        .label_style(("sans-serif", 16).into_font().color(&TAB_ORANGE))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    for s in primary {
        draw_on_primary(&mut chart, s)?;
    }

    for s in secondary {
        let style = s.color.stroke_width(2);

        for (i, segment) in s.step_segments().into_iter().enumerate() {
            let anno = if s.dashed {
                chart
                    .draw_secondary_series(DashedLineSeries::new(segment, 8, 5, style))
                    .map_err(plot_err)?
            } else {
                chart
                    .draw_secondary_series(LineSeries::new(segment, style))
                    .map_err(plot_err)?
            };

            if i == 0 {
                attach_legend(anno, s);
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 15))
        .draw()
        .map_err(plot_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_ranges_padding() {
        let s = StepSeries::new("a", vec![(1.0, Some(0.2)), (10.0, Some(0.5))]);
        let (x, y) = axis_ranges(&[s]);
        assert!((x.start - 0.55).abs() < 1e-12);
        assert!((x.end - 10.45).abs() < 1e-12);
        assert_eq!(y.start, 0.0);
        assert!((y.end - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_axis_ranges_empty() {
        let s = StepSeries::new("a", vec![(1.0, None)]);
        assert_eq!(axis_ranges(&[s]), (0.0..1.0, 0.0..1.0));
    }

    #[test]
    fn test_step_series_drawn_as_paths() {
        let solid = StepSeries::new("solid", vec![(1.0, Some(0.2)), (2.0, Some(0.5))]);
        let dashed = StepSeries::new(
            "dashed",
            vec![(1.0, Some(0.1)), (2.0, None), (3.0, Some(0.3))],
        )
        .dashed(true);

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (200, 100)).into_drawing_area();
            let mut chart = ChartBuilder::on(&root)
                .build_cartesian_2d(0.0..4.0, 0.0..1.0)
                .unwrap();
            draw_on_primary(&mut chart, &solid).unwrap();
            draw_on_primary(&mut chart, &dashed).unwrap();
            root.present().unwrap();
        }

        assert!(svg.contains("<polyline") || svg.contains("<path"));
    }
}
