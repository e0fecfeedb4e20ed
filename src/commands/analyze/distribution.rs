//! # distribution 子命令实现
//!
//! 给定离子与初始空穴，输出发射 1..10 个电子的概率分布。
//!
//! ## 功能
//! - 终端表格显示 P(n)、平均电子数与概率总和
//! - 绘制阶梯图（可叠加多个离子）
//! - 导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 DistributionArgs
//! - 使用 `analysis/distribution.rs`
//! - 使用 `render/` 输出图表与数据

use super::{resolve_output, DataContext};
use crate::analysis::{electron_distribution, ElectronDistribution};
use crate::cli::analyze::{DistributionArgs, OutputFormat};
use crate::error::{AugerkitError, Result};
use crate::models::{IonKey, Nomenclature};
use crate::render::series::PALETTE;
use crate::render::{export, plot, ChartLayout, StepSeries};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 执行 distribution 分析
pub fn execute(args: DistributionArgs, ctx: &DataContext) -> Result<()> {
    output::print_header("Emitted-Electron Distribution");

    let shell = ctx.names.parse_shell(&args.shell)?;

    let mut distributions = Vec::with_capacity(args.ions.len());
    for ion in &args.ions {
        let (z, stage) = ctx.names.parse_ion(ion)?;
        distributions.push(electron_distribution(&ctx.table, IonKey::new(z, stage, shell))?);
    }

    for dist in &distributions {
        print_distribution_table(dist, &ctx.names);
    }

    if args.no_plot {
        return Ok(());
    }

    let Some(first) = distributions.first().map(|d| d.key) else {
        return Err(AugerkitError::InvalidArgument("no ion given".to_string()));
    };
    let (output_path, format) = resolve_output(
        args.output.clone(),
        args.figure.format,
        &default_stem(&ctx.names, first),
    );

    let title = args.figure.title.clone().unwrap_or_else(|| {
        if distributions.len() == 1 {
            distribution_title(&ctx.names, first)
        } else {
            format!("{}-shell ionisation", ctx.names.shell(shell))
        }
    });
    let layout = ChartLayout::new(title, "Number of emitted electrons", "Probability")
        .size(args.figure.width, args.figure.height);

    write_distributions(&distributions, &ctx.names, &layout, &output_path, format)?;
    output::print_success(&format!("Distribution saved to '{}'", output_path.display()));

    Ok(())
}

/// 分布图标题
pub fn distribution_title(names: &Nomenclature, key: IonKey) -> String {
    let (element, stage, gap) = names.correspondence(key.z, key.stage, key.shell);
    format!(
        "{}-shell ionisation of {} {} (Z = {})",
        gap, element, stage, key.z
    )
}

/// 默认文件名主干 graph_<element>_<stage>_<shell>
fn default_stem(names: &Nomenclature, key: IonKey) -> String {
    let (element, stage, gap) = names.correspondence(key.z, key.stage, key.shell);
    format!("graph_{}_{}_{}", element, stage, gap)
}

/// 默认文件名 graph_<element>_<stage>_<shell>.<ext>
pub fn default_file_name(names: &Nomenclature, key: IonKey, format: OutputFormat) -> String {
    format!("{}.{}", default_stem(names, key), format.extension())
}

/// 写出一组分布（图或 CSV）
pub fn write_distributions(
    distributions: &[ElectronDistribution],
    names: &Nomenclature,
    layout: &ChartLayout,
    output_path: &Path,
    format: OutputFormat,
) -> Result<()> {
    let series: Vec<StepSeries> = distributions
        .iter()
        .enumerate()
        .map(|(i, dist)| {
            let label = format!(
                "{} {}",
                names.element(dist.key.z),
                names.stage(dist.key.stage)
            );
            let points = dist
                .points
                .iter()
                .map(|(n, p)| (*n as f64, Some(*p)))
                .collect();
            StepSeries::new(label, points).color(PALETTE[i % PALETTE.len()])
        })
        .collect();

    match format {
        OutputFormat::Png | OutputFormat::Svg => plot::generate_step_chart(
            &series,
            layout,
            output_path,
            format == OutputFormat::Svg,
        ),
        OutputFormat::Csv => match distributions {
            [single] => export::distribution_to_csv(single, output_path),
            _ => export::series_to_csv("electrons", &series, output_path),
        },
    }
}

/// 打印分布表格
fn print_distribution_table(dist: &ElectronDistribution, names: &Nomenclature) {
    #[derive(Tabled)]
    struct DistributionRow {
        #[tabled(rename = "Electrons")]
        electrons: u32,
        #[tabled(rename = "Probability")]
        probability: String,
    }

    let rows: Vec<DistributionRow> = dist
        .points
        .iter()
        .map(|(n, p)| DistributionRow {
            electrons: *n,
            probability: format!("{:.4}", p),
        })
        .collect();

    output::print_header(&distribution_title(names, dist.key));
    println!("{}", Table::new(&rows));
    output::print_info(&format!(
        "Mean number of emitted electrons: {:.4} (total probability {:.4})",
        dist.mean, dist.total
    ));
}
