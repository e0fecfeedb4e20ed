//! # stages 子命令实现
//!
//! 给定元素与初始空穴，平均电子/光子数目与能量随电离级的变化。
//! 能量画在左轴，数目画在右轴。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 StagesArgs
//! - 使用 `analysis/averages.rs` 的 stage_profile
//! - 使用 `render/plot.rs` 的双 y 轴图

use super::{cell, resolve_output, DataContext};
use crate::analysis::{stage_profile, Profile};
use crate::cli::analyze::{OutputFormat, StagesArgs};
use crate::error::Result;
use crate::models::{nomenclature::to_roman, Averages};
use crate::render::series::{TAB_BLUE, TAB_ORANGE};
use crate::render::{export, plot, ChartLayout, StepSeries};
use crate::utils::output;

use std::path::PathBuf;
use tabled::builder::Builder;

/// 执行 stages 分析
pub fn execute(args: StagesArgs, ctx: &DataContext) -> Result<()> {
    output::print_header("Averages Versus Ionisation Stage");

    let z = ctx.names.parse_element(&args.element)?;
    let shell = ctx.names.parse_shell(&args.shell)?;
    let element = ctx.names.element(z);
    let gap = ctx.names.shell(shell);

    let averages = ctx.averages()?;
    let profile = stage_profile(&averages, z, shell)?;

    print_stage_table(&profile);

    let (energies, numbers) = stage_series(&profile, args.photon_scale);

    let (output_path, format) =
        output_target(args.output.clone(), args.figure.format, &element, &gap);

    match format {
        OutputFormat::Csv => {
            let all: Vec<StepSeries> = energies.into_iter().chain(numbers).collect();
            export::series_to_csv("stage", &all, &output_path)?;
        }
        _ => {
            let title = args
                .figure
                .title
                .clone()
                .unwrap_or_else(|| format!("Z={} and s={}", z, gap));
            let layout = ChartLayout::new(title, "Ionisation stage", "Energy (eV)")
                .size(args.figure.width, args.figure.height);
            plot::generate_twin_axis_chart(
                &energies,
                &numbers,
                &layout,
                "Number of photons / electrons",
                &output_path,
                format == OutputFormat::Svg,
            )?;
        }
    }

    output::print_success(&format!(
        "{} {}-shell stage profile saved to '{}'",
        element,
        gap,
        output_path.display()
    ));
    Ok(())
}

/// 输出路径，默认 stages_<element>_<shell>.<ext>
fn output_target(
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    element: &str,
    gap: &str,
) -> (PathBuf, OutputFormat) {
    resolve_output(output, format, &format!("stages_{}_{}", element, gap))
}

/// 能量曲线（左轴，蓝色）与数目曲线（右轴，橙色）
pub fn stage_series(profile: &Profile<Averages>, photon_scale: f64) -> (Vec<StepSeries>, Vec<StepSeries>) {
    let energies = vec![
        StepSeries::from_profile("electrons energy", profile, |a| a.electron_energy).color(TAB_BLUE),
        StepSeries::from_profile(
            format!("photons energy (x{})", photon_scale),
            profile,
            |a| a.photon_energy * photon_scale,
        )
            .color(TAB_BLUE)
            .dashed(true),
    ];
    let numbers = vec![
        StepSeries::from_profile("number of Auger electrons", profile, |a| a.electron_count)
            .color(TAB_ORANGE),
        StepSeries::from_profile("number of photons", profile, |a| a.photon_count)
            .color(TAB_ORANGE)
            .dashed(true),
    ];
    (energies, numbers)
}

fn print_stage_table(profile: &Profile<Averages>) {
    let mut builder = Builder::default();
    builder.push_record(["Stage", "N_e", "E_e (eV)", "N_p", "E_p (eV)"]);
    for (stage, value) in profile {
        builder.push_record([
            to_roman(*stage),
            cell(value.map(|a| a.electron_count), 3),
            cell(value.map(|a| a.electron_energy), 1),
            cell(value.map(|a| a.photon_count), 4),
            cell(value.map(|a| a.photon_energy), 1),
        ]);
    }
    println!("{}", builder.build());
}
