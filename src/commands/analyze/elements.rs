//! # elements 子命令实现
//!
//! 中性原子在给定初始空穴下的平均电子/光子数目与能量随原子序数的变化。
//! 输出两张图：mean_energy_<s>-shell 与 mean_number_<s>-shell。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 ElementsArgs
//! - 使用 `analysis/averages.rs` 的 element_profile

use super::{cell, DataContext};
use crate::analysis::{element_profile, Profile};
use crate::cli::analyze::{ElementsArgs, OutputFormat};
use crate::commands::parse_z_range_in;
use crate::error::{AugerkitError, Result};
use crate::models::{Averages, Nomenclature};
use crate::render::series::{TAB_BLUE, TAB_ORANGE};
use crate::render::{export, plot, ChartLayout, StepSeries};
use crate::utils::output;

use std::fs;
use std::path::Path;
use tabled::builder::Builder;

/// 执行 elements 分析
pub fn execute(args: ElementsArgs, ctx: &DataContext) -> Result<()> {
    output::print_header("Averages of Neutral Atoms");

    let shell = ctx.names.parse_shell(&args.shell)?;
    let gap = ctx.names.shell(shell);

    let averages = ctx.averages()?;
    let z_range = parse_z_range_in(&args.z_range, &averages.elements())?;
    let profile = element_profile(&averages, shell, z_range);

    print_element_table(&profile, &ctx.names);

    if !args.output_dir.exists() {
        fs::create_dir_all(&args.output_dir).map_err(|e| AugerkitError::FileWriteError {
            path: args.output_dir.display().to_string(),
            source: e,
        })?;
    }

    let format = args.figure.format.unwrap_or(OutputFormat::Png);
    let (energies, numbers) = element_series(&profile, args.photon_scale);
    let title = args
        .figure
        .title
        .clone()
        .unwrap_or_else(|| format!("Neutral atoms with a {}-shell gap", gap));

    let energy_path = args
        .output_dir
        .join(format!("mean_energy_{}-shell.{}", gap, format.extension()));
    let energy_layout = ChartLayout::new(title.clone(), "Atomic number", "Energy (eV)")
        .size(args.figure.width, args.figure.height);
    write_series(&energies, &energy_layout, &energy_path, format)?;
    output::print_success(&format!("Mean energies saved to '{}'", energy_path.display()));

    let number_path = args
        .output_dir
        .join(format!("mean_number_{}-shell.{}", gap, format.extension()));
    let number_layout = ChartLayout::new(title, "Atomic number", "Number of photons / electrons")
        .size(args.figure.width, args.figure.height);
    write_series(&numbers, &number_layout, &number_path, format)?;
    output::print_success(&format!("Mean numbers saved to '{}'", number_path.display()));

    Ok(())
}

/// 能量曲线（橙色）与数目曲线（蓝色）；实线为电子，虚线为光子
pub fn element_series(profile: &Profile<Averages>, photon_scale: f64) -> (Vec<StepSeries>, Vec<StepSeries>) {
    let photon_label = if photon_scale == 1.0 {
        "photons".to_string()
    } else {
        format!("photons (x{})", photon_scale)
    };

    let energies = vec![
        StepSeries::from_profile("electrons", profile, |a| a.electron_energy).color(TAB_ORANGE),
        StepSeries::from_profile(photon_label, profile, |a| a.photon_energy * photon_scale)
            .color(TAB_ORANGE)
            .dashed(true),
    ];
    let numbers = vec![
        StepSeries::from_profile("electrons", profile, |a| a.electron_count).color(TAB_BLUE),
        StepSeries::from_profile("photons", profile, |a| a.photon_count)
            .color(TAB_BLUE)
            .dashed(true),
    ];
    (energies, numbers)
}

fn write_series(
    series: &[StepSeries],
    layout: &ChartLayout,
    path: &Path,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Csv => export::series_to_csv("z", series, path),
        _ => plot::generate_step_chart(series, layout, path, format == OutputFormat::Svg),
    }
}

fn print_element_table(profile: &Profile<Averages>, names: &Nomenclature) {
    let mut builder = Builder::default();
    builder.push_record(["Z", "Element", "N_e", "E_e (eV)", "N_p", "E_p (eV)"]);
    for (z, value) in profile {
        builder.push_record([
            z.to_string(),
            names.element(*z),
            cell(value.map(|a| a.electron_count), 3),
            cell(value.map(|a| a.electron_energy), 1),
            cell(value.map(|a| a.photon_count), 4),
            cell(value.map(|a| a.photon_energy), 1),
        ]);
    }
    println!("{}", builder.build());
}
