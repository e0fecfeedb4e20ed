//! # mean-electrons 子命令实现
//!
//! 中性原子在若干初始空穴壳层下的平均发射电子数随原子序数的变化。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 MeanElectronsArgs
//! - 使用 `analysis/distribution.rs` 的 mean_electron_profile

use super::{cell, resolve_output, DataContext};
use crate::analysis::{mean_electron_profile, Profile};
use crate::cli::analyze::{MeanElectronsArgs, OutputFormat};
use crate::commands::parse_z_range_in;
use crate::error::Result;
use crate::render::series::PALETTE;
use crate::render::{export, plot, ChartLayout, StepSeries};
use crate::utils::output;

use std::path::PathBuf;
use tabled::builder::Builder;

/// 执行 mean-electrons 分析
pub fn execute(args: MeanElectronsArgs, ctx: &DataContext) -> Result<()> {
    output::print_header("Mean Number of Emitted Electrons");

    let z_range = parse_z_range_in(&args.z_range, &ctx.table.elements())?;

    let mut profiles: Vec<(String, Profile<f64>)> = Vec::with_capacity(args.shells.len());
    for shell in &args.shells {
        let shell = ctx.names.parse_shell(shell)?;
        let profile = mean_electron_profile(&ctx.table, shell, z_range.clone());
        profiles.push((ctx.names.shell(shell), profile));
    }

    print_profile_table(&profiles, ctx);

    let series: Vec<StepSeries> = profiles
        .iter()
        .enumerate()
        .map(|(i, (gap, profile))| {
            StepSeries::from_profile(format!("{}-shell", gap), profile, |v| *v)
                .color(PALETTE[i % PALETTE.len()])
        })
        .collect();

    let missing = series
        .iter()
        .flat_map(|s| s.points.iter())
        .filter(|(_, v)| v.is_none())
        .count();
    if missing > 0 {
        output::print_warning(&format!(
            "{} (Z, shell) pairs are absent from the table and left as gaps",
            missing
        ));
    }

    let (output_path, format) = output_target(args.output.clone(), args.figure.format);
    match format {
        OutputFormat::Csv => export::series_to_csv("z", &series, &output_path)?,
        _ => {
            let title = args.figure.title.clone().unwrap_or_else(|| {
                "Average number of electrons emitted during the decay of an inner-shell vacancy"
                    .to_string()
            });
            let layout = ChartLayout::new(title, "Atomic number", "Number of electrons")
                .size(args.figure.width, args.figure.height);
            plot::generate_step_chart(&series, &layout, &output_path, format == OutputFormat::Svg)?;
        }
    }

    output::print_success(&format!("Mean electron numbers saved to '{}'", output_path.display()));
    Ok(())
}

/// 输出路径，默认 mean_electrons.<ext>
fn output_target(output: Option<PathBuf>, format: Option<OutputFormat>) -> (PathBuf, OutputFormat) {
    resolve_output(output, format, "mean_electrons")
}

/// 打印 Z × 壳层表格
fn print_profile_table(profiles: &[(String, Profile<f64>)], ctx: &DataContext) {
    let mut builder = Builder::default();

    let mut header = vec!["Z".to_string(), "Element".to_string()];
    header.extend(profiles.iter().map(|(gap, _)| format!("{}-shell", gap)));
    builder.push_record(header);

    if let Some((_, first)) = profiles.first() {
        for (row, (z, _)) in first.iter().enumerate() {
            let mut record = vec![z.to_string(), ctx.names.element(*z)];
            record.extend(profiles.iter().map(|(_, p)| cell(p[row].1, 3)));
            builder.push_record(record);
        }
    }

    println!("{}", builder.build());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::analyze::FigureArgs;
    use crate::models::Nomenclature;
    use crate::parsers::table2::parse_table2_content;

    const SAMPLE: &str = "\
4 1 1  100 0 3 10000 0 0 0 0 0 0 0 0 0
5 1 1  180 0 7 9000 1000 0 0 0 0 0 0 0 0
5 1 2   10 0 0 10000 0 0 0 0 0 0 0 0 0
";

    fn figure(format: Option<OutputFormat>) -> FigureArgs {
        FigureArgs {
            format,
            width: 1000,
            height: 700,
            title: None,
        }
    }

    #[test]
    fn test_default_output_follows_format() {
        for (format, name) in [
            (None, "mean_electrons.png"),
            (Some(OutputFormat::Png), "mean_electrons.png"),
            (Some(OutputFormat::Svg), "mean_electrons.svg"),
            (Some(OutputFormat::Csv), "mean_electrons.csv"),
        ] {
            let (path, resolved) = output_target(None, format);
            assert_eq!(path, PathBuf::from(name));
            assert_eq!(resolved, format.unwrap_or(OutputFormat::Png));
        }
    }

    #[test]
    fn test_mean_electrons_csv_clamped_to_table() {
        let table = parse_table2_content(SAMPLE, "table2").unwrap();
        let ctx = DataContext::from_parts(Nomenclature::builtin(), table, PathBuf::from("missing"));
        let path = std::env::temp_dir().join(format!("augerkit_mean_{}.csv", std::process::id()));

        execute(
            MeanElectronsArgs {
                shells: vec!["K".to_string(), "L1".to_string()],
                z_range: "1-4294967295".to_string(),
                output: Some(path.clone()),
                figure: figure(None),
            },
            &ctx,
        )
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["z,K-shell,L1-shell", "4,1,", "5,1.1,1"]);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_mean_electrons_range_outside_table() {
        let table = parse_table2_content(SAMPLE, "table2").unwrap();
        let ctx = DataContext::from_parts(Nomenclature::builtin(), table, PathBuf::from("missing"));

        let result = execute(
            MeanElectronsArgs {
                shells: vec!["K".to_string()],
                z_range: "20-30".to_string(),
                output: Some(std::env::temp_dir().join("augerkit_never_written.csv")),
                figure: figure(None),
            },
            &ctx,
        );
        assert!(result.is_err());
    }
}
