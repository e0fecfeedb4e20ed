//! # render-all 命令实现
//!
//! 为表中每个 (Z, st, s) 绘制发射电子数分布图，
//! 文件名为 graph_<element>_<stage>_<shell>.<ext>。
//!
//! ## 依赖关系
//! - 使用 `cli/render_all.rs` 定义的参数
//! - 使用 `batch/runner.rs` 依次处理
//! - 复用 `commands/analyze/distribution.rs` 的命名与绘图

use super::analyze::distribution::{default_file_name, distribution_title, write_distributions};
use super::context::DataContext;
use super::parse_z_range;
use crate::analysis::electron_distribution;
use crate::batch::{BatchRunner, ProcessResult};
use crate::cli::render_all::RenderAllArgs;
use crate::error::{AugerkitError, Result};
use crate::models::IonKey;
use crate::render::ChartLayout;
use crate::utils::output;

use std::fs;

/// 执行 render-all 命令
pub fn execute(args: RenderAllArgs, ctx: &DataContext) -> Result<()> {
    output::print_header(&format!("Rendering distributions as {}", args.format));

    let keys = select_keys(&args, ctx)?;
    if keys.is_empty() {
        output::print_warning("No table entries match the selection");
        return Ok(());
    }
    output::print_info(&format!("Found {} entries to render", keys.len()));

    if !args.output_dir.exists() {
        fs::create_dir_all(&args.output_dir).map_err(|e| AugerkitError::FileWriteError {
            path: args.output_dir.display().to_string(),
            source: e,
        })?;
    }

    let runner = BatchRunner::new("Rendering");
    let result = runner.run(&keys, |key| render_one(*key, &args, ctx));

    output::print_separator();
    output::print_done(&format!(
        "Batch complete: {} entries, {} success, {} skipped, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed entries:");
        for (name, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", name, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 按 Z 范围与壳层筛选键（首次出现顺序）
fn select_keys(args: &RenderAllArgs, ctx: &DataContext) -> Result<Vec<IonKey>> {
    let z_range = args.z_range.as_deref().map(parse_z_range).transpose()?;
    let shell = args
        .shell
        .as_deref()
        .map(|s| ctx.names.parse_shell(s))
        .transpose()?;

    Ok(ctx
        .table
        .keys()
        .into_iter()
        .filter(|key| z_range.as_ref().map_or(true, |r| r.contains(&key.z)))
        .filter(|key| shell.map_or(true, |s| key.shell == s))
        .collect())
}

fn render_one(key: IonKey, args: &RenderAllArgs, ctx: &DataContext) -> ProcessResult {
    let name = default_file_name(&ctx.names, key, args.format);
    let path = args.output_dir.join(&name);

    if path.exists() && !args.overwrite {
        return ProcessResult::Skipped;
    }

    let layout = ChartLayout::new(
        distribution_title(&ctx.names, key),
        "Number of emitted electrons",
        "Probability",
    )
    .size(args.width, args.height);

    let written = electron_distribution(&ctx.table, key)
        .and_then(|dist| write_distributions(&[dist], &ctx.names, &layout, &path, args.format));

    match written {
        Ok(()) => ProcessResult::Success,
        Err(e) => ProcessResult::Failed(name, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::analyze::OutputFormat;
    use crate::models::Nomenclature;
    use crate::parsers::table2::parse_table2_content;

    use std::path::PathBuf;

    const SAMPLE: &str = "\
6 1 1  250 0 2 10000 0 0 0 0 0 0 0 0 0
26 1 1 5500 2200 3400 0 120 1850 3700 2900 1100 300 30 0 0
26 1 2 700 0 0 2000 8000 0 0 0 0 0 0 0 0
";

    fn args(output_dir: PathBuf) -> RenderAllArgs {
        RenderAllArgs {
            output_dir,
            z_range: Some("20-30".to_string()),
            shell: None,
            format: OutputFormat::Csv,
            width: 1000,
            height: 700,
            overwrite: false,
        }
    }

    #[test]
    fn test_render_all_csv() {
        let table = parse_table2_content(SAMPLE, "table2").unwrap();
        let ctx = DataContext::from_parts(Nomenclature::builtin(), table, PathBuf::from("missing"));
        let dir = std::env::temp_dir().join(format!("augerkit_render_all_{}", std::process::id()));
        fs::remove_dir_all(&dir).ok();

        let a = args(dir.clone());
        assert_eq!(select_keys(&a, &ctx).unwrap().len(), 2);

        execute(a, &ctx).unwrap();
        assert!(dir.join("graph_Fe_I_K.csv").is_file());
        assert!(dir.join("graph_Fe_I_L1.csv").is_file());
        assert!(!dir.join("graph_C_I_K.csv").exists());

        let again = render_one(IonKey::new(26, 1, 1), &args(dir.clone()), &ctx);
        assert!(matches!(again, ProcessResult::Skipped));

        fs::remove_dir_all(&dir).ok();
    }
}
