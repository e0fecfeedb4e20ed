//! # export 命令实现
//!
//! 由 Table 2 导出平均电子/光子数目与能量表 (avg_photons_electrons2)。
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `analysis/averages.rs`, `render/export.rs`

use super::context::DataContext;
use crate::analysis::derive_averages;
use crate::cli::analyze::{guess_format_from_extension, OutputFormat};
use crate::cli::export::ExportArgs;
use crate::error::Result;
use crate::render::export;
use crate::utils::output;

/// 执行 export 命令
pub fn execute(args: ExportArgs, ctx: &DataContext) -> Result<()> {
    output::print_header("Exporting Mean Electron/Photon Table");

    let output_path = args
        .output
        .unwrap_or_else(|| ctx.averages_path().to_path_buf());

    if output_path.exists() && !args.overwrite {
        output::print_skip(&format!(
            "'{}' already exists (use --overwrite to replace it)",
            output_path.display()
        ));
        return Ok(());
    }

    let averages = derive_averages(&ctx.table);

    match guess_format_from_extension(&output_path) {
        OutputFormat::Csv => export::averages_to_csv(&averages, &output_path)?,
        _ => export::averages_to_text(&averages, &output_path)?,
    }

    output::print_done(&format!(
        "Wrote {} rows to '{}'",
        averages.len(),
        output_path.display()
    ));
    Ok(())
}
