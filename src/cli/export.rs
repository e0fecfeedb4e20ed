//! # export 子命令 CLI 定义
//!
//! 由 Table 2 导出平均电子/光子数目与能量表。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use clap::Args;
use std::path::PathBuf;

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file; a .csv extension writes CSV, anything else the whitespace table
    /// (default: --averages, or <data-dir>/avg_photons_electrons2)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
