//! # render-all 子命令 CLI 定义
//!
//! 为表中每个 (Z, st, s) 绘制发射电子数分布图。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/render_all.rs`

use super::analyze::OutputFormat;

use clap::Args;
use std::path::PathBuf;

/// render-all 子命令参数
#[derive(Args, Debug)]
pub struct RenderAllArgs {
    /// Output directory
    #[arg(short, long, default_value = "distributions")]
    pub output_dir: PathBuf,

    /// Atomic number range (e.g., "4-30"); all elements if omitted
    #[arg(short, long)]
    pub z_range: Option<String>,

    /// Restrict to one initial-vacancy shell
    #[arg(short, long)]
    pub shell: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: OutputFormat,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 700)]
    pub height: u32,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
