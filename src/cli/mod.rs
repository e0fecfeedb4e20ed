//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `analyze`: 分析功能（嵌套子命令）
//!   - `distribution`: 发射电子数概率分布
//!   - `mean-electrons`: 中性原子平均发射电子数随 Z 变化
//!   - `stages`: 平均电子/光子数目与能量随电离级变化
//!   - `elements`: 中性原子平均电子/光子数目与能量随 Z 变化
//! - `export`: 导出平均量表
//! - `inspect`: 表格概况与自洽性检查
//! - `render-all`: 批量绘制所有分布图
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: analyze, export, inspect, render_all

pub mod analyze;
pub mod export;
pub mod inspect;
pub mod render_all;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// augerkit - 内壳层电离 Auger 数据工具箱
#[derive(Parser)]
#[command(name = "augerkit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Emitted-electron distributions, fluorescence yields and mean energies from the Kaastra & Mewe (1993) inner-shell ionisation tables",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// 数据文件位置（全局参数，可由环境变量设置）
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Directory holding table2, avg_photons_electrons2 and the name files
    #[arg(long, global = true, env = "AUGERKIT_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Path to Kaastra & Mewe Table 2 (default: <data-dir>/table2)
    #[arg(long, global = true, env = "AUGERKIT_TABLE")]
    pub table: Option<PathBuf>,

    /// Path to the derived averages table (default: <data-dir>/avg_photons_electrons2)
    #[arg(long, global = true, env = "AUGERKIT_AVERAGES")]
    pub averages: Option<PathBuf>,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze emitted electrons and photons for inner-shell vacancies
    Analyze(analyze::AnalyzeArgs),

    /// Write the derived mean electron/photon table (avg_photons_electrons2)
    Export(export::ExportArgs),

    /// Summarize the table and check probability sums and mean counts
    Inspect(inspect::InspectArgs),

    /// Render the emitted-electron distribution of every table entry
    RenderAll(render_all::RenderAllArgs),
}
