//! # analyze 子命令 CLI 定义
//!
//! 分析功能统一入口，包含多个子命令：
//! - `distribution`: 发射电子数概率分布
//! - `mean-electrons`: 平均发射电子数随 Z 变化
//! - `stages`: 平均量随电离级变化
//! - `elements`: 中性原子平均量随 Z 变化
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/analyze/` 相应模块

use clap::{Args, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────
// Analyze 主命令
// ─────────────────────────────────────────────────────────────

/// analyze 主命令参数
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(subcommand)]
    pub command: AnalyzeCommands,
}

/// analyze 子命令
#[derive(Subcommand, Debug)]
pub enum AnalyzeCommands {
    /// Probability of emitting 1..10 electrons for an ion and initial vacancy
    Distribution(DistributionArgs),

    /// Mean number of emitted electrons of neutral atoms versus atomic number
    MeanElectrons(MeanElectronsArgs),

    /// Mean electron/photon numbers and energies versus ionisation stage
    Stages(StagesArgs),

    /// Mean electron/photon numbers and energies of neutral atoms versus atomic number
    Elements(ElementsArgs),
}

// ─────────────────────────────────────────────────────────────
// 共享输出参数
// ─────────────────────────────────────────────────────────────

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Csv => "csv",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// 从文件扩展名推断输出格式
pub fn guess_format_from_extension(path: &Path) -> OutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => OutputFormat::Svg,
        Some("csv") => OutputFormat::Csv,
        _ => OutputFormat::Png,
    }
}

/// 图像参数
#[derive(Args, Debug, Clone)]
pub struct FigureArgs {
    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 700)]
    pub height: u32,

    /// Title for the plot (default: generated from the query)
    #[arg(long)]
    pub title: Option<String>,
}

// ─────────────────────────────────────────────────────────────
// 分布子命令
// ─────────────────────────────────────────────────────────────

/// distribution 子命令参数
#[derive(Args, Debug)]
pub struct DistributionArgs {
    /// Ion: "Fe I", "Cr XII", "Fe12" or "26 1"; repeat to overlay several ions
    #[arg(short, long = "ion", default_value = "Fe I")]
    pub ions: Vec<String>,

    /// Shell of the initial vacancy: K, L1, L_1, ... or its index
    #[arg(short, long, default_value = "K")]
    pub shell: String,

    /// Output file (default: graph_<element>_<stage>_<shell>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the table only, skip the output file
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    #[command(flatten)]
    pub figure: FigureArgs,
}

// ─────────────────────────────────────────────────────────────
// 平均电子数子命令
// ─────────────────────────────────────────────────────────────

/// mean-electrons 子命令参数
#[derive(Args, Debug)]
pub struct MeanElectronsArgs {
    /// Shells of the initial vacancy; one curve per shell
    #[arg(short, long = "shell", default_values_t = vec!["K".to_string(), "L1".to_string(), "M1".to_string()])]
    pub shells: Vec<String>,

    /// Atomic number range (e.g., "4-30")
    #[arg(short, long, default_value = "4-30")]
    pub z_range: String,

    /// Output file (default: mean_electrons.<format>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub figure: FigureArgs,
}

// ─────────────────────────────────────────────────────────────
// 电离级子命令
// ─────────────────────────────────────────────────────────────

/// stages 子命令参数
#[derive(Args, Debug)]
pub struct StagesArgs {
    /// Element symbol or atomic number
    #[arg(short, long, default_value = "Fe")]
    pub element: String,

    /// Shell of the initial vacancy
    #[arg(short, long, default_value = "K")]
    pub shell: String,

    /// Multiplier applied to the photon energy curve
    #[arg(long, default_value_t = 1.0)]
    pub photon_scale: f64,

    /// Output file (default: stages_<element>_<shell>.<format>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub figure: FigureArgs,
}

// ─────────────────────────────────────────────────────────────
// 元素子命令
// ─────────────────────────────────────────────────────────────

/// elements 子命令参数
#[derive(Args, Debug)]
pub struct ElementsArgs {
    /// Shell of the initial vacancy
    #[arg(short, long, default_value = "K")]
    pub shell: String,

    /// Atomic number range (e.g., "4-30")
    #[arg(short, long, default_value = "4-30")]
    pub z_range: String,

    /// Multiplier applied to the photon energy curve
    #[arg(long, default_value_t = 1.0)]
    pub photon_scale: f64,

    /// Directory for mean_energy_<shell>-shell and mean_number_<shell>-shell
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub figure: FigureArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_format() {
        assert_eq!(guess_format_from_extension(Path::new("a.svg")), OutputFormat::Svg);
        assert_eq!(guess_format_from_extension(Path::new("a.CSV")), OutputFormat::Csv);
        assert_eq!(guess_format_from_extension(Path::new("graph")), OutputFormat::Png);
    }
}
