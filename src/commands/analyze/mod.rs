//! # analyze 命令实现
//!
//! 分析功能统一入口，包含多个子命令：
//! - `distribution`: 发射电子数概率分布
//! - `mean-electrons`: 平均发射电子数随 Z 变化
//! - `stages`: 平均量随电离级变化
//! - `elements`: 中性原子平均量随 Z 变化
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的参数
//! - 子模块: distribution, mean_electrons, stages, elements

pub mod distribution;
pub mod elements;
pub mod mean_electrons;
pub mod stages;

use super::context::DataContext;
use crate::cli::analyze::{guess_format_from_extension, AnalyzeArgs, AnalyzeCommands, OutputFormat};
use crate::error::Result;

use std::path::{Path, PathBuf};

/// 执行 analyze 命令
pub fn execute(args: AnalyzeArgs, ctx: &DataContext) -> Result<()> {
    match args.command {
        AnalyzeCommands::Distribution(a) => distribution::execute(a, ctx),
        AnalyzeCommands::MeanElectrons(a) => mean_electrons::execute(a, ctx),
        AnalyzeCommands::Stages(a) => stages::execute(a, ctx),
        AnalyzeCommands::Elements(a) => elements::execute(a, ctx),
    }
}

/// 确定输出格式：显式指定优先，否则按扩展名
fn resolve_format(format: Option<OutputFormat>, output: &Path) -> OutputFormat {
    format.unwrap_or_else(|| guess_format_from_extension(output))
}

/// 输出路径与格式；未给出路径时为 `<stem>.<ext>`，格式默认 PNG
fn resolve_output(
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    stem: &str,
) -> (PathBuf, OutputFormat) {
    match output {
        Some(path) => {
            let format = resolve_format(format, &path);
            (path, format)
        }
        None => {
            let format = format.unwrap_or(OutputFormat::Png);
            (PathBuf::from(format!("{}.{}", stem, format.extension())), format)
        }
    }
}

/// 表格中的数值单元格
fn cell(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "-".to_string())
}
