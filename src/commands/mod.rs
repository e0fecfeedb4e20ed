//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `analysis/`, `render/`, `utils/`
//! - 子模块: context, analyze, export, inspect, render_all

pub mod analyze;
pub mod context;
pub mod export;
pub mod inspect;
pub mod render_all;

use crate::cli::{Cli, Commands};
use crate::error::{AugerkitError, Result};

use context::DataContext;
use std::ops::RangeInclusive;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let ctx = DataContext::load(&cli.data)?;

    match cli.command {
        Commands::Analyze(args) => analyze::execute(args, &ctx),
        Commands::Export(args) => export::execute(args, &ctx),
        Commands::Inspect(args) => inspect::execute(args, &ctx),
        Commands::RenderAll(args) => render_all::execute(args, &ctx),
    }
}

/// 解析原子序数范围 (e.g., "4-30" 或 "26")
pub(crate) fn parse_z_range(range: &str) -> Result<RangeInclusive<u32>> {
    let invalid = || AugerkitError::InvalidRange(range.to_string());
    let parts: Vec<&str> = range.split('-').map(str::trim).collect();

    let (start, end) = match parts.as_slice() {
        [single] => {
            let z: u32 = single.parse().map_err(|_| invalid())?;
            (z, z)
        }
        [start, end] => (
            start.parse().map_err(|_| invalid())?,
            end.parse().map_err(|_| invalid())?,
        ),
        _ => return Err(invalid()),
    };

    if start < 1 || end < start {
        return Err(AugerkitError::InvalidRange(format!(
            "{} (must be 1 <= min <= max)",
            range
        )));
    }

    Ok(start..=end)
}

/// 解析原子序数范围并截取到表中出现的元素范围内
pub(crate) fn parse_z_range_in(range: &str, elements: &[u32]) -> Result<RangeInclusive<u32>> {
    let requested = parse_z_range(range)?;

    let (Some(&min), Some(&max)) = (elements.first(), elements.last()) else {
        return Err(AugerkitError::InvalidRange(format!("{} (table is empty)", range)));
    };

    let start = (*requested.start()).max(min);
    let end = (*requested.end()).min(max);
    if start > end {
        return Err(AugerkitError::InvalidRange(format!(
            "{} (table covers Z = {}-{})",
            range, min, max
        )));
    }

    Ok(start..=end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_z_range() {
        assert_eq!(parse_z_range("4-30").unwrap(), 4..=30);
        assert_eq!(parse_z_range("26").unwrap(), 26..=26);
        assert_eq!(parse_z_range(" 5 - 8 ").unwrap(), 5..=8);
        assert!(parse_z_range("30-4").is_err());
        assert!(parse_z_range("0-4").is_err());
        assert!(parse_z_range("a-b").is_err());
        assert!(parse_z_range("1-2-3").is_err());
    }

    #[test]
    fn test_parse_z_range_in_table() {
        let elements = [4, 6, 26, 30];
        assert_eq!(parse_z_range_in("4-30", &elements).unwrap(), 4..=30);
        assert_eq!(parse_z_range_in("1-4294967295", &elements).unwrap(), 4..=30);
        assert_eq!(parse_z_range_in("20-26", &elements).unwrap(), 20..=26);
        assert!(parse_z_range_in("31-40", &elements).is_err());
        assert!(parse_z_range_in("1-3", &elements).is_err());
        assert!(parse_z_range_in("4-30", &[]).is_err());
    }
}
