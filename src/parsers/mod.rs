//! # 解析器模块
//!
//! 读取空白分隔的平面文本表格：Kaastra & Mewe Table 2、导出平均量表和命名对照表。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/`, `tables/`
//! - 子模块: table2, averages, names

pub mod averages;
pub mod names;
pub mod table2;

pub use averages::{parse_averages_file, to_averages_string};
pub use names::load_nomenclature;
pub use table2::parse_table2_file;

use crate::error::{AugerkitError, Result};
use crate::models::IonKey;

/// 将一行拆分为浮点数；空行和注释行返回 None
fn numeric_fields(
    line: &str,
    format: &str,
    source: &str,
    line_no: usize,
) -> Result<Option<Vec<f64>>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    line.split_whitespace()
        .map(|field| {
            field.parse::<f64>().map_err(|_| AugerkitError::ParseError {
                format: format.to_string(),
                path: source.to_string(),
                line: line_no,
                reason: format!("'{}' is not a number", field),
            })
        })
        .collect::<Result<Vec<f64>>>()
        .map(Some)
}

/// 从前三列读取 (Z, st, s)，要求为正整数
fn parse_key(values: &[f64], format: &str, source: &str, line_no: usize) -> Result<IonKey> {
    let mut parts = [0u32; 3];

    for (slot, value) in parts.iter_mut().zip(values.iter()) {
        if value.fract() != 0.0 || *value < 1.0 || *value > u32::MAX as f64 {
            return Err(AugerkitError::ParseError {
                format: format.to_string(),
                path: source.to_string(),
                line: line_no,
                reason: format!("key column value {} is not a positive integer", value),
            });
        }
        *slot = *value as u32;
    }

    Ok(IonKey::new(parts[0], parts[1], parts[2]))
}
