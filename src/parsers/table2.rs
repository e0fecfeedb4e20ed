//! # Kaastra & Mewe (1993) Table 2 解析器
//!
//! ## 格式说明
//! ```text
//! # Z  st  s   E_e     E_p    w×1e4  P1 ... P10 (×1e4)
//!   26  1   1  5500.0  2200.0  3400   0  120 1850 3700 2900 1100 300 30 0 0
//! ```
//! 空白分隔，空行和 `#` 开头的行被忽略；每行至少 16 列，多余列忽略。
//! 键列可写为整数或整数值浮点数 (`26` 或 `26.0`)。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/ionisation.rs`, `tables/keyed.rs`

use crate::error::{AugerkitError, Result};
use crate::models::{AugerRecord, MAX_ELECTRONS};
use crate::tables::AugerTable;

use std::fs;
use std::path::Path;

/// Table 2 的最少列数
pub const TABLE2_COLUMNS: usize = 6 + MAX_ELECTRONS;

/// 解析 Table 2 文件
pub fn parse_table2_file(path: &Path) -> Result<AugerTable> {
    let content = fs::read_to_string(path).map_err(|e| AugerkitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_table2_content(&content, &path.display().to_string())
}

/// 从字符串内容解析 Table 2
pub fn parse_table2_content(content: &str, source: &str) -> Result<AugerTable> {
    let mut rows = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let Some(values) = super::numeric_fields(line, "table2", source, line_no + 1)? else {
            continue;
        };

        if values.len() < TABLE2_COLUMNS {
            return Err(AugerkitError::ParseError {
                format: "table2".to_string(),
                path: source.to_string(),
                line: line_no + 1,
                reason: format!(
                    "expected at least {} columns, found {}",
                    TABLE2_COLUMNS,
                    values.len()
                ),
            });
        }

        let key = super::parse_key(&values, "table2", source, line_no + 1)?;

        let mut probabilities_scaled = [0.0; MAX_ELECTRONS];
        probabilities_scaled.copy_from_slice(&values[6..TABLE2_COLUMNS]);

        rows.push(AugerRecord {
            key,
            electron_energy: values[3],
            photon_energy: values[4],
            fluorescence_scaled: values[5],
            probabilities_scaled,
        });
    }

    Ok(AugerTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IonKey;

    const SAMPLE: &str = r#"
# Z st s  Ee      Ep     w     P1   P2   P3   P4   P5   P6  P7  P8 P9 P10
26 1 1  5500.0  2200.0  3400  0    120  1850 3700 2900 1100 300 30 0  0
26 1 2   610.0     0.5     2  0   6200 3500  300    0    0   0  0  0  0
24.0 12.0 3.0  45.0  0.0  0  10000 0 0 0 0 0 0 0 0 0 99 99
"#;

    #[test]
    fn test_parse_table2_basic() {
        let table = parse_table2_content(SAMPLE, "table2").unwrap();
        assert_eq!(table.len(), 3);

        let fe = table.lookup(IonKey::new(26, 1, 1)).unwrap();
        assert_eq!(fe.electron_energy, 5500.0);
        assert_eq!(fe.fluorescence_scaled, 3400.0);
        assert_eq!(fe.probabilities_scaled[3], 3700.0);

        // 多余列被忽略
        let cr = table.lookup(IonKey::new(24, 12, 3)).unwrap();
        assert_eq!(cr.probabilities_scaled[0], 10000.0);
        assert_eq!(cr.probabilities_scaled[9], 0.0);
    }

    #[test]
    fn test_parse_table2_short_row() {
        let err = parse_table2_content("26 1 1 5500 2200 3400 0 1 2\n", "t").unwrap_err();
        match err {
            AugerkitError::ParseError { line, reason, .. } => {
                assert_eq!(line, 1);
                assert!(reason.contains("16"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_table2_bad_number() {
        let text = "26 1 1 5500 2200 3400 0 1 2 3 4 5 6 7 8 x\n";
        assert!(matches!(
            parse_table2_content(text, "t"),
            Err(AugerkitError::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_table2_fractional_key() {
        let text = "26.5 1 1 5500 2200 3400 0 1 2 3 4 5 6 7 8 9\n";
        assert!(parse_table2_content(text, "t").is_err());
    }
}
