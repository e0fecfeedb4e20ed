//! # 平均量表解析与写出
//!
//! ## 格式说明
//! ```text
//! # Z st s N_e E_e N_p E_p
//! 26 1 1 4.2431 5500.0 0.3400 2200.0
//! ```
//! 空白分隔，恰好 7 列。写出格式可被本模块重新读入。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 被 `commands/export.rs` 用于写出
//! - 使用 `models/ionisation.rs`, `tables/keyed.rs`

use crate::error::{AugerkitError, Result};
use crate::models::{AverageRecord, Averages};
use crate::tables::AverageTable;

use std::fs;
use std::path::Path;

/// 平均量表列数
pub const AVERAGES_COLUMNS: usize = 7;

/// 解析平均量表文件
pub fn parse_averages_file(path: &Path) -> Result<AverageTable> {
    let content = fs::read_to_string(path).map_err(|e| AugerkitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_averages_content(&content, &path.display().to_string())
}

/// 从字符串内容解析平均量表
pub fn parse_averages_content(content: &str, source: &str) -> Result<AverageTable> {
    let mut rows = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let Some(values) = super::numeric_fields(line, "averages", source, line_no + 1)? else {
            continue;
        };

        if values.len() != AVERAGES_COLUMNS {
            return Err(AugerkitError::ParseError {
                format: "averages".to_string(),
                path: source.to_string(),
                line: line_no + 1,
                reason: format!(
                    "expected {} columns, found {}",
                    AVERAGES_COLUMNS,
                    values.len()
                ),
            });
        }

        rows.push(AverageRecord {
            key: super::parse_key(&values, "averages", source, line_no + 1)?,
            averages: Averages {
                electron_count: values[3],
                electron_energy: values[4],
                photon_count: values[5],
                photon_energy: values[6],
            },
        });
    }

    Ok(AverageTable::new(rows))
}

/// 生成平均量表文本
pub fn to_averages_string(table: &AverageTable) -> String {
    let mut out = String::new();
    out.push_str("# Z st s N_e E_e N_p E_p\n");

    for row in table.rows() {
        let a = &row.averages;
        out.push_str(&format!(
            "{} {} {} {:.6} {:.4} {:.6} {:.4}\n",
            row.key.z,
            row.key.stage,
            row.key.shell,
            a.electron_count,
            a.electron_energy,
            a.photon_count,
            a.photon_energy
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IonKey;

    #[test]
    fn test_parse_averages() {
        let text = "# header\n26 1 1 4.2 5500 0.34 2200\n\n26 2 1 4.0 5400 0.33 2150\n";
        let table = parse_averages_content(text, "avg").unwrap();
        assert_eq!(table.len(), 2);

        let row = table.lookup(IonKey::new(26, 2, 1)).unwrap();
        assert_eq!(row.averages.electron_count, 4.0);
        assert_eq!(row.averages.photon_energy, 2150.0);
    }

    #[test]
    fn test_parse_averages_wrong_width() {
        let text = "26 1 1 4.2 5500 0.34\n";
        assert!(matches!(
            parse_averages_content(text, "avg"),
            Err(AugerkitError::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_written_table_reads_back() {
        let table = AverageTable::new(vec![AverageRecord {
            key: IonKey::new(8, 1, 1),
            averages: Averages {
                electron_count: 1.0059,
                electron_energy: 508.25,
                photon_count: 0.0059,
                photon_energy: 3.1,
            },
        }]);

        let text = to_averages_string(&table);
        let back = parse_averages_content(&text, "mem").unwrap();
        let row = back.lookup(IonKey::new(8, 1, 1)).unwrap();
        assert!((row.averages.electron_count - 1.0059).abs() < 1e-9);
        assert!((row.averages.electron_energy - 508.25).abs() < 1e-9);
    }
}
