//! # 表格自洽性检查
//!
//! 对每个键检查：
//! 1. 概率总和 ≤ 1（允许 /10000 舍入误差）
//! 2. 若提供平均量表，其 N_e 等于 Table 2 的概率加权和
//!
//! 重复键只报告，不视为错误。
//!
//! ## 依赖关系
//! - 被 `commands/inspect.rs` 调用
//! - 使用 `tables/keyed.rs`

use crate::models::IonKey;
use crate::tables::{AugerTable, AverageTable};

/// 检查结果
#[derive(Debug, Clone, Default)]
pub struct TableReport {
    pub rows: usize,
    pub keys: usize,
    pub elements: Vec<u32>,
    /// 出现过的初始空穴壳层（升序）
    pub shells: Vec<u32>,
    /// (键, 出现次数)
    pub duplicates: Vec<(IonKey, usize)>,
    /// (键, 概率总和)，按总和降序
    pub over_unity: Vec<(IonKey, f64)>,
    /// (键, Table 2 加权和, 平均量表 N_e)，按偏差降序
    pub mean_mismatches: Vec<(IonKey, f64, f64)>,
    /// 平均量表中没有对应行的键
    pub missing_averages: Vec<IonKey>,
}

impl TableReport {
    pub fn is_consistent(&self) -> bool {
        self.over_unity.is_empty() && self.mean_mismatches.is_empty()
    }
}

/// 检查 Table 2（以及可选的平均量表）
pub fn check_table(
    table: &AugerTable,
    averages: Option<&AverageTable>,
    tolerance: f64,
) -> TableReport {
    let mut shells: Vec<u32> = table.rows().iter().map(|r| r.key.shell).collect();
    shells.sort_unstable();
    shells.dedup();

    let mut report = TableReport {
        rows: table.len(),
        keys: table.keys().len(),
        elements: table.elements(),
        shells,
        duplicates: table.duplicate_keys(),
        ..TableReport::default()
    };

    for record in table.rows() {
        let total = record.total_probability();
        if total > 1.0 + tolerance {
            report.over_unity.push((record.key, total));
        }
    }

    if let Some(averages) = averages {
        for key in table.keys() {
            let Ok(record) = table.lookup(key) else {
                continue;
            };
            let expected = record.mean_electrons();

            match averages.lookup(key) {
                Ok(row) => {
                    if (row.averages.electron_count - expected).abs() > tolerance {
                        report
                            .mean_mismatches
                            .push((key, expected, row.averages.electron_count));
                    }
                }
                Err(_) => report.missing_averages.push(key),
            }
        }
    }

    report.over_unity.sort_by(|a, b| b.1.total_cmp(&a.1));
    report
        .mean_mismatches
        .sort_by(|a, b| (b.1 - b.2).abs().total_cmp(&(a.1 - a.2).abs()));

    report
}
