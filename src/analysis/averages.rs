//! # 平均电子/光子数目与能量
//!
//! - `derive_averages`: 由 Table 2 逐行导出平均量表
//! - `stage_profile`: 固定 Z 与壳层，随电离级变化（重复键求和）
//! - `element_profile`: 中性原子，随 Z 变化
//!
//! ## 依赖关系
//! - 被 `commands/analyze/`, `commands/export.rs` 调用
//! - 使用 `tables/keyed.rs`, `models/ionisation.rs`

use super::Profile;
use crate::error::{AugerkitError, Result};
use crate::models::{AverageRecord, Averages, IonKey};
use crate::tables::{AugerTable, AverageTable};

use std::ops::RangeInclusive;

/// 由 Table 2 导出平均量表（保持文件顺序）
pub fn derive_averages(table: &AugerTable) -> AverageTable {
    AverageTable::new(table.rows().iter().map(AverageRecord::from).collect())
}

/// 电离级 1..=Z 上的平均量；同一键的多行相加，无匹配行为 None
///
/// 表中没有该元素时返回 `ElementNotInTable`。
pub fn stage_profile(averages: &AverageTable, z: u32, shell: u32) -> Result<Profile<Averages>> {
    if averages.stages(z).is_empty() {
        return Err(AugerkitError::ElementNotInTable { z });
    }

    let profile = (1..=z)
        .map(|stage| {
            let sum = averages
                .matching(IonKey::new(z, stage, shell))
                .fold(None, |acc: Option<Averages>, row| {
                    let mut total = acc.unwrap_or_default();
                    total += row.averages;
                    Some(total)
                });
            (stage, sum)
        })
        .collect();

    Ok(profile)
}

/// 中性原子在给定壳层空穴下的平均量（取第一个匹配行）
pub fn element_profile(
    averages: &AverageTable,
    shell: u32,
    z_range: RangeInclusive<u32>,
) -> Profile<Averages> {
    z_range
        .map(|z| {
            let value = averages
                .lookup(IonKey::new(z, 1, shell))
                .ok()
                .map(|r| r.averages);
            (z, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::averages::parse_averages_content;
    use crate::parsers::table2::parse_table2_content;

    #[test]
    fn test_derive_averages() {
        let text = "26 1 1 5500 2200 3400 0 120 1850 3700 2900 1100 300 30 0 0\n";
        let table = parse_table2_content(text, "mem").unwrap();
        let avg = derive_averages(&table);

        assert_eq!(avg.len(), 1);
        let row = avg.lookup(IonKey::new(26, 1, 1)).unwrap();
        assert!((row.averages.electron_count - 4.403).abs() < 1e-9);
        assert!((row.averages.photon_count - 0.34).abs() < 1e-12);
        assert_eq!(row.averages.electron_energy, 5500.0);
    }

    #[test]
    fn test_stage_profile_sums_duplicates() {
        let text = "\
4 1 1 1.0 100 0.1 10
4 1 1 0.5 50 0.2 5
4 3 1 1.0 80 0.0 0
4 1 2 9.0 9 9.0 9
";
        let avg = parse_averages_content(text, "mem").unwrap();
        let profile = stage_profile(&avg, 4, 1).unwrap();

        assert_eq!(profile.len(), 4);
        let first = profile[0].1.unwrap();
        assert!((first.electron_count - 1.5).abs() < 1e-12);
        assert!((first.electron_energy - 150.0).abs() < 1e-12);
        assert!((first.photon_count - 0.3).abs() < 1e-12);
        assert_eq!(profile[1], (2, None));
        assert_eq!(profile[2].1.unwrap().electron_energy, 80.0);
        assert_eq!(profile[3], (4, None));
    }

    #[test]
    fn test_element_profile_neutral_only() {
        let text = "\
6 1 1 1.0 250 0.003 1
6 2 1 2.0 240 0.002 1
8 1 1 1.1 500 0.006 3
";
        let avg = parse_averages_content(text, "mem").unwrap();
        let profile = element_profile(&avg, 1, 6..=8);

        assert_eq!(profile[0].1.unwrap().electron_count, 1.0);
        assert_eq!(profile[1], (7, None));
        assert_eq!(profile[2].1.unwrap().electron_energy, 500.0);
    }

    #[test]
    fn test_stage_profile_rejects_absent_element() {
        let avg = parse_averages_content("26 1 1 4.4 5500 0.34 2200\n", "mem").unwrap();

        assert!(matches!(
            stage_profile(&avg, 3_000_000, 1),
            Err(AugerkitError::ElementNotInTable { z: 3_000_000 })
        ));
        assert!(matches!(
            stage_profile(&avg, 8, 1),
            Err(AugerkitError::ElementNotInTable { z: 8 })
        ));

        // 元素存在但壳层缺失时只留空
        let profile = stage_profile(&avg, 26, 2).unwrap();
        assert_eq!(profile.len(), 26);
        assert!(profile.iter().all(|(_, v)| v.is_none()));
    }

    #[test]
    fn test_element_profile_absent_elements_are_gaps() {
        let avg = parse_averages_content("26 1 1 4.4 5500 0.34 2200\n", "mem").unwrap();
        let profile = element_profile(&avg, 1, 4..=6);
        assert_eq!(profile, vec![(4, None), (5, None), (6, None)]);
    }
}
