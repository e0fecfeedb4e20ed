//! # 发射电子数分布
//!
//! 对给定离子和初始空穴，给出发射 n 个电子的概率 P(n)，
//! 以及中性原子平均发射电子数随 Z 的变化。
//!
//! ## 依赖关系
//! - 被 `commands/analyze/` 调用
//! - 使用 `tables/keyed.rs` 的 AugerTable

use super::Profile;
use crate::error::Result;
use crate::models::IonKey;
use crate::tables::AugerTable;

use std::ops::RangeInclusive;

/// 单个离子的发射电子数分布
#[derive(Debug, Clone)]
pub struct ElectronDistribution {
    pub key: IonKey,
    /// (n, P(n))，n = 1..10
    pub points: Vec<(u32, f64)>,
    /// Σ n·P(n)
    pub mean: f64,
    /// Σ P(n)
    pub total: f64,
}

/// 查询 (Z, st, s) 的分布
pub fn electron_distribution(table: &AugerTable, key: IonKey) -> Result<ElectronDistribution> {
    let record = table.lookup(key)?;

    let points = record
        .distribution()
        .iter()
        .enumerate()
        .map(|(i, p)| (i as u32 + 1, *p))
        .collect();

    Ok(ElectronDistribution {
        key,
        points,
        mean: record.mean_electrons(),
        total: record.total_probability(),
    })
}

/// 中性原子 (st = 1) 在给定壳层空穴下的平均发射电子数，表中缺失处为 None
pub fn mean_electron_profile(
    table: &AugerTable,
    shell: u32,
    z_range: RangeInclusive<u32>,
) -> Profile<f64> {
    z_range
        .map(|z| {
            let mean = table
                .lookup(IonKey::new(z, 1, shell))
                .ok()
                .map(|r| r.mean_electrons());
            (z, mean)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::table2::parse_table2_content;

    const SAMPLE: &str = "\
4 1 1  100 0 3 10000 0 0 0 0 0 0 0 0 0
5 1 1  180 0 7 9000 1000 0 0 0 0 0 0 0 0
5 1 2   10 0 0 10000 0 0 0 0 0 0 0 0 0
26 1 1 5500 2200 3400 0 120 1850 3700 2900 1100 300 30 0 0
";

    #[test]
    fn test_electron_distribution_fe() {
        let table = parse_table2_content(SAMPLE, "mem").unwrap();
        let dist = electron_distribution(&table, IonKey::new(26, 1, 1)).unwrap();

        assert_eq!(dist.points.len(), 10);
        assert_eq!(dist.points[0], (1, 0.0));
        assert_eq!(dist.points[3].0, 4);
        assert!((dist.points[3].1 - 0.37).abs() < 1e-12);

        let weighted: f64 = dist.points.iter().map(|(n, p)| *n as f64 * p).sum();
        assert!((dist.mean - weighted).abs() < 1e-12);
        assert!(dist.total <= 1.0 + 1e-9);
    }

    #[test]
    fn test_electron_distribution_missing() {
        let table = parse_table2_content(SAMPLE, "mem").unwrap();
        assert!(electron_distribution(&table, IonKey::new(26, 2, 1)).is_err());
    }

    #[test]
    fn test_mean_electron_profile_gaps() {
        let table = parse_table2_content(SAMPLE, "mem").unwrap();

        let k = mean_electron_profile(&table, 1, 4..=6);
        assert_eq!(k.len(), 3);
        assert_eq!(k[0], (4, Some(1.0)));
        assert!((k[1].1.unwrap() - 1.1).abs() < 1e-12);
        assert_eq!(k[2], (6, None));

        let l1 = mean_electron_profile(&table, 2, 4..=5);
        assert_eq!(l1, vec![(4, None), (5, Some(1.0))]);
    }
}
