//! # 数据导出
//!
//! 将分布、序列和平均量表导出为 CSV 或空白分隔文本。
//!
//! ## 支持格式
//! - 分布 CSV: `electrons,probability`
//! - 序列 CSV: 横坐标列 + 每条曲线一列，缺失值为空单元格
//! - 平均量表: CSV（带表头）或与输入相同的空白分隔格式
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `analysis/` 的结果结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::analysis::ElectronDistribution;
use crate::error::{AugerkitError, Result};
use crate::parsers::to_averages_string;
use crate::render::series::StepSeries;
use crate::tables::AverageTable;

use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct DistributionRow {
    electrons: u32,
    probability: f64,
}

#[derive(Serialize)]
struct AverageRow {
    z: u32,
    stage: u32,
    shell: u32,
    n_e: f64,
    e_e: f64,
    n_p: f64,
    e_p: f64,
}

/// 导出分布为 CSV
pub fn distribution_to_csv(dist: &ElectronDistribution, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for (n, p) in &dist.points {
        wtr.serialize(DistributionRow {
            electrons: *n,
            probability: *p,
        })?;
    }

    wtr.flush().map_err(|e| AugerkitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出若干条曲线为 CSV（按横坐标对齐）
pub fn series_to_csv(x_name: &str, series: &[StepSeries], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut header = vec![x_name.to_string()];
    header.extend(series.iter().map(|s| s.label.clone()));
    wtr.write_record(&header)?;

    // 横坐标为整数（Z、电离级、电子数）
    let xs: BTreeSet<i64> = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(x, _)| x.round() as i64))
        .collect();

    for x in xs {
        let mut record = vec![x.to_string()];
        for s in series {
            let cell = s
                .points
                .iter()
                .find(|(px, _)| px.round() as i64 == x)
                .and_then(|(_, y)| *y)
                .map(|y| y.to_string())
                .unwrap_or_default();
            record.push(cell);
        }
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| AugerkitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出平均量表为 CSV
pub fn averages_to_csv(table: &AverageTable, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in table.rows() {
        let a = &row.averages;
        wtr.serialize(AverageRow {
            z: row.key.z,
            stage: row.key.stage,
            shell: row.key.shell,
            n_e: a.electron_count,
            e_e: a.electron_energy,
            n_p: a.photon_count,
            e_p: a.photon_energy,
        })?;
    }

    wtr.flush().map_err(|e| AugerkitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出平均量表为空白分隔文本
pub fn averages_to_text(table: &AverageTable, output_path: &Path) -> Result<()> {
    fs::write(output_path, to_averages_string(table)).map_err(|e| AugerkitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AverageRecord, Averages, IonKey};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("augerkit_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_series_to_csv_aligns_and_blanks() {
        let path = temp_path("series.csv");
        let series = vec![
            StepSeries::new("K-shell", vec![(4.0, Some(1.0)), (5.0, Some(1.1))]),
            StepSeries::new("L1-shell", vec![(4.0, None), (5.0, Some(1.0))]),
        ];

        series_to_csv("Z", &series, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Z,K-shell,L1-shell");
        assert_eq!(lines[1], "4,1,");
        assert_eq!(lines[2], "5,1.1,1");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_distribution_to_csv() {
        let path = temp_path("dist.csv");
        let dist = ElectronDistribution {
            key: IonKey::new(26, 1, 1),
            points: vec![(1, 0.0), (2, 0.5), (3, 0.5)],
            mean: 2.5,
            total: 1.0,
        };

        distribution_to_csv(&dist, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("electrons,probability\n"));
        assert!(text.contains("2,0.5\n"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_averages_to_csv_header() {
        let path = temp_path("avg.csv");
        let table = AverageTable::new(vec![AverageRecord {
            key: IonKey::new(8, 1, 1),
            averages: Averages {
                electron_count: 1.0,
                electron_energy: 500.0,
                photon_count: 0.25,
                photon_energy: 3.0,
            },
        }]);

        averages_to_csv(&table, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().next(), Some("z,stage,shell,n_e,e_e,n_p,e_p"));
        assert_eq!(text.lines().nth(1), Some("8,1,1,1.0,500.0,0.25,3.0"));
        fs::remove_file(&path).ok();
    }
}
