//! # 数据上下文
//!
//! 每次运行载入一次 Table 2 与命名对照表，平均量表按需读取或导出。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 构造
//! - 使用 `cli/mod.rs` 的 DataArgs
//! - 使用 `parsers/`, `analysis/averages.rs`

use crate::analysis::derive_averages;
use crate::cli::DataArgs;
use crate::error::{AugerkitError, Result};
use crate::models::Nomenclature;
use crate::parsers;
use crate::tables::{AugerTable, AverageTable};
use crate::utils::output;

use std::path::{Path, PathBuf};

/// Table 2 默认文件名
pub const TABLE2_FILE: &str = "table2";

/// 平均量表默认文件名
pub const AVERAGES_FILE: &str = "avg_photons_electrons2";

/// 已载入的数据
pub struct DataContext {
    pub names: Nomenclature,
    pub table: AugerTable,
    averages_path: PathBuf,
    averages_explicit: bool,
}

impl DataContext {
    /// 载入 Table 2 与命名对照表
    pub fn load(data: &DataArgs) -> Result<Self> {
        if !data.data_dir.is_dir() {
            return Err(AugerkitError::DirectoryNotFound {
                path: data.data_dir.display().to_string(),
            });
        }

        let table_path = data
            .table
            .clone()
            .unwrap_or_else(|| data.data_dir.join(TABLE2_FILE));

        if !table_path.is_file() {
            return Err(AugerkitError::FileNotFound {
                path: table_path.display().to_string(),
            });
        }

        let table = parsers::parse_table2_file(&table_path)?;
        if table.is_empty() {
            output::print_warning(&format!("'{}' holds no entries", table_path.display()));
        }
        output::print_info(&format!(
            "Loaded {} entries for {} elements from '{}'",
            table.len(),
            table.elements().len(),
            table_path.display()
        ));

        let names = parsers::load_nomenclature(&data.data_dir)?;

        let averages_path = data
            .averages
            .clone()
            .unwrap_or_else(|| data.data_dir.join(AVERAGES_FILE));

        let mut ctx = DataContext::from_parts(names, table, averages_path);
        ctx.averages_explicit = data.averages.is_some();
        Ok(ctx)
    }

    /// 从已有上下文构造（不读取文件）
    pub fn from_parts(names: Nomenclature, table: AugerTable, averages_path: PathBuf) -> Self {
        DataContext {
            names,
            table,
            averages_path,
            averages_explicit: false,
        }
    }

    /// 平均量表路径（--averages 或 <data-dir>/avg_photons_electrons2）
    pub fn averages_path(&self) -> &Path {
        &self.averages_path
    }

    /// 磁盘上的平均量表（不存在时为 None）
    pub fn averages_on_disk(&self) -> Result<Option<AverageTable>> {
        if self.averages_path.is_file() {
            return parsers::parse_averages_file(&self.averages_path).map(Some);
        }
        if self.averages_explicit {
            return Err(AugerkitError::FileNotFound {
                path: self.averages_path.display().to_string(),
            });
        }
        Ok(None)
    }

    /// 平均量表：优先读取文件，缺失时由 Table 2 导出
    pub fn averages(&self) -> Result<AverageTable> {
        match self.averages_on_disk()? {
            Some(table) => {
                output::print_info(&format!(
                    "Using averages table '{}'",
                    self.averages_path.display()
                ));
                Ok(table)
            }
            None => {
                output::print_info("No averages table found, deriving it from Table 2");
                Ok(derive_averages(&self.table))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn test_load_and_averages_fallback() {
        let dir = std::env::temp_dir().join(format!("augerkit_context_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(TABLE2_FILE),
            "# Z st s\n26 1 1 5500 2200 3400 0 120 1850 3700 2900 1100 300 30 0 0\n",
        )
        .unwrap();

        let mut data = DataArgs {
            data_dir: dir.clone(),
            table: None,
            averages: None,
        };
        let ctx = DataContext::load(&data).unwrap();
        assert_eq!(ctx.table.len(), 1);
        assert!(ctx.averages_on_disk().unwrap().is_none());
        assert_eq!(ctx.averages().unwrap().len(), 1);

        data.averages = Some(dir.join("absent"));
        let ctx = DataContext::load(&data).unwrap();
        assert!(matches!(
            ctx.averages(),
            Err(AugerkitError::FileNotFound { .. })
        ));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_missing_directory() {
        let data = DataArgs {
            data_dir: PathBuf::from("/nonexistent/augerkit"),
            table: None,
            averages: None,
        };
        assert!(matches!(
            DataContext::load(&data),
            Err(AugerkitError::DirectoryNotFound { .. })
        ));
    }
}
