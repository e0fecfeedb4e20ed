//! # 数据模型模块
//!
//! 定义电离数据表行、导出平均量以及命名对照。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`tables/`、`analysis/` 和 `commands/` 使用
//! - 子模块: ionisation, nomenclature

pub mod ionisation;
pub mod nomenclature;

pub use ionisation::{AugerRecord, AverageRecord, Averages, IonKey, MAX_ELECTRONS};
pub use nomenclature::Nomenclature;
