//! # 分析模块
//!
//! 基于查表的加权平均与聚合。
//!
//! ## 子模块
//! - `distribution`: 发射电子数分布与平均电子数
//! - `averages`: 平均电子/光子数目与能量
//! - `check`: 表格自洽性检查
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `tables/`, `models/`

pub mod averages;
pub mod check;
pub mod distribution;

pub use averages::{derive_averages, element_profile, stage_profile};
pub use check::{check_table, TableReport};
pub use distribution::{electron_distribution, mean_electron_profile, ElectronDistribution};

/// 以整数为横坐标的序列，表中缺失处为 None
pub type Profile<T> = Vec<(u32, Option<T>)>;
