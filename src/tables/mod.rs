//! # 查表模块
//!
//! 提供按 (Z, st, s) 检索的只读内存表。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `analysis/`, `commands/` 使用
//! - 子模块: keyed

pub mod keyed;

pub use keyed::{AugerTable, AverageTable};
