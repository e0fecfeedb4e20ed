//! # 批量处理模块
//!
//! 提供统一的批量处理能力。
//!
//! ## 功能
//! - 顺序处理任务列表
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/render_all.rs` 使用
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::{BatchRunner, ProcessResult};
