//! # inspect 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use clap::Args;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Allowed excess of the probability sum over 1 and of mean-count differences
    #[arg(long, default_value_t = 1e-3)]
    pub tolerance: f64,

    /// Number of offending entries to list
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}
