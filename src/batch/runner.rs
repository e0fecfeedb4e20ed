//! # 批量执行器
//!
//! 依次处理一组任务，显示进度并汇总结果。
//!
//! ## 功能
//! - 顺序迭代（单线程）
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/render_all.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条

use crate::utils::progress;

/// 单个任务处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success,
    /// 跳过（如文件已存在）
    Skipped,
    /// 处理失败
    Failed(String, String), // (任务名, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success => self.success += 1,
            ProcessResult::Skipped => self.skipped += 1,
            ProcessResult::Failed(name, err) => {
                self.failed += 1;
                self.failures.push((name, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 进度条提示
    message: String,
}

impl BatchRunner {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    /// 依次处理任务列表
    pub fn run<T, F>(&self, items: &[T], mut processor: F) -> BatchResult
    where
        F: FnMut(&T) -> ProcessResult,
    {
        let pb = progress::create_progress_bar(items.len() as u64, &self.message);

        let mut batch_result = BatchResult::default();
        for item in items {
            batch_result.merge(processor(item));
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }
}
