//! # 统一错误处理模块
//!
//! 定义 augerkit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// augerkit 统一错误类型
#[derive(Error, Debug)]
pub enum AugerkitError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path} (line {line})\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        line: usize,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 查表错误
    // ─────────────────────────────────────────────────────────────
    #[error("No table entry for Z={z}, stage={stage}, shell={shell}")]
    KeyNotFound { z: u32, stage: u32, shell: u32 },

    #[error("No table entries for Z={z}")]
    ElementNotInTable { z: u32 },

    #[error("Unknown element: {0}")]
    UnknownElement(String),

    #[error("Unknown shell: {0}")]
    UnknownShell(String),

    #[error("Invalid ion designation: {0}")]
    InvalidIon(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AugerkitError>;
