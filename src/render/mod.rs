//! # 输出渲染模块
//!
//! ## 子模块
//! - `series`: 阶梯曲线数据
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `analysis/` 的结果结构

pub mod export;
pub mod plot;
pub mod series;

pub use plot::ChartLayout;
pub use series::StepSeries;
