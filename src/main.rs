//! # augerkit - 内壳层电离 Auger 数据工具箱
//!
//! 读取 Kaastra & Mewe (1993) Table 2，计算内壳层空穴退激发射的
//! 电子数分布、荧光产额与平均能量，并绘图或导出。
//!
//! ## 子命令
//! - `analyze` - 分析功能
//!   - `distribution` - 发射电子数概率分布
//!   - `mean-electrons` - 平均发射电子数随 Z 变化
//!   - `stages` - 平均量随电离级变化
//!   - `elements` - 中性原子平均量随 Z 变化
//! - `export` - 导出平均电子/光子表
//! - `inspect` - 表格概况与自洽性检查
//! - `render-all` - 批量绘制分布图
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (表格解析器)
//!   │     ├── tables/    (按键查询的表)
//!   │     ├── analysis/  (分布与平均量)
//!   │     ├── render/    (绘图与导出)
//!   │     └── models/    (数据模型)
//!   ├── batch/      (批量执行)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod analysis;
mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod render;
mod tables;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
