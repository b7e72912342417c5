//! # threedof - 三自由度质量-弹簧-阻尼系统仿真
//!
//! 构建串联三质量系统的状态空间模型，计算强迫响应与固有模态，
//! 并导出左右并排的示意图/位移曲线动画。
//!
//! ## 子命令
//! - `simulate` - 强迫响应仿真与 GIF 动画
//! - `modes`    - 固有频率与振型
//! - `sweep`    - 并行正弦扫频（幅频曲线）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── system/    (M/C/K、状态空间、响应、模态)
//!   │     ├── forces/    (激励信号)
//!   │     ├── animation/ (动画渲染)
//!   │     ├── batch/     (并行扫频)
//!   │     └── export/    (CSV 与绘图)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod animation;
mod batch;
mod cli;
mod commands;
mod error;
mod export;
mod forces;
mod system;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
