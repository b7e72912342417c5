//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `system/`, `forces/`, `animation/`, `export/`, `batch/`, `utils/`
//! - 子模块: simulate, modes, sweep

pub mod modes;
pub mod simulate;
pub mod sweep;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Simulate(args) => simulate::execute(args),
        Commands::Modes(args) => modes::execute(args),
        Commands::Sweep(args) => sweep::execute(args),
    }
}
