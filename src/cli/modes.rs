//! # modes 子命令 CLI 定义
//!
//! 计算固有频率与振型。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/modes.rs`

use super::system::SystemArgs;

use clap::Args;
use std::path::PathBuf;

/// modes 子命令参数
#[derive(Args, Debug)]
pub struct ModesArgs {
    #[command(flatten)]
    pub system: SystemArgs,

    /// Export eigenvalues, frequencies and mode shapes to CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
