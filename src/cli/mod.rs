//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `simulate`: 强迫响应积分 + GIF 动画
//! - `modes`: 固有频率与振型
//! - `sweep`: 正弦扫频幅频曲线
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: system, simulate, modes, sweep

pub mod modes;
pub mod simulate;
pub mod sweep;
pub mod system;

use clap::{Parser, Subcommand};

/// threedof - 三自由度质量-弹簧-阻尼系统仿真与动画
#[derive(Parser)]
#[command(name = "threedof")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Simulate and animate a 3-DOF mass-spring-damper chain", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Integrate the forced response and render the animation
    Simulate(simulate::SimulateArgs),

    /// Compute natural frequencies and mode shapes
    Modes(modes::ModesArgs),

    /// Sweep the forcing frequency and record steady-state amplitudes
    Sweep(sweep::SweepArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_simulate_defaults() {
        let cli = Cli::try_parse_from(["threedof", "simulate"]).unwrap();
        match cli.command {
            Commands::Simulate(args) => {
                assert_eq!(args.samples, 6000);
                assert_eq!(args.dof, 1);
                assert_eq!(args.speed, 6.0);
                assert!(args.preview.is_none());
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn test_dof_range_enforced() {
        assert!(Cli::try_parse_from(["threedof", "simulate", "--dof", "4"]).is_err());
        assert!(Cli::try_parse_from(["threedof", "sweep", "--dof", "3", "--k1", "20"]).is_ok());
    }
}
