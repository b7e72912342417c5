//! # sweep 子命令 CLI 定义
//!
//! 正弦激励频率扫描（幅频曲线）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sweep.rs`

use super::system::{InterpMode, SystemArgs};

use clap::Args;
use std::path::PathBuf;

/// sweep 子命令参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub system: SystemArgs,

    /// Lowest forcing frequency (Hz)
    #[arg(long, default_value_t = 0.05)]
    pub from: f64,

    /// Highest forcing frequency (Hz)
    #[arg(long, default_value_t = 1.5)]
    pub to: f64,

    /// Number of frequencies (including both ends)
    #[arg(long, default_value_t = 60)]
    pub steps: usize,

    /// Mass that receives the force (1 = top mass)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub dof: u8,

    /// Force amplitude (N)
    #[arg(long, default_value_t = 1.0)]
    pub amp: f64,

    /// Simulated time per frequency (s)
    #[arg(long, env = "THREEDOF_T_END", default_value_t = 300.0)]
    pub t_end: f64,

    /// Number of time samples per frequency
    #[arg(long, env = "THREEDOF_SAMPLES", default_value_t = 3000)]
    pub samples: usize,

    /// Fraction of the time span discarded as transient before taking peaks
    #[arg(long, default_value_t = 0.5)]
    pub settle: f64,

    /// How the input is interpolated between samples
    #[arg(long, value_enum, default_value = "linear")]
    pub interp: InterpMode,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Output CSV file (frequency, peak amplitude per mass)
    #[arg(short, long, default_value = "sweep.csv")]
    pub output: PathBuf,

    /// Save the amplitude curves as an image (.png or .svg)
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}
