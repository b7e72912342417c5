//! # simulate 子命令 CLI 定义
//!
//! 积分强迫响应并输出动画。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/simulate.rs`

use super::system::{InterpMode, SystemArgs};

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 激励类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ForceKind {
    /// Sinusoidal force: amp · sin(2π f t)
    #[default]
    Sine,
    /// Linear chirp from f0 to f1 over the simulated time span
    Chirp,
}

/// simulate 子命令参数
#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub system: SystemArgs,

    // ─────────────────────────────────────────────────────────────
    // 时间网格
    // ─────────────────────────────────────────────────────────────
    /// End of the simulated time span (s)
    #[arg(long, env = "THREEDOF_T_END", default_value_t = 600.0)]
    pub t_end: f64,

    /// Number of time samples (including both ends)
    #[arg(long, env = "THREEDOF_SAMPLES", default_value_t = 6000)]
    pub samples: usize,

    /// How the input is interpolated between samples
    #[arg(long, value_enum, default_value = "linear")]
    pub interp: InterpMode,

    // ─────────────────────────────────────────────────────────────
    // 激励
    // ─────────────────────────────────────────────────────────────
    /// Forcing signal
    #[arg(long, value_enum, default_value = "sine")]
    pub force: ForceKind,

    /// Mass that receives the force (1 = top mass)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub dof: u8,

    /// Force amplitude (N)
    #[arg(long, default_value_t = 1.0)]
    pub amp: f64,

    /// Sine frequency (Hz)
    #[arg(long, default_value_t = 0.05)]
    pub freq: f64,

    /// Chirp start frequency (Hz)
    #[arg(long, default_value_t = 0.01)]
    pub f0: f64,

    /// Chirp end frequency (Hz)
    #[arg(long, default_value_t = 1.0)]
    pub f1: f64,

    /// Chirp phase offset (degrees)
    #[arg(long, default_value_t = 90.0)]
    pub phase: f64,

    // ─────────────────────────────────────────────────────────────
    // 动画与输出
    // ─────────────────────────────────────────────────────────────
    /// Output GIF file
    #[arg(short, long, default_value = "three_dof_demo.gif")]
    pub output: PathBuf,

    /// Skip GIF rendering
    #[arg(long, default_value_t = false)]
    pub no_gif: bool,

    /// Playback speed multiplier (2.0 = twice as fast)
    #[arg(long, default_value_t = 6.0)]
    pub speed: f64,

    /// Base frames per second (the GIF uses fps × speed unless --gif-fps is given)
    #[arg(long, default_value_t = 10)]
    pub fps: u32,

    /// Explicit GIF frame rate, overrides fps × speed
    #[arg(long)]
    pub gif_fps: Option<u32>,

    /// Render every n-th frame into the GIF
    #[arg(long, default_value_t = 1)]
    pub frame_step: usize,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Save a single-frame preview image (.png or .svg)
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Frame index used for the preview (default: last frame)
    #[arg(long)]
    pub preview_frame: Option<usize>,

    /// Export the response (t, displacements, velocities) to CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
