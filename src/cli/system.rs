//! # 系统参数 CLI 定义
//!
//! simulate / modes / sweep 共用的物理参数与积分设置。
//! 每个参数都可通过 `THREEDOF_*` 环境变量提供。
//!
//! ## 依赖关系
//! - 被 `cli/simulate.rs`, `cli/modes.rs`, `cli/sweep.rs` 使用

use crate::system::{Interpolation, SystemParameters};

use clap::{Args, ValueEnum};

/// 物理参数
#[derive(Args, Debug, Clone)]
pub struct SystemArgs {
    /// Mass of each block (kg)
    #[arg(long, env = "THREEDOF_M", default_value_t = 1.0)]
    pub m: f64,

    /// Damping coefficient between neighbouring masses (N·s/m)
    #[arg(long, env = "THREEDOF_C", default_value_t = 0.1)]
    pub c: f64,

    /// Damping coefficient between mass 1 and the ground (N·s/m)
    #[arg(long, env = "THREEDOF_C1", default_value_t = 0.1)]
    pub c1: f64,

    /// Spring stiffness between neighbouring masses (N/m)
    #[arg(long, env = "THREEDOF_K", default_value_t = 16.0)]
    pub k: f64,

    /// Spring stiffness between mass 1 and the ground (N/m)
    #[arg(long, env = "THREEDOF_K1", default_value_t = 16.0)]
    pub k1: f64,
}

impl SystemArgs {
    pub fn parameters(&self) -> SystemParameters {
        SystemParameters {
            m: self.m,
            c: self.c,
            c1: self.c1,
            k: self.k,
            k1: self.k1,
        }
    }
}

/// 输入插值方式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum InterpMode {
    /// Linear interpolation between samples (first-order hold)
    #[default]
    Linear,
    /// Hold each sample until the next one (zero-order hold)
    Zoh,
}

impl From<InterpMode> for Interpolation {
    fn from(mode: InterpMode) -> Self {
        match mode {
            InterpMode::Linear => Interpolation::Linear,
            InterpMode::Zoh => Interpolation::ZeroOrderHold,
        }
    }
}

impl std::fmt::Display for InterpMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpMode::Linear => write!(f, "linear"),
            InterpMode::Zoh => write!(f, "zoh"),
        }
    }
}
