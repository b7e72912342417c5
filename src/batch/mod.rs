//! # 批量计算模块
//!
//! 提供并行的参数扫描能力。
//!
//! ## 功能
//! - 并行执行独立的仿真任务
//! - 进度反馈与统计
//! - 正弦扫频（幅频曲线）
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod runner;
pub mod sweep;

pub use runner::{BatchResult, BatchRunner, TaskResult};
pub use sweep::{frequency_grid, run_sweep, SweepConfig, SweepPoint};
