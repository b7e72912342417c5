//! # 激励模块
//!
//! 生成作用在质量块上的外力时程。
//!
//! ## 子模块
//! - `signals`: 正弦与线性扫频信号
//! - `input`: 组装输入矩阵 u (len(t) × ndof)
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs`, `batch/sweep.rs` 调用

pub mod input;
pub mod signals;

pub use input::build_input;
pub use signals::{chirp_force, sine_force};
