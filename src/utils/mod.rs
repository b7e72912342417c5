//! # 工具函数模块
//!
//! 提供美化输出、进度条、等距网格等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`, `animation/`, `batch/` 使用
//! - 子模块: grid, output, progress

pub mod grid;
pub mod output;
pub mod progress;
