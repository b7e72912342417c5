//! # 三自由度系统模块
//!
//! 质量-弹簧-阻尼链的数值核心。
//!
//! ## 子模块
//! - `matrices`: 质量/阻尼/刚度矩阵组装
//! - `state_space`: 状态空间模型 (A, B, C, D)
//! - `response`: 强迫响应时域积分
//! - `modal`: 广义特征值问题（固有频率与振型）
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `batch/` 调用
//! - 使用 `nalgebra` 进行矩阵运算

pub mod matrices;
pub mod modal;
pub mod response;
pub mod state_space;

pub use matrices::{build_matrices, SystemMatrices, SystemParameters};
pub use modal::{eigen_properties, ModalProperties};
pub use response::{simulate_response, Interpolation, Response};
pub use state_space::{state_space, StateSpace};

/// 自由度数
pub const NDOF: usize = 3;
