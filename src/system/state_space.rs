//! # 状态空间模型
//!
//! 将二阶方程 `M ẍ + C ẋ + K x = u` 写成一阶形式：
//!
//! ```text
//! ż = A z + B u,   y = C z + D u,   z = [x; ẋ]
//!
//! A = | 0       I      |    B = | 0   |    C = | I  0 |    D = 0
//!     | -M⁻¹K  -M⁻¹C   |        | M⁻¹ |
//! ```
//!
//! ## 依赖关系
//! - 被 `system/response.rs` 使用
//! - 使用 `system/matrices.rs` 的 SystemMatrices

use crate::error::{Result, ThreeDofError};
use crate::system::{SystemMatrices, NDOF};

use nalgebra::{DMatrix, Matrix3};

/// 连续时间状态空间模型
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpace {
    /// 状态矩阵 (2n × 2n)
    pub a: DMatrix<f64>,
    /// 输入矩阵 (2n × n)
    pub b: DMatrix<f64>,
    /// 输出矩阵 (n × 2n)
    pub c: DMatrix<f64>,
    /// 直通矩阵 (n × n)
    pub d: DMatrix<f64>,
}

impl StateSpace {
    /// 状态维数
    pub fn n_states(&self) -> usize {
        self.a.nrows()
    }

    /// 输入维数
    pub fn n_inputs(&self) -> usize {
        self.b.ncols()
    }

    /// 输出维数
    pub fn n_outputs(&self) -> usize {
        self.c.nrows()
    }
}

/// 由 M, C, K 构造状态空间模型
pub fn state_space(sys: &SystemMatrices) -> Result<StateSpace> {
    let m_inv = sys
        .mass
        .try_inverse()
        .ok_or_else(|| ThreeDofError::SingularMatrix("mass matrix is not invertible".into()))?;

    let minv_k: Matrix3<f64> = -(m_inv * sys.stiffness);
    let minv_c: Matrix3<f64> = -(m_inv * sys.damping);
    let n = NDOF;

    let a = DMatrix::from_fn(2 * n, 2 * n, |i, j| match (i < n, j < n) {
        (true, true) => 0.0,
        (true, false) => {
            if j - n == i {
                1.0
            } else {
                0.0
            }
        }
        (false, true) => minv_k[(i - n, j)],
        (false, false) => minv_c[(i - n, j - n)],
    });
    let b = DMatrix::from_fn(2 * n, n, |i, j| if i < n { 0.0 } else { m_inv[(i - n, j)] });
    let c = DMatrix::from_fn(n, 2 * n, |i, j| if i == j { 1.0 } else { 0.0 });
    let d = DMatrix::zeros(n, n);

    Ok(StateSpace { a, b, c, d })
}
