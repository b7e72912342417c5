//! # 模态分析
//!
//! 求解广义特征值问题 `K ψ = λ M ψ`。
//!
//! ## 算法概述
//! 1. Cholesky 分解 `M = L Lᵀ`
//! 2. 变换为标准对称问题 `L⁻¹ K L⁻ᵀ y = λ y`
//! 3. 回代 `ψ = L⁻ᵀ y`，按 λ 升序排列
//! 4. 振型归一化为单位欧氏范数，最大分量取正
//! 5. `f = √λ / 2π`
//!
//! ## 依赖关系
//! - 被 `commands/modes.rs`, `commands/sweep.rs` 调用
//! - 使用 `nalgebra` 的 Cholesky 与 SymmetricEigen

use crate::error::{Result, ThreeDofError};
use crate::system::SystemMatrices;

use nalgebra::{Matrix3, SymmetricEigen, Vector3};
use std::f64::consts::PI;

/// 模态特性
#[derive(Debug, Clone)]
pub struct ModalProperties {
    /// 特征值 λ = ω² (rad²/s²)，升序
    pub eigenvalues: Vector3<f64>,
    /// 振型矩阵，第 i 列对应第 i 个特征值
    pub mode_shapes: Matrix3<f64>,
    /// 固有频率 (Hz)
    pub frequencies_hz: Vector3<f64>,
}

impl ModalProperties {
    /// 第 `i` 阶振型
    pub fn mode_shape(&self, i: usize) -> Vector3<f64> {
        self.mode_shapes.column(i).into_owned()
    }

    /// 固有圆频率 (rad/s)
    pub fn angular_frequencies(&self) -> Vector3<f64> {
        self.frequencies_hz * (2.0 * PI)
    }
}

/// 计算特征值、振型和固有频率
pub fn eigen_properties(sys: &SystemMatrices) -> Result<ModalProperties> {
    let chol = sys.mass.cholesky().ok_or_else(|| {
        ThreeDofError::SingularMatrix("mass matrix is not positive definite".into())
    })?;
    let l_inv = chol
        .l()
        .try_inverse()
        .ok_or_else(|| ThreeDofError::SingularMatrix("Cholesky factor not invertible".into()))?;

    let k_tilde = l_inv * sys.stiffness * l_inv.transpose();
    // 消除舍入误差造成的非对称
    let k_sym = (k_tilde + k_tilde.transpose()) * 0.5;

    let eig = SymmetricEigen::new(k_sym);

    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| {
        eig.eigenvalues[a]
            .partial_cmp(&eig.eigenvalues[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut eigenvalues = Vector3::zeros();
    let mut mode_shapes = Matrix3::zeros();
    for (col, &idx) in order.iter().enumerate() {
        eigenvalues[col] = eig.eigenvalues[idx];
        let phi = l_inv.transpose() * eig.eigenvectors.column(idx);
        mode_shapes.set_column(col, &normalize_shape(phi));
    }

    let frequencies_hz = eigenvalues.map(|lambda| lambda.max(0.0).sqrt() / (2.0 * PI));

    Ok(ModalProperties {
        eigenvalues,
        mode_shapes,
        frequencies_hz,
    })
}

/// 单位范数，且绝对值最大的分量为正
fn normalize_shape(phi: Vector3<f64>) -> Vector3<f64> {
    let norm = phi.norm();
    if norm == 0.0 {
        return phi;
    }
    let dominant = phi.iter().fold(0.0_f64, |acc, v| if v.abs() > acc.abs() { *v } else { acc });
    let sign = if dominant < 0.0 { -1.0 } else { 1.0 };
    phi * (sign / norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::build_matrices;

    #[test]
    fn test_eigen_residual_and_order() {
        let sys = build_matrices(1.0, 0.1, 0.1, 16.0, 16.0);
        let modal = eigen_properties(&sys).unwrap();

        assert!(modal.eigenvalues[0] <= modal.eigenvalues[1]);
        assert!(modal.eigenvalues[1] <= modal.eigenvalues[2]);

        for i in 0..3 {
            let psi = modal.mode_shape(i);
            let residual = sys.stiffness * psi - sys.mass * psi * modal.eigenvalues[i];
            assert!(residual.norm() < 1e-9, "mode {} residual {}", i, residual.norm());
            assert!((psi.norm() - 1.0).abs() < 1e-12);
            assert!(psi.iter().cloned().fold(f64::MIN, f64::max) > 0.0);
        }
    }

    #[test]
    fn test_chain_eigenvalues_closed_form() {
        // 固定-自由链: λ_j = (k/m)(2 - 2cos((2j-1)π/7))
        let (m, k) = (2.0, 16.0);
        let sys = build_matrices(m, 0.0, 0.0, k, k);
        let modal = eigen_properties(&sys).unwrap();

        for j in 0..3 {
            let theta = (2 * j + 1) as f64 * PI / 7.0;
            let expected = k / m * (2.0 - 2.0 * theta.cos());
            assert!((modal.eigenvalues[j] - expected).abs() < 1e-9);
            let f = expected.sqrt() / (2.0 * PI);
            assert!((modal.frequencies_hz[j] - f).abs() < 1e-12);
        }
    }

    #[test]
    fn test_first_mode_in_phase() {
        let sys = build_matrices(1.0, 0.1, 0.1, 16.0, 16.0);
        let modal = eigen_properties(&sys).unwrap();
        let first = modal.mode_shape(0);
        assert!(first.iter().all(|v| *v > 0.0));
        // 自由端位移最大
        assert!(first[2] > first[1] && first[1] > first[0]);
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        let sys = build_matrices(-1.0, 0.1, 0.1, 16.0, 16.0);
        assert!(matches!(
            eigen_properties(&sys),
            Err(ThreeDofError::SingularMatrix(_))
        ));
    }
}
