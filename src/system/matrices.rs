//! # 系统矩阵组装
//!
//! 三个等质量串联，顶端通过 (k1, c1) 连接到固定基础，
//! 相邻质量之间通过 (k, c) 相连。
//!
//! ## 依赖关系
//! - 被 `system/state_space.rs`, `system/modal.rs` 使用

use nalgebra::Matrix3;

/// 物理参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemParameters {
    /// 每个质量块的质量 (kg)
    pub m: f64,
    /// 质量块之间的阻尼系数 (N·s/m)
    pub c: f64,
    /// 质量 1 与基础之间的阻尼系数 (N·s/m)
    pub c1: f64,
    /// 质量块之间的弹簧刚度 (N/m)
    pub k: f64,
    /// 质量 1 与基础之间的弹簧刚度 (N/m)
    pub k1: f64,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            m: 1.0,
            c: 0.1,
            c1: 0.1,
            k: 16.0,
            k1: 16.0,
        }
    }
}

impl SystemParameters {
    /// 组装系统矩阵
    pub fn matrices(&self) -> SystemMatrices {
        build_matrices(self.m, self.c, self.c1, self.k, self.k1)
    }
}

/// 质量、阻尼、刚度矩阵
#[derive(Debug, Clone, PartialEq)]
pub struct SystemMatrices {
    pub mass: Matrix3<f64>,
    pub damping: Matrix3<f64>,
    pub stiffness: Matrix3<f64>,
}

/// 由标量参数组装 M, C, K
pub fn build_matrices(m: f64, c: f64, c1: f64, k: f64, k1: f64) -> SystemMatrices {
    let mass = Matrix3::from_diagonal_element(m);
    let stiffness = chain_matrix(k, k1);
    let damping = chain_matrix(c, c1);
    SystemMatrices {
        mass,
        damping,
        stiffness,
    }
}

/// 链式连接矩阵，刚度与阻尼结构相同
fn chain_matrix(coupling: f64, ground: f64) -> Matrix3<f64> {
    Matrix3::new(
        ground + coupling,
        -coupling,
        0.0,
        -coupling,
        2.0 * coupling,
        -coupling,
        0.0,
        -coupling,
        coupling,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_matrices_closed_form() {
        let sys = build_matrices(2.0, 0.1, 0.3, 16.0, 10.0);

        assert_eq!(sys.mass, Matrix3::from_diagonal_element(2.0));
        assert_eq!(
            sys.stiffness,
            Matrix3::new(26.0, -16.0, 0.0, -16.0, 32.0, -16.0, 0.0, -16.0, 16.0)
        );
        assert!((sys.damping[(0, 0)] - 0.4).abs() < 1e-12);
        assert!((sys.damping[(1, 1)] - 0.2).abs() < 1e-12);
        assert!((sys.damping[(2, 1)] + 0.1).abs() < 1e-12);
        assert_eq!(sys.damping[(0, 2)], 0.0);
    }

    #[test]
    fn test_matrices_are_symmetric() {
        let sys = SystemParameters::default().matrices();
        assert_eq!(sys.stiffness, sys.stiffness.transpose());
        assert_eq!(sys.damping, sys.damping.transpose());
    }
}
