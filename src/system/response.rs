//! # 强迫响应积分
//!
//! 线性时不变系统的精确离散化：对增广分块矩阵求矩阵指数，
//! 得到离散状态转移矩阵和输入矩阵，然后逐步递推。
//!
//! ## 输入插值
//! - `Linear`: 采样点之间线性插值（一阶保持），默认
//! - `ZeroOrderHold`: 采样间隔内保持常值
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs`, `batch/sweep.rs` 调用
//! - 使用 `system/state_space.rs` 的 StateSpace

use crate::error::{Result, ThreeDofError};
use crate::system::StateSpace;

use nalgebra::{DMatrix, DVector};

/// 步长一致性容差（相对 / 绝对）
const STEP_RTOL: f64 = 1e-5;
const STEP_ATOL: f64 = 1e-8;

/// 输入信号在采样点之间的插值方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// 一阶保持（线性插值）
    #[default]
    Linear,
    /// 零阶保持
    ZeroOrderHold,
}

/// 时域响应
#[derive(Debug, Clone)]
pub struct Response {
    /// 时间 (s)
    pub t: Vec<f64>,
    /// 输出 y (len(t) × n_outputs)
    pub y: DMatrix<f64>,
    /// 状态 x (len(t) × n_states)
    pub x: DMatrix<f64>,
}

impl Response {
    /// 位移轨迹（状态的前 n 列）
    pub fn displacements(&self, ndof: usize) -> DMatrix<f64> {
        self.x.columns(0, ndof).into_owned()
    }

    /// 速度轨迹（状态的后 n 列）
    pub fn velocities(&self, ndof: usize) -> DMatrix<f64> {
        self.x.columns(ndof, ndof).into_owned()
    }

    /// 从 `start` 开始每个输出通道的峰值绝对值
    pub fn peak_amplitudes(&self, start: usize) -> Vec<f64> {
        (0..self.y.ncols())
            .map(|j| {
                self.y
                    .column(j)
                    .iter()
                    .skip(start)
                    .fold(0.0_f64, |acc, v| acc.max(v.abs()))
            })
            .collect()
    }
}

/// 以零初始状态计算系统对输入 `u` 的响应
///
/// `u` 的行数必须等于 `len(t)`，列数等于系统输入维数；
/// 时间向量必须严格递增且等间隔。
pub fn simulate_response(
    ss: &StateSpace,
    t: &[f64],
    u: &DMatrix<f64>,
    interpolation: Interpolation,
) -> Result<Response> {
    let n_steps = t.len();
    if n_steps == 0 {
        return Err(ThreeDofError::EmptyTimeVector);
    }
    let n_states = ss.n_states();
    let n_inputs = ss.n_inputs();
    if u.nrows() != n_steps {
        return Err(ThreeDofError::dimension("input rows", n_steps, u.nrows()));
    }
    if u.ncols() != n_inputs {
        return Err(ThreeDofError::dimension("input columns", n_inputs, u.ncols()));
    }

    let mut x = DMatrix::<f64>::zeros(n_steps, n_states);

    if n_steps > 1 {
        let dt = uniform_step(t)?;
        let (ad, bd0, bd1) = discretize(ss, dt, interpolation);

        let mut state = DVector::<f64>::zeros(n_states);
        let mut u_prev: DVector<f64> = u.row(0).transpose();
        for i in 1..n_steps {
            let u_cur: DVector<f64> = u.row(i).transpose();
            let mut next = &ad * &state + &bd0 * &u_prev;
            if let Some(ref bd1) = bd1 {
                next += bd1 * &u_cur;
            }
            x.set_row(i, &next.transpose());
            state = next;
            u_prev = u_cur;
        }
    }

    let y = &x * ss.c.transpose() + u * ss.d.transpose();

    Ok(Response {
        t: t.to_vec(),
        y,
        x,
    })
}

/// 检查时间步长并返回步长
fn uniform_step(t: &[f64]) -> Result<f64> {
    let dt = t[1] - t[0];
    if !(dt > 0.0) {
        return Err(ThreeDofError::NonUniformTimeStep {
            index: 0,
            expected: dt,
            found: dt,
        });
    }
    for (index, w) in t.windows(2).enumerate() {
        let step = w[1] - w[0];
        if (step - dt).abs() > STEP_ATOL + STEP_RTOL * dt.abs() {
            return Err(ThreeDofError::NonUniformTimeStep {
                index,
                expected: dt,
                found: step,
            });
        }
    }
    Ok(dt)
}

/// 离散化
///
/// 返回 (Ad, Bd0, Bd1)，递推式为
/// `x[i] = Ad x[i-1] + Bd0 u[i-1] + Bd1 u[i]`；零阶保持时没有 Bd1。
fn discretize(
    ss: &StateSpace,
    dt: f64,
    interpolation: Interpolation,
) -> (DMatrix<f64>, DMatrix<f64>, Option<DMatrix<f64>>) {
    let n = ss.n_states();
    let m = ss.n_inputs();

    match interpolation {
        Interpolation::ZeroOrderHold => {
            // | A dt  B dt |
            // |  0     0   |
            let big = DMatrix::from_fn(n + m, n + m, |i, j| {
                if i >= n {
                    0.0
                } else if j < n {
                    ss.a[(i, j)] * dt
                } else {
                    ss.b[(i, j - n)] * dt
                }
            });
            let e = big.exp();
            let ad = e.copy_block(0, 0, n, n);
            let bd = e.copy_block(0, n, n, m);
            (ad, bd, None)
        }
        Interpolation::Linear => {
            // | A dt  B dt  0 |
            // |  0     0    I |
            // |  0     0    0 |
            let size = n + 2 * m;
            let big = DMatrix::from_fn(size, size, |i, j| {
                if i < n {
                    if j < n {
                        ss.a[(i, j)] * dt
                    } else if j < n + m {
                        ss.b[(i, j - n)] * dt
                    } else {
                        0.0
                    }
                } else if i < n + m {
                    if j >= n + m && j - (n + m) == i - n {
                        1.0
                    } else {
                        0.0
                    }
                } else {
                    0.0
                }
            });
            let e = big.exp();
            let ad = e.copy_block(0, 0, n, n);
            let bd1 = e.copy_block(0, n + m, n, m);
            let bd0 = e.copy_block(0, n, n, m) - &bd1;
            (ad, bd0, Some(bd1))
        }
    }
}

/// 复制子块
trait BlockCopy {
    fn copy_block(&self, row: usize, col: usize, nrows: usize, ncols: usize) -> DMatrix<f64>;
}

impl BlockCopy for DMatrix<f64> {
    fn copy_block(&self, row: usize, col: usize, nrows: usize, ncols: usize) -> DMatrix<f64> {
        DMatrix::from_fn(nrows, ncols, |i, j| self[(row + i, col + j)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::{build_matrices, state_space};
    use crate::utils::grid::linspace;

    #[test]
    fn test_zero_input_stays_at_rest() {
        let ss = state_space(&build_matrices(1.0, 0.1, 0.1, 16.0, 16.0)).unwrap();
        let t = linspace(0.0, 5.0, 51);
        let u = DMatrix::<f64>::zeros(t.len(), 3);
        let r = simulate_response(&ss, &t, &u, Interpolation::Linear).unwrap();

        assert_eq!(r.y.shape(), (51, 3));
        assert_eq!(r.x.shape(), (51, 6));
        assert!(r.x.iter().all(|v| v.abs() < 1e-15));
    }

    #[test]
    fn test_step_input_settles_at_static_deflection() {
        // 强阻尼下常力响应收敛到 K⁻¹ F
        let sys = build_matrices(1.0, 4.0, 4.0, 16.0, 16.0);
        let ss = state_space(&sys).unwrap();
        let t = linspace(0.0, 60.0, 1201);
        let mut u = DMatrix::<f64>::zeros(t.len(), 3);
        for i in 0..t.len() {
            u[(i, 0)] = 1.0;
        }

        for interp in [Interpolation::Linear, Interpolation::ZeroOrderHold] {
            let r = simulate_response(&ss, &t, &u, interp).unwrap();
            // K⁻¹ e1: 基础弹簧承担全部载荷，三个质量都平移 1/k1
            let last = r.y.row(t.len() - 1);
            for j in 0..3 {
                assert!(
                    (last[j] - 1.0 / 16.0).abs() < 1e-4,
                    "dof {} settled at {}",
                    j,
                    last[j]
                );
            }
        }
    }

    #[test]
    fn test_linear_interpolation_matches_single_dof_ramp() {
        // 无阻尼无刚度时 ẍ = u/m，输入 u = t 得到 x = t³/6，一阶保持应精确
        let sys = build_matrices(1.0, 0.0, 0.0, 0.0, 0.0);
        let ss = state_space(&sys).unwrap();
        let t = linspace(0.0, 2.0, 21);
        let mut u = DMatrix::<f64>::zeros(t.len(), 3);
        for (i, ti) in t.iter().enumerate() {
            u[(i, 2)] = *ti;
        }
        let r = simulate_response(&ss, &t, &u, Interpolation::Linear).unwrap();
        let x_end = r.y[(t.len() - 1, 2)];
        assert!((x_end - 8.0 / 6.0).abs() < 1e-9);
        assert!(r.y[(t.len() - 1, 0)].abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_returns_initial_state() {
        let ss = state_space(&build_matrices(1.0, 0.1, 0.1, 16.0, 16.0)).unwrap();
        let u = DMatrix::from_element(1, 3, 1.0);
        let r = simulate_response(&ss, &[0.0], &u, Interpolation::Linear).unwrap();
        assert_eq!(r.t.len(), 1);
        assert!(r.x.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let ss = state_space(&build_matrices(1.0, 0.1, 0.1, 16.0, 16.0)).unwrap();

        let u = DMatrix::<f64>::zeros(0, 3);
        assert!(matches!(
            simulate_response(&ss, &[], &u, Interpolation::Linear),
            Err(ThreeDofError::EmptyTimeVector)
        ));

        let u = DMatrix::<f64>::zeros(3, 3);
        assert!(matches!(
            simulate_response(&ss, &[0.0, 0.1, 0.3], &u, Interpolation::Linear),
            Err(ThreeDofError::NonUniformTimeStep { index: 1, .. })
        ));

        let u = DMatrix::<f64>::zeros(2, 3);
        assert!(matches!(
            simulate_response(&ss, &[0.0, 0.1, 0.2], &u, Interpolation::Linear),
            Err(ThreeDofError::DimensionMismatch { .. })
        ));

        let u = DMatrix::<f64>::zeros(3, 2);
        assert!(matches!(
            simulate_response(&ss, &[0.0, 0.1, 0.2], &u, Interpolation::Linear),
            Err(ThreeDofError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_peak_amplitudes_skip_transient() {
        let r = Response {
            t: vec![0.0, 1.0, 2.0],
            y: DMatrix::from_row_slice(3, 2, &[5.0, 0.0, 1.0, -2.0, -0.5, 1.0]),
            x: DMatrix::zeros(3, 4),
        };
        assert_eq!(r.peak_amplitudes(0), vec![5.0, 2.0]);
        assert_eq!(r.peak_amplitudes(1), vec![1.0, 2.0]);
    }
}
